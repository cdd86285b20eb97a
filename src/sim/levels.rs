//! Level rules: win requirements, completion checks and debris spawning
//!
//! Everything level-specific is a pure function of session state plus the
//! per-level record in `tuning`. One generic generator serves all twelve
//! levels; static-hazard seeding and Survival's incremental placer sit
//! alongside it.

use glam::IVec2;
use log::{debug, trace};
use rand::Rng;

use super::state::{boxes_intersect, Debris, DebrisType, GameLevel, GameState};
use crate::consts::*;
use crate::tuning::{LevelTuning, StaticHazards, WinCondition};

/// Install the current level's starting parameters: zero the counters and
/// set the timer and any resource quota from the tuning table.
pub fn set_level_requirements(state: &mut GameState) {
    state.score = 0;
    state.collected_metal = 0;
    state.collected_gold = 0;
    state.collected_diamond = 0;
    state.resource_score = 0;
    state.total_resources_collected = 0;
    state.uses_resource_goals = false;
    state.required_metal = 0;
    state.required_gold = 0;
    state.required_diamond = 0;

    let tuning = state.current_level.tuning();
    state.time_left = tuning.start_time;
    if let WinCondition::Resources {
        metal,
        gold,
        diamond,
    } = tuning.win
    {
        state.uses_resource_goals = true;
        state.required_metal = metal;
        state.required_gold = gold;
        state.required_diamond = diamond;
    }
}

/// Whether the current level's win condition is met
pub fn is_level_complete(state: &GameState) -> bool {
    match state.current_level.tuning().win {
        WinCondition::Endless => false,
        WinCondition::Resources { .. } => {
            state.collected_metal >= state.required_metal
                && state.collected_gold >= state.required_gold
                && state.collected_diamond >= state.required_diamond
        }
        WinCondition::Score(threshold) => state.score >= threshold,
    }
}

/// One spawn step: maybe add a piece of edge debris, and run the level's
/// static-hazard policy.
pub fn generate_debris(state: &mut GameState, rng: &mut impl Rng, width: i32, height: i32) {
    let tuning = state.current_level.tuning();

    let chance = if state.current_level == GameLevel::Survival {
        // Difficulty ramps with accumulated score: +100% per 200 points
        let ramp = 1.0 + state.score as f32 / 200.0;
        (tuning.spawn_chance as f32 * ramp) as u32
    } else {
        tuning.spawn_chance
    };

    if rng.random_range(0..100u32) < chance {
        let debris = spawn_from_edge(rng, tuning, width, height);
        trace!(
            "spawned {:?} at {} vel {} size {}",
            debris.kind, debris.pos, debris.vel, debris.size
        );
        state.debris.push(debris);
    }

    match tuning.statics {
        StaticHazards::None => {}
        StaticHazards::Seeded { min, max } => {
            if state.static_hazard_count() == 0 {
                let count = rng.random_range(min..=max);
                seed_static_hazards(state, rng, count, width, height);
            }
        }
        StaticHazards::Incremental => survival_static_step(state, rng, width, height),
    }
}

/// Roll a spawn edge, a type and a velocity biased to carry the debris
/// across the playfield.
fn spawn_from_edge(rng: &mut impl Rng, tuning: &LevelTuning, width: i32, height: i32) -> Debris {
    let (in_min, in_max) = tuning.inflow;
    let inflow = rng.random_range(in_min..=in_max);
    let drift = rng.random_range(-tuning.drift..=tuning.drift);

    let (pos, vel) = match rng.random_range(0..4u32) {
        // Top edge, falling down
        0 => (
            IVec2::new(rng.random_range(0..width), -SPAWN_MARGIN),
            IVec2::new(drift, inflow),
        ),
        // Bottom edge, rising
        1 => (
            IVec2::new(rng.random_range(0..width), height + SPAWN_MARGIN),
            IVec2::new(drift, -inflow),
        ),
        // Left edge, moving right
        2 => (
            IVec2::new(-SPAWN_MARGIN, rng.random_range(0..height)),
            IVec2::new(inflow, drift),
        ),
        // Right edge, moving left
        _ => (
            IVec2::new(width + SPAWN_MARGIN, rng.random_range(0..height)),
            IVec2::new(-inflow, drift),
        ),
    };

    let kind = tuning.weights.pick(rng.random_range(0..100u32));
    let collectible = kind != DebrisType::Standard;
    let size = if collectible {
        tuning.collectible_size
    } else {
        rng.random_range(tuning.hazard_size.0..=tuning.hazard_size.1)
    };

    Debris {
        pos,
        vel,
        size,
        collectible,
        kind,
        ..Debris::default()
    }
}

/// Seed a batch of static hazards, rejection-sampling positions so none
/// lands in the center safe zone or on another static. Placement attempts
/// are bounded; a hazard that cannot find room is skipped.
fn seed_static_hazards(
    state: &mut GameState,
    rng: &mut impl Rng,
    count: u32,
    width: i32,
    height: i32,
) {
    let mut placed = 0;
    for _ in 0..count {
        if let Some(hazard) = try_place_static(state, rng, width, height, MAX_PLACEMENT_ATTEMPTS) {
            state.debris.push(hazard);
            placed += 1;
        }
    }
    debug!("seeded {placed}/{count} static hazards");
}

/// Survival drips static hazards in once the darkness phase begins:
/// at most one per eligible tick, spaced by a minimum interval, capped at
/// a maximum concurrent count. A failed placement just waits for the next
/// eligible tick.
fn survival_static_step(state: &mut GameState, rng: &mut impl Rng, width: i32, height: i32) {
    if state.elapsed_time < DARKNESS_PHASE_START {
        return;
    }
    if state.static_hazard_count() >= SURVIVAL_STATIC_CAP {
        return;
    }
    if state.elapsed_time - state.last_static_spawn_time < SURVIVAL_STATIC_INTERVAL {
        return;
    }

    if let Some(hazard) = try_place_static(state, rng, width, height, SURVIVAL_STATIC_ATTEMPTS) {
        trace!("survival static at {} size {}", hazard.pos, hazard.size);
        state.debris.push(hazard);
        state.last_static_spawn_time = state.elapsed_time;
    }
}

/// Roll positions until one clears the safe zone and every existing static,
/// or the attempt budget runs out.
fn try_place_static(
    state: &GameState,
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    attempts: u32,
) -> Option<Debris> {
    let safe_zone = IVec2::new(
        width / 2 - SAFE_ZONE_SIZE / 2,
        height / 2 - SAFE_ZONE_SIZE / 2,
    );

    for _ in 0..attempts {
        let size = rng.random_range(STATIC_SIZE_MIN..=STATIC_SIZE_MAX);
        let pos = IVec2::new(
            rng.random_range(50..width - 50),
            rng.random_range(100..height - 100),
        );

        if boxes_intersect(pos, size, safe_zone, SAFE_ZONE_SIZE) {
            continue;
        }
        if state
            .debris
            .iter()
            .any(|d| d.is_static && boxes_intersect(d.pos, d.size, pos, size))
        {
            continue;
        }

        return Some(Debris {
            pos,
            size,
            collectible: false,
            is_static: true,
            kind: DebrisType::Standard,
            ..Debris::default()
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const W: i32 = 800;
    const H: i32 = 600;

    fn state_for(level: GameLevel) -> GameState {
        let mut state = GameState::new(W, H);
        state.current_level = level;
        set_level_requirements(&mut state);
        state
    }

    #[test]
    fn test_requirements_score_level() {
        let state = state_for(GameLevel::Tutorial);
        assert!(!state.uses_resource_goals);
        assert_eq!(state.required_metal, 0);
        assert!((state.time_left - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_requirements_resource_goal_level() {
        let state = state_for(GameLevel::ResourceGoal1);
        assert!(state.uses_resource_goals);
        assert_eq!(state.required_metal, 5);
        assert_eq!(state.required_gold, 3);
        assert_eq!(state.required_diamond, 0);
        assert!((state.time_left - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_requirements_survival_is_endless() {
        let state = state_for(GameLevel::Survival);
        assert!(state.time_left.is_infinite());
        assert!(!state.uses_resource_goals);
    }

    #[test]
    fn test_score_threshold_completion() {
        let mut state = state_for(GameLevel::Tutorial);
        state.score = 99;
        assert!(!is_level_complete(&state));
        state.score = 100;
        assert!(is_level_complete(&state));
    }

    #[test]
    fn test_resource_goal_completion_needs_every_counter() {
        let mut state = state_for(GameLevel::ResourceGoal1);
        state.collected_metal = 5;
        state.collected_gold = 3;
        // Diamond quota is zero: trivially satisfied
        assert!(is_level_complete(&state));

        state.collected_gold = 2;
        assert!(!is_level_complete(&state));
        state.collected_gold = 3;
        state.collected_metal = 4;
        assert!(!is_level_complete(&state));

        // Score is irrelevant on quota levels
        state.score = 10_000;
        assert!(!is_level_complete(&state));
    }

    #[test]
    fn test_survival_never_completes() {
        let mut state = state_for(GameLevel::Survival);
        state.score = 1_000_000;
        state.collected_metal = 999;
        state.collected_gold = 999;
        state.collected_diamond = 999;
        assert!(!is_level_complete(&state));
    }

    #[test]
    fn test_spawned_debris_moves_inward() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = GameLevel::ResourceHunt.tuning();
        for _ in 0..500 {
            let d = spawn_from_edge(&mut rng, tuning, W, H);
            assert!(d.active && !d.is_static);
            if d.pos.y < 0 {
                assert!(d.vel.y > 0, "top spawn must fall down");
            } else if d.pos.y > H {
                assert!(d.vel.y < 0, "bottom spawn must rise");
            } else if d.pos.x < 0 {
                assert!(d.vel.x > 0, "left spawn must move right");
            } else {
                assert!(d.vel.x < 0, "right spawn must move left");
            }
        }
    }

    #[test]
    fn test_hazard_sizes_vary_collectibles_fixed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let tuning = GameLevel::ResourceHunt.tuning();
        for _ in 0..500 {
            let d = spawn_from_edge(&mut rng, tuning, W, H);
            if d.collectible {
                assert_eq!(d.size, tuning.collectible_size);
                assert_ne!(d.kind, DebrisType::Standard);
            } else {
                assert_eq!(d.kind, DebrisType::Standard);
                assert!(d.size >= tuning.hazard_size.0 && d.size <= tuning.hazard_size.1);
            }
        }
    }

    #[test]
    fn test_seeded_statics_avoid_safe_zone_and_each_other() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = state_for(GameLevel::StaticHazards);
        generate_debris(&mut state, &mut rng, W, H);

        let statics: Vec<Debris> = state.debris.iter().copied().filter(|d| d.is_static).collect();
        assert!(!statics.is_empty());
        assert!(statics.len() <= 15);

        let safe_zone = IVec2::new(W / 2 - SAFE_ZONE_SIZE / 2, H / 2 - SAFE_ZONE_SIZE / 2);
        for (i, a) in statics.iter().enumerate() {
            assert!(!boxes_intersect(a.pos, a.size, safe_zone, SAFE_ZONE_SIZE));
            assert!(!a.collectible);
            assert_eq!(a.vel, IVec2::ZERO);
            for b in &statics[i + 1..] {
                assert!(!boxes_intersect(a.pos, a.size, b.pos, b.size));
            }
        }
    }

    #[test]
    fn test_statics_seed_only_once() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = state_for(GameLevel::DarkStatic);
        generate_debris(&mut state, &mut rng, W, H);
        let first = state.static_hazard_count();
        for _ in 0..100 {
            generate_debris(&mut state, &mut rng, W, H);
        }
        assert_eq!(state.static_hazard_count(), first);
    }

    #[test]
    fn test_tutorial_never_seeds_statics() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = state_for(GameLevel::Tutorial);
        for _ in 0..200 {
            generate_debris(&mut state, &mut rng, W, H);
        }
        assert_eq!(state.static_hazard_count(), 0);
    }

    #[test]
    fn test_survival_statics_wait_for_darkness() {
        let mut rng = Pcg32::seed_from_u64(13);
        let mut state = state_for(GameLevel::Survival);
        state.elapsed_time = DARKNESS_PHASE_START - 1.0;
        for _ in 0..300 {
            generate_debris(&mut state, &mut rng, W, H);
        }
        assert_eq!(state.static_hazard_count(), 0);

        state.elapsed_time = DARKNESS_PHASE_START;
        generate_debris(&mut state, &mut rng, W, H);
        assert_eq!(state.static_hazard_count(), 1);
        assert!((state.last_static_spawn_time - state.elapsed_time).abs() < 1e-6);
    }

    #[test]
    fn test_survival_statics_respect_interval_and_cap() {
        let mut rng = Pcg32::seed_from_u64(17);
        let mut state = state_for(GameLevel::Survival);
        state.elapsed_time = DARKNESS_PHASE_START;
        generate_debris(&mut state, &mut rng, W, H);
        assert_eq!(state.static_hazard_count(), 1);

        // Within the interval nothing more is placed
        state.elapsed_time += SURVIVAL_STATIC_INTERVAL / 2.0;
        generate_debris(&mut state, &mut rng, W, H);
        assert_eq!(state.static_hazard_count(), 1);

        // Step past the interval repeatedly until the cap is hit
        for _ in 0..50 {
            state.elapsed_time += SURVIVAL_STATIC_INTERVAL;
            generate_debris(&mut state, &mut rng, W, H);
        }
        assert_eq!(state.static_hazard_count(), SURVIVAL_STATIC_CAP);
    }

    #[test]
    fn test_survival_spawn_chance_ramps_with_score() {
        // With enough score the roll can't fail: every tick spawns
        let mut rng = Pcg32::seed_from_u64(19);
        let mut state = state_for(GameLevel::Survival);
        state.score = 3000; // chance = 8 * (1 + 15) = 128 > any roll
        let before = state.debris.len();
        for _ in 0..20 {
            generate_debris(&mut state, &mut rng, W, H);
        }
        assert_eq!(state.debris.len(), before + 20);
    }

    #[test]
    fn test_try_place_static_gives_up_when_crowded() {
        // Fill the legal band with one huge fake static so nothing fits
        let mut rng = Pcg32::seed_from_u64(23);
        let mut state = state_for(GameLevel::StaticHazards);
        state.debris.push(Debris {
            pos: IVec2::new(-200, -200),
            size: 2000,
            collectible: false,
            is_static: true,
            ..Debris::default()
        });
        assert!(try_place_static(&state, &mut rng, W, H, 16).is_none());
    }
}
