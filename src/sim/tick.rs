//! Fixed timestep simulation loop
//!
//! `Simulation` owns the playfield dimensions and the session RNG; the host
//! owns the `GameState` and calls [`Simulation::tick`] once per frame at
//! 60 Hz, optionally feeding directional intent first via
//! [`Simulation::set_player_direction_and_move`].

use std::f32::consts::FRAC_PI_2;

use glam::IVec2;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::levels;
use super::state::{boxes_intersect, DebrisType, GameLevel, GameScreen, GameState, Player};
use crate::consts::*;

/// The simulation engine for one play session
pub struct Simulation {
    width: i32,
    height: i32,
    rng: Pcg32,
}

impl Simulation {
    /// Playfield dimensions come from the host; the seed makes a session
    /// reproducible under identical inputs.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        Self {
            width,
            height,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn playfield(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Advance the session by one fixed timestep.
    ///
    /// No-op unless the session is actively playing. Order per tick:
    /// timer, debris advance + cull, collisions, spawn step, win check,
    /// heading easing.
    pub fn tick(&mut self, state: &mut GameState) {
        if state.current_screen != GameScreen::Playing
            || state.is_game_over
            || state.is_level_complete
        {
            return;
        }

        state.elapsed_time += SIM_DT;

        if state.current_level != GameLevel::Survival {
            state.time_left -= SIM_DT;
            if state.time_left <= 0.0 {
                debug!("flight time exhausted at score {}", state.score);
                state.is_game_over = true;
                state.current_screen = GameScreen::GameOverScreen;
                return;
            }
        }

        // Advance the field; anything whose box drifts a full size outside
        // the bounds is done for
        for d in &mut state.debris {
            if !d.active || d.is_static {
                continue;
            }
            d.pos += d.vel;
            if d.pos.x < -d.size
                || d.pos.x > self.width + d.size
                || d.pos.y < -d.size
                || d.pos.y > self.height + d.size
            {
                d.active = false;
            }
        }
        state.debris.retain(|d| d.active);

        resolve_collisions(state);
        // Entities consumed by the collision pass leave before the tick ends
        state.debris.retain(|d| d.active);

        levels::generate_debris(state, &mut self.rng, self.width, self.height);

        if levels::is_level_complete(state) {
            debug!(
                "level {:?} complete: score {} resources {}",
                state.current_level, state.score, state.total_resources_collected
            );
            state.is_level_complete = true;
            state.current_screen = GameScreen::LevelComplete;
        }

        state.player.update_rotation();
    }

    /// Feed one tick of directional intent. `dx`/`dy` are -1, 0 or 1;
    /// ignored unless the session is actively playing.
    ///
    /// Inverted levels flip the vertical motion axis while the heading keeps
    /// the raw `dy`, so the sprite counter-rotates against the motion. The
    /// two heading formulas are intentionally different code paths.
    pub fn set_player_direction_and_move(&mut self, state: &mut GameState, dx: i32, dy: i32) {
        if state.current_screen != GameScreen::Playing
            || state.is_game_over
            || state.is_level_complete
        {
            return;
        }

        if state.current_level.is_inverted() {
            if dx != 0 || dy != 0 {
                state.player.target_rotation = (dy as f32).atan2((-dx) as f32) - FRAC_PI_2;
            }
            let new_x = state.player.pos.x + dx * state.player.speed;
            let new_y = state.player.pos.y - dy * state.player.speed;

            if new_x >= 0 && new_x <= self.width - state.player.size {
                state.player.pos.x = new_x;
            }
            if new_y >= 0 && new_y <= self.height - state.player.size {
                state.player.pos.y = new_y;
            }
        } else {
            state.player.steer_and_move(dx, dy, self.width, self.height);
        }
    }

    /// Start (or restart) a level attempt: rebuild the player from the
    /// loadout and the level's difficulty, clear the field, zero the
    /// counters and install the level's requirements.
    pub fn reset(&mut self, state: &mut GameState) {
        state.player = Player::new(state.loadout.ship, state.difficulty(), self.width, self.height);
        state.debris.clear();
        state.is_game_over = false;
        state.is_level_complete = false;
        state.elapsed_time = 0.0;
        state.last_static_spawn_time = 0.0;

        levels::set_level_requirements(state);
        self.ensure_player_safe_position(state);

        debug!(
            "reset: level {:?} ({:?}), ship {:?}, health {}",
            state.current_level,
            state.difficulty(),
            state.loadout.ship,
            state.player.health
        );
    }

    /// Relocate the player off any static hazard it spawned on top of.
    /// Bounded; a pathological field leaves the player where it was.
    fn ensure_player_safe_position(&mut self, state: &mut GameState) {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let clear = !state.debris.iter().any(|d| {
                d.is_static
                    && boxes_intersect(d.pos, d.size, state.player.pos, state.player.size)
            });
            if clear {
                return;
            }
            state.player.pos = IVec2::new(
                self.rng.random_range(100..self.width - 100),
                self.rng.random_range(100..self.height - 100),
            );
        }
    }
}

/// Resolve every player/debris overlap this tick.
///
/// Collectibles pay out once and deactivate. A static hazard on a
/// fatal-contact level ends the session outright and stops the pass.
/// An ordinary hazard costs one health and deactivates; the pass keeps
/// going even if that hit emptied the health bar, so later entities this
/// tick may still pay out.
fn resolve_collisions(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_size = state.player.size;

    for i in 0..state.debris.len() {
        let d = state.debris[i];
        if !d.active || !boxes_intersect(player_pos, player_size, d.pos, d.size) {
            continue;
        }

        if d.collectible {
            match d.kind {
                DebrisType::Metal => {
                    state.score += METAL_SCORE;
                    state.resource_score += METAL_SCORE;
                    state.collected_metal += 1;
                    state.total_resources_collected += 1;
                }
                DebrisType::Gold => {
                    state.score += GOLD_SCORE;
                    state.resource_score += GOLD_SCORE;
                    state.collected_gold += 1;
                    state.total_resources_collected += 1;
                }
                DebrisType::Diamond => {
                    state.score += DIAMOND_SCORE;
                    state.resource_score += DIAMOND_SCORE;
                    state.collected_diamond += 1;
                    state.total_resources_collected += 1;
                }
                DebrisType::Energy => state.player.health += 1,
                DebrisType::Fuel => state.time_left += FUEL_TIME_BONUS,
                DebrisType::Standard => {}
            }
            state.debris[i].active = false;
        } else if d.is_static && state.current_level.has_static_hazards() {
            debug!("ship crushed by static hazard at {}", d.pos);
            state.is_game_over = true;
            state.current_screen = GameScreen::GameOverScreen;
            return;
        } else {
            state.player.health -= 1;
            state.debris[i].active = false;
            if state.player.health <= 0 {
                debug!("hull breached at score {}", state.score);
                state.is_game_over = true;
                state.current_screen = GameScreen::GameOverScreen;
            }
        }
    }
}
