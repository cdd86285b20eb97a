//! Data-driven game balance
//!
//! One `LevelTuning` record per level variant, held in a fixed array indexed
//! by the level's ordinal so every level always has an entry. The generic
//! spawn generator in `sim::levels` consumes these records; no level has
//! bespoke generation code.

use crate::sim::state::{DebrisType, GameLevel, LEVEL_COUNT};

/// How a level is won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinCondition {
    /// Reach a score threshold
    Score(u32),
    /// Collect the required resource counts (a zero count is trivially met)
    Resources { metal: u32, gold: u32, diamond: u32 },
    /// Open-ended; the level never completes
    Endless,
}

/// Cumulative percentage breakpoints for the debris-type roll.
///
/// A roll in `0..100` maps to the first breakpoint it falls under; a roll
/// at or past `fuel` produces a standard hazard. Breakpoints must be
/// non-decreasing.
#[derive(Debug, Clone, Copy)]
pub struct TypeWeights {
    pub metal: u32,
    pub gold: u32,
    pub diamond: u32,
    pub energy: u32,
    pub fuel: u32,
}

impl TypeWeights {
    pub fn pick(&self, roll: u32) -> DebrisType {
        if roll < self.metal {
            DebrisType::Metal
        } else if roll < self.gold {
            DebrisType::Gold
        } else if roll < self.diamond {
            DebrisType::Diamond
        } else if roll < self.energy {
            DebrisType::Energy
        } else if roll < self.fuel {
            DebrisType::Fuel
        } else {
            DebrisType::Standard
        }
    }
}

/// Static-hazard policy for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticHazards {
    None,
    /// Seed `min..=max` hazards once, at the first spawn step of the attempt
    Seeded { min: u32, max: u32 },
    /// Place hazards one at a time after the darkness phase begins (Survival)
    Incremental,
}

/// Everything level-specific the simulation needs
#[derive(Debug, Clone, Copy)]
pub struct LevelTuning {
    /// Starting flight time in seconds; `f32::INFINITY` for endless play
    pub start_time: f32,
    pub win: WinCondition,
    /// Percent chance of a spawn roll succeeding each tick (Survival scales
    /// this with accumulated score)
    pub spawn_chance: u32,
    /// Inward speed range along the spawn edge normal, inclusive
    pub inflow: (i32, i32),
    /// Maximum cross-axis drift speed, symmetric around zero
    pub drift: i32,
    /// Fixed bounding box side for collectibles
    pub collectible_size: i32,
    /// Hazard bounding box side range, inclusive
    pub hazard_size: (i32, i32),
    pub weights: TypeWeights,
    pub statics: StaticHazards,
}

/// Early-campaign roll table: metal 20%, gold 10%, the rest hazardous
const WEIGHTS_BASIC: TypeWeights = TypeWeights {
    metal: 20,
    gold: 30,
    diamond: 30,
    energy: 30,
    fuel: 30,
};

/// Resource-goal levels skew toward the goal materials
const WEIGHTS_RESOURCE: TypeWeights = TypeWeights {
    metal: 30,
    gold: 45,
    diamond: 45,
    energy: 45,
    fuel: 45,
};

/// Diamonds appear from RichHunt on
const WEIGHTS_RICH: TypeWeights = TypeWeights {
    metal: 20,
    gold: 30,
    diamond: 36,
    energy: 36,
    fuel: 36,
};

/// Late campaign adds energy and fuel drops
const WEIGHTS_LATE: TypeWeights = TypeWeights {
    metal: 20,
    gold: 30,
    diamond: 36,
    energy: 38,
    fuel: 41,
};

/// Survival is resource-dense; hazards fill the remaining 20%
const WEIGHTS_SURVIVAL: TypeWeights = TypeWeights {
    metal: 50,
    gold: 66,
    diamond: 74,
    energy: 77,
    fuel: 80,
};

static LEVELS: [LevelTuning; LEVEL_COUNT] = [
    // Tutorial: slow field, generous timer
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Score(100),
        spawn_chance: 12,
        inflow: (1, 3),
        drift: 2,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_BASIC,
        statics: StaticHazards::None,
    },
    // ResourceHunt: denser field, shorter clock
    LevelTuning {
        start_time: 60.0,
        win: WinCondition::Score(100),
        spawn_chance: 20,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_BASIC,
        statics: StaticHazards::None,
    },
    // ResourceGoal1: first quota level
    LevelTuning {
        start_time: 60.0,
        win: WinCondition::Resources {
            metal: 5,
            gold: 3,
            diamond: 0,
        },
        spawn_chance: 16,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_RESOURCE,
        statics: StaticHazards::None,
    },
    // InvertedControls
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Score(100),
        spawn_chance: 14,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_BASIC,
        statics: StaticHazards::None,
    },
    // StaticHazards: first fatal-contact field
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Score(150),
        spawn_chance: 14,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_BASIC,
        statics: StaticHazards::Seeded { min: 12, max: 15 },
    },
    // ResourceGoal2: quota level threaded through statics
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Resources {
            metal: 8,
            gold: 5,
            diamond: 0,
        },
        spawn_chance: 16,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_RESOURCE,
        statics: StaticHazards::Seeded { min: 12, max: 15 },
    },
    // RichHunt: diamonds unlock, field speeds up
    LevelTuning {
        start_time: 60.0,
        win: WinCondition::Score(150),
        spawn_chance: 18,
        inflow: (2, 5),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_RICH,
        statics: StaticHazards::None,
    },
    // DarkZone: limited visibility, energy/fuel drops start
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Score(150),
        spawn_chance: 14,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_LATE,
        statics: StaticHazards::None,
    },
    // StaticInverted
    LevelTuning {
        start_time: 120.0,
        win: WinCondition::Score(150),
        spawn_chance: 14,
        inflow: (2, 5),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_LATE,
        statics: StaticHazards::Seeded { min: 12, max: 15 },
    },
    // DarkStatic
    LevelTuning {
        start_time: 90.0,
        win: WinCondition::Score(200),
        spawn_chance: 12,
        inflow: (1, 4),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_LATE,
        statics: StaticHazards::Seeded { min: 12, max: 15 },
    },
    // DarkInverted
    LevelTuning {
        start_time: 120.0,
        win: WinCondition::Score(150),
        spawn_chance: 12,
        inflow: (2, 5),
        drift: 3,
        collectible_size: 40,
        hazard_size: (20, 79),
        weights: WEIGHTS_LATE,
        statics: StaticHazards::Seeded { min: 12, max: 15 },
    },
    // Survival: endless, ramping, darkness closes in
    LevelTuning {
        start_time: f32::INFINITY,
        win: WinCondition::Endless,
        spawn_chance: 8,
        inflow: (2, 5),
        drift: 4,
        collectible_size: 30,
        hazard_size: (30, 69),
        weights: WEIGHTS_SURVIVAL,
        statics: StaticHazards::Incremental,
    },
];

impl GameLevel {
    /// Balance record for this level
    #[inline]
    pub fn tuning(self) -> &'static LevelTuning {
        &LEVELS[self.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_sane_tuning() {
        for level in GameLevel::ALL {
            let t = level.tuning();
            assert!(t.spawn_chance >= 8 && t.spawn_chance <= 20, "{level:?}");
            assert!(t.inflow.0 >= 1 && t.inflow.0 <= t.inflow.1, "{level:?}");
            assert!(t.drift >= 0, "{level:?}");
            assert!(t.collectible_size > 0, "{level:?}");
            assert!(t.hazard_size.0 <= t.hazard_size.1, "{level:?}");
            assert!(t.start_time > 0.0, "{level:?}");
        }
    }

    #[test]
    fn test_weights_are_monotonic() {
        for level in GameLevel::ALL {
            let w = level.tuning().weights;
            assert!(w.metal <= w.gold, "{level:?}");
            assert!(w.gold <= w.diamond, "{level:?}");
            assert!(w.diamond <= w.energy, "{level:?}");
            assert!(w.energy <= w.fuel, "{level:?}");
            assert!(w.fuel <= 100, "{level:?}");
        }
    }

    #[test]
    fn test_weights_pick_breakpoints() {
        let w = WEIGHTS_SURVIVAL;
        assert_eq!(w.pick(0), DebrisType::Metal);
        assert_eq!(w.pick(49), DebrisType::Metal);
        assert_eq!(w.pick(50), DebrisType::Gold);
        assert_eq!(w.pick(65), DebrisType::Gold);
        assert_eq!(w.pick(66), DebrisType::Diamond);
        assert_eq!(w.pick(74), DebrisType::Energy);
        assert_eq!(w.pick(77), DebrisType::Fuel);
        assert_eq!(w.pick(80), DebrisType::Standard);
        assert_eq!(w.pick(99), DebrisType::Standard);
    }

    #[test]
    fn test_win_conditions_are_exclusive_per_level() {
        for level in GameLevel::ALL {
            match level.tuning().win {
                WinCondition::Score(threshold) => {
                    assert!((100..=1500).contains(&threshold), "{level:?}")
                }
                WinCondition::Resources { metal, gold, .. } => {
                    // Quota levels must actually require something
                    assert!(metal + gold > 0, "{level:?}");
                }
                WinCondition::Endless => assert_eq!(level, GameLevel::Survival),
            }
        }
    }

    #[test]
    fn test_diamonds_locked_until_rich_hunt() {
        for level in GameLevel::ALL {
            let w = level.tuning().weights;
            let has_diamonds = w.diamond > w.gold;
            if (level as usize) < (GameLevel::RichHunt as usize) {
                assert!(!has_diamonds, "{level:?}");
            }
        }
        assert!(GameLevel::RichHunt.tuning().weights.diamond > GameLevel::RichHunt.tuning().weights.gold);
    }

    #[test]
    fn test_only_survival_is_endless_or_incremental() {
        for level in GameLevel::ALL {
            let t = level.tuning();
            if level != GameLevel::Survival {
                assert!(t.start_time.is_finite(), "{level:?}");
                assert_ne!(t.win, WinCondition::Endless, "{level:?}");
                assert_ne!(t.statics, StaticHazards::Incremental, "{level:?}");
            }
        }
        let survival = GameLevel::Survival.tuning();
        assert!(survival.start_time.is_infinite());
        assert_eq!(survival.statics, StaticHazards::Incremental);
    }

    #[test]
    fn test_fatal_static_levels_seed_statics() {
        for level in GameLevel::ALL {
            let seeds = level.tuning().statics != StaticHazards::None;
            assert_eq!(seeds, level.has_static_hazards(), "{level:?}");
        }
    }
}
