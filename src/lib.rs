//! Drift Salvage - a top-down arcade salvage survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state, tick loop, level rules)
//! - `tuning`: Data-driven per-level balance tables
//! - `settings`: Ship loadout and cosmetic selections
//!
//! Rendering, input capture and window hosting live outside this crate:
//! a host drives the simulation at a fixed cadence, feeds directional
//! intent in, and reads `sim::GameState` snapshots back out.

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Loadout, ShipType};
pub use sim::{GameLevel, GameScreen, GameState, Simulation};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 800;
    pub const PLAYFIELD_HEIGHT: i32 = 600;

    /// Player bounding box side
    pub const PLAYER_SIZE: i32 = 45;
    /// Fraction of the remaining heading error applied per tick
    pub const ROTATION_EASE_RATE: f32 = 0.2;
    /// Remaining heading error below which easing snaps to the target
    pub const ROTATION_SNAP_EPSILON: f32 = 0.01;

    /// Debris spawns this far outside the chosen playfield edge
    pub const SPAWN_MARGIN: i32 = 30;

    /// Score rewards per resource pickup
    pub const METAL_SCORE: u32 = 10;
    pub const GOLD_SCORE: u32 = 15;
    pub const DIAMOND_SCORE: u32 = 20;
    /// Seconds of flight time restored by a fuel pickup
    pub const FUEL_TIME_BONUS: f32 = 20.0;

    /// Static hazard size range (inclusive)
    pub const STATIC_SIZE_MIN: i32 = 45;
    pub const STATIC_SIZE_MAX: i32 = 89;
    /// Square region around the spawn point that static hazards must avoid
    pub const SAFE_ZONE_SIZE: i32 = 200;
    /// Placement attempts per static hazard before it is skipped
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 32;

    /// Survival: elapsed seconds before the darkness phase begins
    pub const DARKNESS_PHASE_START: f32 = 60.0;
    /// Survival: maximum concurrent static hazards
    pub const SURVIVAL_STATIC_CAP: usize = 12;
    /// Survival: minimum seconds between static placements
    pub const SURVIVAL_STATIC_INTERVAL: f32 = 5.0;
    /// Survival: placement attempts per tick before waiting for the next one
    pub const SURVIVAL_STATIC_ATTEMPTS: u32 = 10;
}

/// Shortest signed angular difference from `from` to `to`, wrapped into (-π, π]
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut diff = to - from;
    if diff > PI {
        diff -= TAU;
    }
    if diff < -PI {
        diff += TAU;
    }
    diff
}
