//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the `Simulation`
//! - No rendering or platform dependencies
//!
//! Hosts construct a [`Simulation`] with the playfield dimensions and a
//! seed, own a [`GameState`], and drive both at 60 Hz.

pub mod levels;
pub mod player;
pub mod state;
pub mod tick;

pub use state::{
    boxes_intersect, Debris, DebrisType, Difficulty, GameLevel, GameScreen, GameState, Player,
    LEVEL_COUNT,
};
pub use tick::Simulation;
