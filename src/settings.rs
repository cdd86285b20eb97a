//! Ship loadout and cosmetic selections
//!
//! Pure data. The simulation core only reads the ship type (for its speed);
//! colors and backgrounds are carried for the renderer's benefit.

use serde::{Deserialize, Serialize};

/// Hull paint options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayerColor {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
}

impl PlayerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerColor::Blue => "Blue",
            PlayerColor::Red => "Red",
            PlayerColor::Green => "Green",
            PlayerColor::Orange => "Orange",
        }
    }
}

/// Ship hull choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShipType {
    /// Slow and steady
    #[default]
    Cargo,
    /// Lighter hull, roughly 30% faster
    Transport,
}

impl ShipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Cargo => "Cargo",
            ShipType::Transport => "Transport",
        }
    }

    /// Movement speed in playfield units per tick
    pub fn speed(&self) -> i32 {
        match self {
            ShipType::Cargo => 6,
            ShipType::Transport => 8,
        }
    }
}

/// Backdrop selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BackgroundStyle {
    #[default]
    Default,
    DarkSpace,
    MultiSpace,
    PixelSpace,
    Nebula,
}

impl BackgroundStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundStyle::Default => "Default",
            BackgroundStyle::DarkSpace => "Dark Space",
            BackgroundStyle::MultiSpace => "Multi Space",
            BackgroundStyle::PixelSpace => "Pixel Space",
            BackgroundStyle::Nebula => "Nebula",
        }
    }
}

/// The player's cosmetic selections for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Loadout {
    pub color: PlayerColor,
    pub ship: ShipType,
    pub background: BackgroundStyle,
}
