//! Session state and core simulation types
//!
//! One `GameState` value holds everything a play session is: the player,
//! the debris field, counters, timers and the active screen. The host owns
//! it, the simulation mutates it, the renderer reads it.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Loadout, ShipType};

/// Number of level variants; sized arrays indexed by `GameLevel::ordinal`
pub const LEVEL_COUNT: usize = 12;

/// Which screen the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameScreen {
    Menu,
    Playing,
    Pause,
    Customization,
    LevelSelection,
    LevelComplete,
    GameOverScreen,
}

/// The twelve level variants, in campaign order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLevel {
    Tutorial = 1,
    ResourceHunt = 2,
    ResourceGoal1 = 3,
    InvertedControls = 4,
    StaticHazards = 5,
    ResourceGoal2 = 6,
    RichHunt = 7,
    DarkZone = 8,
    StaticInverted = 9,
    DarkStatic = 10,
    DarkInverted = 11,
    Survival = 12,
}

impl GameLevel {
    /// All levels in campaign order
    pub const ALL: [GameLevel; LEVEL_COUNT] = [
        GameLevel::Tutorial,
        GameLevel::ResourceHunt,
        GameLevel::ResourceGoal1,
        GameLevel::InvertedControls,
        GameLevel::StaticHazards,
        GameLevel::ResourceGoal2,
        GameLevel::RichHunt,
        GameLevel::DarkZone,
        GameLevel::StaticInverted,
        GameLevel::DarkStatic,
        GameLevel::DarkInverted,
        GameLevel::Survival,
    ];

    /// Zero-based index for table lookups
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize - 1
    }

    /// Vertical controls (and the sprite heading) use a flipped sign convention
    pub fn is_inverted(self) -> bool {
        matches!(
            self,
            GameLevel::InvertedControls | GameLevel::StaticInverted | GameLevel::DarkInverted
        )
    }

    /// Static hazards are seeded here, and contact with one is fatal
    pub fn has_static_hazards(self) -> bool {
        matches!(
            self,
            GameLevel::StaticHazards
                | GameLevel::ResourceGoal2
                | GameLevel::StaticInverted
                | GameLevel::DarkStatic
                | GameLevel::DarkInverted
                | GameLevel::Survival
        )
    }

    /// Visibility is limited to a cone around the ship (a rendering concern;
    /// Survival enters darkness later, once its phase threshold passes)
    pub fn is_dark(self) -> bool {
        matches!(
            self,
            GameLevel::DarkZone | GameLevel::DarkStatic | GameLevel::DarkInverted
        )
    }
}

/// Per-level challenge setting; selects the starting health budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn starting_health(&self) -> i32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 2,
            Difficulty::Extreme => 1,
        }
    }
}

/// What a piece of debris is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DebrisType {
    /// Hazardous rock
    #[default]
    Standard,
    Metal,
    Gold,
    Diamond,
    /// +1 health on pickup
    Energy,
    /// +20 s flight time on pickup
    Fuel,
}

/// A falling (or static) entity in the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debris {
    pub pos: IVec2,
    /// Playfield units per tick; zero for static hazards
    pub vel: IVec2,
    /// Square bounding box side
    pub size: i32,
    pub collectible: bool,
    pub active: bool,
    pub is_static: bool,
    pub kind: DebrisType,
}

impl Default for Debris {
    fn default() -> Self {
        Self {
            pos: IVec2::ZERO,
            vel: IVec2::ZERO,
            size: 30,
            collectible: true,
            active: true,
            is_static: false,
            kind: DebrisType::Standard,
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    /// Playfield units per tick
    pub speed: i32,
    pub health: i32,
    /// Square bounding box side
    pub size: i32,
    /// Smoothed heading, radians
    pub current_rotation: f32,
    /// Heading the ship eases toward, radians
    pub target_rotation: f32,
    /// Easing rate per tick
    pub rotation_rate: f32,
}

impl Player {
    /// Fresh craft centered in the playfield, stats from loadout/difficulty
    pub fn new(ship: ShipType, difficulty: Difficulty, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(width / 2 - PLAYER_SIZE / 2, height / 2 - PLAYER_SIZE / 2),
            speed: ship.speed(),
            health: difficulty.starting_health(),
            size: PLAYER_SIZE,
            current_rotation: 0.0,
            target_rotation: 0.0,
            rotation_rate: ROTATION_EASE_RATE,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub debris: Vec<Debris>,

    pub score: u32,
    pub collected_metal: u32,
    pub collected_gold: u32,
    pub collected_diamond: u32,
    /// Score points earned from resource pickups alone
    pub resource_score: u32,
    /// Count of resource pickups (metal + gold + diamond)
    pub total_resources_collected: u32,

    /// Resource-goal win condition, installed per level
    pub required_metal: u32,
    pub required_gold: u32,
    pub required_diamond: u32,
    pub uses_resource_goals: bool,

    pub current_level: GameLevel,
    /// Seconds of flight time left; infinite in Survival
    pub time_left: f32,
    /// Seconds spent in this level attempt
    pub elapsed_time: f32,
    /// `elapsed_time` of the most recent Survival static placement
    pub last_static_spawn_time: f32,

    pub is_game_over: bool,
    pub is_level_complete: bool,
    pub current_screen: GameScreen,

    /// Difficulty per level, independently settable
    pub level_difficulty: [Difficulty; LEVEL_COUNT],
    pub loadout: Loadout,
}

impl GameState {
    pub fn new(width: i32, height: i32) -> Self {
        let loadout = Loadout::default();
        Self {
            player: Player::new(loadout.ship, Difficulty::Normal, width, height),
            debris: Vec::new(),
            score: 0,
            collected_metal: 0,
            collected_gold: 0,
            collected_diamond: 0,
            resource_score: 0,
            total_resources_collected: 0,
            required_metal: 0,
            required_gold: 0,
            required_diamond: 0,
            uses_resource_goals: false,
            current_level: GameLevel::Tutorial,
            time_left: 90.0,
            elapsed_time: 0.0,
            last_static_spawn_time: 0.0,
            is_game_over: false,
            is_level_complete: false,
            current_screen: GameScreen::Menu,
            level_difficulty: [Difficulty::Normal; LEVEL_COUNT],
            loadout,
        }
    }

    /// Difficulty selected for the level currently being played
    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.level_difficulty[self.current_level.ordinal()]
    }

    pub fn set_level_difficulty(&mut self, level: GameLevel, difficulty: Difficulty) {
        self.level_difficulty[level.ordinal()] = difficulty;
    }

    /// Active static hazards currently in the field
    pub fn static_hazard_count(&self) -> usize {
        self.debris.iter().filter(|d| d.is_static && d.active).count()
    }

    /// Whether the darkness phase is on. Dark levels start in it; Survival
    /// enters it once enough time has passed. Rendering draws the fog, but
    /// the simulation tracks the threshold because Survival's static
    /// hazards only start appearing then.
    pub fn darkness_active(&self) -> bool {
        self.current_level.is_dark()
            || (self.current_level == GameLevel::Survival
                && self.elapsed_time >= DARKNESS_PHASE_START)
    }
}

/// Axis-aligned square overlap test. Touching edges do not count.
#[inline]
pub fn boxes_intersect(a: IVec2, a_size: i32, b: IVec2, b_size: i32) -> bool {
    a.x < b.x + b_size && b.x < a.x + a_size && a.y < b.y + b_size && b.y < a.y + a_size
}
