//! Demo configuration
//!
//! Everything the headless run needs: the level, player tuning, item
//! placements and a scripted input sequence. Loaded from RON or TOML.

use facet_collision::config::Config;
use facet_collision::level::LevelConfig;
use serde::{Deserialize, Serialize};

/// Top-level demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Bottom edge of the view; nothing falls below it
    pub view_floor: f32,

    /// Player movement tuning
    pub player: PlayerConfig,

    /// Collectables placed in the level
    pub items: Vec<ItemConfig>,

    /// Input played back one segment after another
    pub script: Vec<InputSegment>,

    /// Tile level
    pub level: LevelConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            view_floor: 400.0,
            player: PlayerConfig::default(),
            items: vec![
                ItemConfig {
                    name: "Gem".to_string(),
                    description: "Shiny and worthless".to_string(),
                    position: [264.0, 296.0],
                },
                ItemConfig {
                    name: "Key".to_string(),
                    description: "Opens nothing yet".to_string(),
                    position: [136.0, 232.0],
                },
            ],
            script: vec![
                InputSegment { ticks: 90, ..InputSegment::default() },
                InputSegment { ticks: 60, left: true, ..InputSegment::default() },
                InputSegment { ticks: 40, left: true, jump: true, ..InputSegment::default() },
                InputSegment { ticks: 60, ..InputSegment::default() },
                InputSegment { ticks: 80, right: true, ..InputSegment::default() },
            ],
            level: LevelConfig::default(),
        }
    }
}

impl Config for DemoConfig {}

/// Player movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting position (centre of the body)
    pub spawn: [f32; 2],
    /// Body width
    pub width: f32,
    /// Body height
    pub height: f32,
    /// Added to vertical speed each tick while airborne
    pub gravity: f32,
    /// Horizontal speed gained per tick of held input
    pub acceleration: f32,
    /// Horizontal speed multiplier applied every tick
    pub friction: f32,
    /// Horizontal speed limit
    pub max_x_speed: f32,
    /// Vertical speed limit
    pub max_y_speed: f32,
    /// Vertical speed set on jump (negative is up)
    pub jump_speed: f32,
    /// Speeds smaller than this snap to zero
    pub stop_threshold: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: [320.0, 0.0],
            width: 16.0,
            height: 16.0,
            gravity: 0.1,
            acceleration: 0.25,
            friction: 0.8,
            max_x_speed: 8.0,
            max_y_speed: 6.0,
            jump_speed: -4.0,
            stop_threshold: 0.1,
        }
    }
}

impl PlayerConfig {
    /// Collision sphere radius, slightly inside the body so it fits one-tile gaps
    pub fn radius(&self) -> f32 {
        self.width / 2.0 - 0.5
    }
}

/// A collectable
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    /// Display name
    pub name: String,
    /// Flavour text logged on pickup
    pub description: String,
    /// Centre position
    pub position: [f32; 2],
}

/// Held input for a number of ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSegment {
    /// How long the segment lasts
    pub ticks: u32,
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Jump pressed on the first tick of the segment
    pub jump: bool,
}
