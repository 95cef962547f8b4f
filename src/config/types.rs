// Touchpong configuration types
// All settings default to the tuning the game ships with

use serde::{Deserialize, Serialize};

use crate::control::{ControlScheme, DeltaMode};
use crate::game::Zone;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsConfig {
    // "classic" drives one paddle, "extended" drives both by zone
    pub scheme: SchemeKind,

    // Paddle driven in classic mode: "top" or "bottom"
    pub classic_paddle: Zone,

    // "absolute" measures from the drag origin, "incremental" per frame
    pub delta_mode: DeltaMode,

    // Multiplier applied to the drag distance in absolute mode
    pub absolute_sensitivity: f32,

    // Multiplier applied to the drag distance in incremental mode
    pub incremental_sensitivity: f32,
}

impl ControlsConfig {
    /// Resolve the scheme into the routing strategy used by the translator.
    pub fn control_scheme(&self) -> ControlScheme {
        match self.scheme {
            SchemeKind::Classic => ControlScheme::Classic(self.classic_paddle),
            SchemeKind::Extended => ControlScheme::Extended,
        }
    }

    /// Sensitivity paired with the configured delta mode.
    pub fn sensitivity(&self) -> f32 {
        match self.delta_mode {
            DeltaMode::Absolute => self.absolute_sensitivity,
            DeltaMode::Incremental => self.incremental_sensitivity,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::Classic,
            classic_paddle: Zone::Bottom,
            delta_mode: DeltaMode::Absolute,
            absolute_sensitivity: 0.1,
            incremental_sensitivity: 1.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    Classic,
    Extended,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Serve speed in simulation units per second
    pub ball_speed: f32,

    // Ball speed multiplier on each paddle hit (1.05 = 5% faster)
    pub speed_multiplier: f32,

    // Score required to win
    pub winning_score: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ball_speed: 360.0,
            speed_multiplier: 1.05,
            winning_score: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second (also the simulation tick rate)
    pub target_fps: u64,

    // Paddle color (RGB values 0-255)
    pub paddle_color: [u8; 3],

    // Ball color
    pub ball_color: [u8; 3],

    // Show the serve/quit hint line under the scores
    pub show_hint: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            paddle_color: [255, 255, 255],
            ball_color: [255, 200, 0],
            show_hint: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub serve: String,
    pub restart: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            serve: "Space".to_string(),
            restart: "R".to_string(),
            quit: "Q".to_string(),
        }
    }
}
