// Control layer: gestures in, paddle positions and serves out

pub mod gesture;
pub mod paddle;
pub mod terminal;
pub mod translator;

use serde::{Deserialize, Serialize};

use crate::game::Zone;

pub use gesture::{GesturePhase, GestureSample, GestureSource, HostEvent, Point, ZONE_BOUNDARY_Y};
pub use paddle::{PaddleController, MAX_X, MIN_X};
pub use terminal::TerminalGestures;
pub use translator::{Command, InputTranslator};

/// How a drag sample is turned into a horizontal distance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    /// Distance from the drag origin, re-measured on every sample
    Absolute,
    /// The sample's translation, with the source resetting its baseline
    /// after each delivered sample
    Incremental,
}

/// Which paddles a drag may steer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlScheme {
    /// One player: only this paddle moves, and only from its own zone
    Classic(Zone),
    /// Two players: each zone steers its own paddle
    Extended,
}
