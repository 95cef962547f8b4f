pub mod physics;
pub mod state;

use serde::{Deserialize, Serialize};

pub use physics::{step, PhysicsEvents};
pub use state::{Ball, Table};

/// Which half of the playing surface a paddle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Top,
    Bottom,
}

impl Zone {
    pub fn other(self) -> Zone {
        match self {
            Zone::Top => Zone::Bottom,
            Zone::Bottom => Zone::Top,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Zone::Top => "TOP",
            Zone::Bottom => "BOTTOM",
        }
    }
}

/// Physics/simulation collaborator driven by the control layer.
///
/// The control layer only ever serves, advances, and reads or writes the two
/// paddle positions. Everything else (collisions, scoring, serve legality)
/// belongs to the implementation.
pub trait Simulation {
    /// Request a serve. Implementations ignore the request when a serve is
    /// not currently legal (ball already moving, match over).
    fn launch_ball(&mut self);

    /// Advance the simulation by one step.
    fn advance(&mut self);

    /// Horizontal position of the paddle owned by `zone`.
    fn paddle_x(&self, zone: Zone) -> f32;

    /// Overwrite the horizontal position of the paddle owned by `zone`.
    fn set_paddle_x(&mut self, zone: Zone, x: f32);

    /// Read-only view of the current state for rendering.
    fn snapshot(&self) -> Snapshot;

    /// Restart the match: scores cleared, paddles centred, ball parked.
    fn reset(&mut self);
}

/// Everything the renderer needs to paint one frame, in simulation space
/// (y grows upward).
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub ball_in_play: bool,
    pub top_paddle_x: f32,
    pub top_paddle_y: f32,
    pub bottom_paddle_x: f32,
    pub bottom_paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub top_score: u8,
    pub bottom_score: u8,
    pub rally_hits: u32,
    pub winner: Option<Zone>,
}
