// Host-neutral gesture types and the source trait the session drains each frame

use std::io;

use ratatui::layout::Rect;

use crate::game::Zone;

// Touch surface: 800×850 units, y grows downward
pub const SURFACE_WIDTH: f32 = 800.0;
pub const SURFACE_HEIGHT: f32 = 850.0;

/// Horizontal split of the touch surface. Samples below it (y > 425) steer
/// the bottom paddle, samples on or above it steer the top paddle.
pub const ZONE_BOUNDARY_Y: f32 = 425.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zone of the touch surface this point falls in
    pub fn zone(&self) -> Zone {
        if self.y > ZONE_BOUNDARY_Y {
            Zone::Bottom
        } else {
            Zone::Top
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
}

/// One step of a continuous drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Where the pointer is now, in surface space
    pub current_point: Point,
    /// Displacement since the drag began or since the source last reset its
    /// translation baseline
    pub translation_since_start: Point,
}

impl GestureSample {
    pub fn began(at: Point) -> Self {
        Self {
            phase: GesturePhase::Began,
            current_point: at,
            translation_since_start: Point::default(),
        }
    }

    pub fn changed(at: Point, translation: Point) -> Self {
        Self {
            phase: GesturePhase::Changed,
            current_point: at,
            translation_since_start: translation,
        }
    }

    pub fn ended(at: Point, translation: Point) -> Self {
        Self {
            phase: GesturePhase::Ended,
            current_point: at,
            translation_since_start: translation,
        }
    }
}

/// Everything the host can deliver to a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Tap,
    Drag(GestureSample),
    Restart,
    Quit,
}

/// Host-provided producer of taps and drags.
pub trait GestureSource {
    /// Drain the events that arrived since the last poll, without blocking.
    fn poll(&mut self) -> io::Result<Vec<HostEvent>>;

    /// Move the translation baseline of the active drag to its latest point,
    /// so the next sample reports only the movement since this call.
    fn reset_translation(&mut self);

    /// Host region whose coordinates map onto the touch surface. Sources
    /// that already report surface coordinates ignore it.
    fn set_field(&mut self, _field: Rect) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_split_at_boundary() {
        assert_eq!(Point::new(0.0, 430.0).zone(), Zone::Bottom);
        assert_eq!(Point::new(0.0, 420.0).zone(), Zone::Top);
        // The boundary line itself belongs to the top player
        assert_eq!(Point::new(0.0, ZONE_BOUNDARY_Y).zone(), Zone::Top);
    }
}
