// Input translator: taps become serves, drags become paddle deltas

use tracing::{debug, trace};

use super::gesture::{GesturePhase, GestureSample, Point};
use super::paddle::PaddleController;
use super::{ControlScheme, DeltaMode};
use crate::game::{Simulation, Zone};

/// What a gesture turned into
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    LaunchBall,
    MovePaddle { zone: Zone, to: f32 },
}

pub struct InputTranslator<S: Simulation> {
    paddles: PaddleController<S>,
    scheme: ControlScheme,
    delta_mode: DeltaMode,
    drag_start: Option<Point>,
}

impl<S: Simulation> InputTranslator<S> {
    pub fn new(paddles: PaddleController<S>, scheme: ControlScheme, delta_mode: DeltaMode) -> Self {
        Self {
            paddles,
            scheme,
            delta_mode,
            drag_start: None,
        }
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    pub fn delta_mode(&self) -> DeltaMode {
        self.delta_mode
    }

    /// Origin of the active drag, if one is in progress
    pub fn drag_start(&self) -> Option<Point> {
        self.drag_start
    }

    /// Every tap is one serve request; the world decides if it is legal.
    pub fn on_tap(&mut self) -> Command {
        debug!("tap, requesting serve");
        self.paddles.world().borrow_mut().launch_ball();
        Command::LaunchBall
    }

    pub fn on_drag(&mut self, sample: GestureSample) -> Option<Command> {
        match sample.phase {
            GesturePhase::Began => {
                self.drag_start = Some(sample.current_point);
                None
            }
            GesturePhase::Changed => self.on_drag_changed(sample),
            GesturePhase::Ended => {
                self.drag_start = None;
                None
            }
        }
    }

    fn on_drag_changed(&mut self, sample: GestureSample) -> Option<Command> {
        let Some(start) = self.drag_start else {
            trace!("drag update without a start, ignored");
            return None;
        };

        let touch_distance = match self.delta_mode {
            DeltaMode::Absolute => sample.current_point.x - start.x,
            DeltaMode::Incremental => sample.translation_since_start.x,
        };
        if !touch_distance.is_finite() {
            debug!("non-finite drag distance, ignored");
            return None;
        }

        let zone = self.route(sample.current_point)?;
        let to = self.paddles.apply_delta(zone, touch_distance);
        Some(Command::MovePaddle { zone, to })
    }

    fn route(&self, point: Point) -> Option<Zone> {
        let zone = point.zone();
        match self.scheme {
            ControlScheme::Classic(paddle) if paddle == zone => Some(paddle),
            ControlScheme::Classic(_) => None,
            ControlScheme::Extended => Some(zone),
        }
    }
}
