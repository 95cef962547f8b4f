//! Per-frame update/draw scheduling
//!
//! The scheduler owns no game state of its own: it holds a handle to the
//! session's world and the renderer, and runs exactly one `advance()` per
//! tick and exactly one `draw()` per render request.

mod pacer;

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::game::{Simulation, Snapshot};

pub use pacer::FramePacer;

/// Rendering collaborator.
pub trait Renderer {
    /// Bind the renderer to the output surface.
    fn setup(&mut self, surface: Rect);

    /// One-time preparation of whatever the renderer draws with.
    fn load_models(&mut self);

    /// Paint `snapshot` into `region` of the frame.
    fn draw(&mut self, frame: &mut Frame, region: Rect, snapshot: &Snapshot);
}

pub struct FrameScheduler<S: Simulation, R: Renderer> {
    world: Rc<RefCell<S>>,
    renderer: R,
    ticks: u64,
}

impl<S: Simulation, R: Renderer> FrameScheduler<S, R> {
    pub fn new(world: Rc<RefCell<S>>, renderer: R) -> Self {
        Self {
            world,
            renderer,
            ticks: 0,
        }
    }

    /// Advance the simulation one step.
    pub fn on_tick(&mut self) {
        self.world.borrow_mut().advance();
        self.ticks += 1;
    }

    /// Paint the current state into `region`.
    pub fn on_render_request(&mut self, frame: &mut Frame, region: Rect) {
        let snapshot = self.world.borrow().snapshot();
        self.renderer.draw(frame, region, &snapshot);
    }

    /// Completed ticks since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
