//! One game session: the world, the controls wired to it, and the loop that
//! drives them once per frame.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::Config;
use crate::control::{
    DeltaMode, GesturePhase, GestureSource, HostEvent, InputTranslator, PaddleController, Point,
};
use crate::frame::{FramePacer, FrameScheduler, Renderer};
use crate::game::Simulation;

/// Whether the loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: Simulation, R: Renderer> {
    world: Rc<RefCell<S>>,
    translator: InputTranslator<S>,
    scheduler: FrameScheduler<S, R>,
    pacer: FramePacer,
}

impl<S: Simulation, R: Renderer> Session<S, R> {
    /// Wire controls and scheduling to `world`. The session keeps the only
    /// long-lived handles; they are dropped with it.
    pub fn new(world: S, renderer: R, config: &Config) -> Self {
        let world = Rc::new(RefCell::new(world));
        let paddles = PaddleController::new(Rc::clone(&world), config.controls.sensitivity());
        let translator = InputTranslator::new(
            paddles,
            config.controls.control_scheme(),
            config.controls.delta_mode,
        );
        let scheduler = FrameScheduler::new(Rc::clone(&world), renderer);

        Self {
            world,
            translator,
            scheduler,
            pacer: FramePacer::new(config.display.target_fps),
        }
    }

    pub fn world(&self) -> &Rc<RefCell<S>> {
        &self.world
    }

    pub fn scheduler(&self) -> &FrameScheduler<S, R> {
        &self.scheduler
    }

    /// Route one batch of host events, as returned by a single `poll()`.
    ///
    /// In incremental mode every CHANGED sample of a batch was measured
    /// against the same baseline, so each one is reduced by the translation
    /// already consumed earlier in the batch. The source's baseline is then
    /// reset once, after the batch.
    pub fn dispatch_batch<G: GestureSource>(
        &mut self,
        events: Vec<HostEvent>,
        source: &mut G,
    ) -> Flow {
        let mut consumed = Point::default();
        let mut moved = false;
        let mut flow = Flow::Continue;

        for event in events {
            match event {
                HostEvent::Tap => {
                    self.translator.on_tap();
                }
                HostEvent::Drag(mut sample) => {
                    if self.translator.delta_mode() == DeltaMode::Incremental {
                        match sample.phase {
                            GesturePhase::Changed => {
                                let raw = sample.translation_since_start;
                                sample.translation_since_start =
                                    Point::new(raw.x - consumed.x, raw.y - consumed.y);
                                consumed = raw;
                                moved = true;
                            }
                            GesturePhase::Began | GesturePhase::Ended => {
                                consumed = Point::default();
                            }
                        }
                    }
                    self.translator.on_drag(sample);
                }
                HostEvent::Restart => {
                    info!("restart requested");
                    self.world.borrow_mut().reset();
                }
                HostEvent::Quit => {
                    flow = Flow::Quit;
                    break;
                }
            }
        }

        if moved {
            source.reset_translation();
        }
        flow
    }

    /// Drain input, then tick. Gesture mutations always land before the
    /// tick of the same frame.
    pub fn update<G: GestureSource>(&mut self, source: &mut G) -> Result<Flow> {
        let events = source.poll().context("failed to read input events")?;
        if self.dispatch_batch(events, source) == Flow::Quit {
            return Ok(Flow::Quit);
        }

        self.scheduler.on_tick();
        Ok(Flow::Continue)
    }

    /// Run until the player quits.
    pub fn run<B: Backend, G: GestureSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        source: &mut G,
    ) -> Result<()> {
        let area = terminal.size().context("failed to query terminal size")?;
        let surface = Rect::new(0, 0, area.width, area.height);
        self.scheduler.renderer_mut().setup(surface);
        self.scheduler.renderer_mut().load_models();
        info!(
            scheme = ?self.translator.scheme(),
            delta_mode = ?self.translator.delta_mode(),
            "session started"
        );

        loop {
            self.pacer.begin();

            let area = terminal.size().context("failed to query terminal size")?;
            source.set_field(Rect::new(0, 0, area.width, area.height));

            if self.update(source)? == Flow::Quit {
                break;
            }

            terminal
                .draw(|f| {
                    let region = f.area();
                    self.scheduler.on_render_request(f, region)
                })
                .context("failed to draw frame")?;

            self.pacer.finish();
        }

        debug!(ticks = self.scheduler.ticks(), "session ended");
        Ok(())
    }
}
