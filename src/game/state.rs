use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{physics, Simulation, Snapshot, Zone};
use crate::config::PhysicsConfig;

// Simulation space: 800×600 units, y grows upward
pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;
pub const PADDLE_WIDTH: f32 = 150.0;
pub const PADDLE_HEIGHT: f32 = 10.0;
pub const BALL_RADIUS: f32 = 10.0;
pub const TOP_PADDLE_Y: f32 = 500.0;
pub const BOTTOM_PADDLE_Y: f32 = 100.0;
pub const PADDLE_START_X: f32 = 400.0;

// Serves leave up to 30 degrees off vertical
const MAX_SERVE_JITTER: f32 = PI / 6.0;

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn at_rest(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }

    /// Park the ball in the centre of the field
    pub fn park(&mut self) {
        self.x = FIELD_WIDTH / 2.0;
        self.y = FIELD_HEIGHT / 2.0;
        self.vx = 0.0;
        self.vy = 0.0;
    }
}

/// Reference physics world: one ball, two horizontal paddles.
///
/// `paddle1_pos_x` belongs to the TOP player and `paddle2_pos_x` to the
/// BOTTOM player; these two fields are the only state the control layer
/// writes.
#[derive(Debug, Clone)]
pub struct Table {
    pub ball: Ball,
    pub paddle1_pos_x: f32,
    pub paddle2_pos_x: f32,
    pub top_score: u8,
    pub bottom_score: u8,
    pub winner: Option<Zone>,
    pub rally_hits: u32,
    pub next_receiver: Zone,
    pub ball_speed: f32,
    pub speed_multiplier: f32,
    pub winning_score: u8,
    pub timestep: f32,
    rng: StdRng,
}

impl Table {
    pub fn new(physics: &PhysicsConfig, target_fps: u64) -> Self {
        Self::with_rng(physics, target_fps, StdRng::from_entropy())
    }

    /// Deterministic serve angles, for replays and tests
    pub fn with_seed(physics: &PhysicsConfig, target_fps: u64, seed: u64) -> Self {
        Self::with_rng(physics, target_fps, StdRng::seed_from_u64(seed))
    }

    fn with_rng(physics: &PhysicsConfig, target_fps: u64, rng: StdRng) -> Self {
        Self {
            ball: Ball::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            paddle1_pos_x: PADDLE_START_X,
            paddle2_pos_x: PADDLE_START_X,
            top_score: 0,
            bottom_score: 0,
            winner: None,
            rally_hits: 0,
            next_receiver: Zone::Bottom,
            ball_speed: physics.ball_speed,
            speed_multiplier: physics.speed_multiplier,
            winning_score: physics.winning_score,
            timestep: 1.0 / target_fps.max(1) as f32,
            rng,
        }
    }

    pub fn paddle_y(zone: Zone) -> f32 {
        match zone {
            Zone::Top => TOP_PADDLE_Y,
            Zone::Bottom => BOTTOM_PADDLE_Y,
        }
    }

    /// Credit a point to `scorer` and park the ball for the next serve
    pub fn award_point(&mut self, scorer: Zone) {
        let score = match scorer {
            Zone::Top => &mut self.top_score,
            Zone::Bottom => &mut self.bottom_score,
        };
        *score = score.saturating_add(1);
        let total = *score;

        debug!(
            scorer = scorer.display_name(),
            top = self.top_score,
            bottom = self.bottom_score,
            rally = self.rally_hits,
            "point scored"
        );

        self.rally_hits = 0;
        self.next_receiver = scorer.other();
        self.ball.park();

        if total >= self.winning_score {
            self.winner = Some(scorer);
            debug!(winner = scorer.display_name(), "match over");
        }
    }
}

impl Simulation for Table {
    fn launch_ball(&mut self) {
        if self.winner.is_some() || !self.ball.at_rest() {
            debug!("serve ignored, ball already in play or match over");
            return;
        }

        let jitter = self.rng.gen_range(-MAX_SERVE_JITTER..=MAX_SERVE_JITTER);
        let toward = match self.next_receiver {
            Zone::Top => 1.0,
            Zone::Bottom => -1.0,
        };
        self.ball.vx = jitter.sin() * self.ball_speed;
        self.ball.vy = toward * jitter.cos() * self.ball_speed;

        debug!(
            receiver = self.next_receiver.display_name(),
            vx = self.ball.vx,
            vy = self.ball.vy,
            "ball served"
        );
    }

    fn advance(&mut self) {
        let dt = self.timestep;
        let events = physics::step(self, dt);
        if events.any() {
            trace!(?events, "physics step");
        }
    }

    fn paddle_x(&self, zone: Zone) -> f32 {
        match zone {
            Zone::Top => self.paddle1_pos_x,
            Zone::Bottom => self.paddle2_pos_x,
        }
    }

    fn set_paddle_x(&mut self, zone: Zone, x: f32) {
        match zone {
            Zone::Top => self.paddle1_pos_x = x,
            Zone::Bottom => self.paddle2_pos_x = x,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_x: self.ball.x,
            ball_y: self.ball.y,
            ball_radius: BALL_RADIUS,
            ball_in_play: !self.ball.at_rest(),
            top_paddle_x: self.paddle1_pos_x,
            top_paddle_y: TOP_PADDLE_Y,
            bottom_paddle_x: self.paddle2_pos_x,
            bottom_paddle_y: BOTTOM_PADDLE_Y,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            top_score: self.top_score,
            bottom_score: self.bottom_score,
            rally_hits: self.rally_hits,
            winner: self.winner,
        }
    }

    fn reset(&mut self) {
        self.top_score = 0;
        self.bottom_score = 0;
        self.winner = None;
        self.rally_hits = 0;
        self.next_receiver = Zone::Bottom;
        self.paddle1_pos_x = PADDLE_START_X;
        self.paddle2_pos_x = PADDLE_START_X;
        self.ball.park();
        debug!("table reset");
    }
}
