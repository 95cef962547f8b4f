use super::state::{
    Ball, Table, BALL_RADIUS, BOTTOM_PADDLE_Y, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT,
    PADDLE_WIDTH, TOP_PADDLE_Y,
};
use super::Zone;

// Off-centre hits steer the ball up to 60 degrees off vertical
const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 3.0;

/// What happened during one physics step
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhysicsEvents {
    pub paddle_hit: Option<Zone>,
    pub wall_hit: bool,
    pub scored: Option<Zone>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.paddle_hit.is_some() || self.wall_hit || self.scored.is_some()
    }
}

/// Advance the table by `dt` seconds.
///
/// A parked ball or a finished match does not move.
pub fn step(table: &mut Table, dt: f32) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    if table.winner.is_some() || table.ball.at_rest() {
        return events;
    }

    table.ball.x += table.ball.vx * dt;
    table.ball.y += table.ball.vy * dt;

    // Side walls
    if table.ball.x - BALL_RADIUS <= 0.0 {
        table.ball.x = BALL_RADIUS;
        table.ball.vx = table.ball.vx.abs();
        events.wall_hit = true;
    } else if table.ball.x + BALL_RADIUS >= FIELD_WIDTH {
        table.ball.x = FIELD_WIDTH - BALL_RADIUS;
        table.ball.vx = -table.ball.vx.abs();
        events.wall_hit = true;
    }

    if table.ball.vy < 0.0 && touches_paddle(&table.ball, table.paddle2_pos_x, BOTTOM_PADDLE_Y) {
        bounce_off_paddle(&mut table.ball, table.paddle2_pos_x, table.speed_multiplier, Zone::Bottom);
        table.ball.y = BOTTOM_PADDLE_Y + PADDLE_HEIGHT / 2.0 + BALL_RADIUS;
        events.paddle_hit = Some(Zone::Bottom);
    } else if table.ball.vy > 0.0 && touches_paddle(&table.ball, table.paddle1_pos_x, TOP_PADDLE_Y)
    {
        bounce_off_paddle(&mut table.ball, table.paddle1_pos_x, table.speed_multiplier, Zone::Top);
        table.ball.y = TOP_PADDLE_Y - PADDLE_HEIGHT / 2.0 - BALL_RADIUS;
        events.paddle_hit = Some(Zone::Top);
    }

    if events.paddle_hit.is_some() {
        table.rally_hits += 1;
    }

    // Ball fully past an end line: the player on the far side scores
    if table.ball.y + BALL_RADIUS < 0.0 {
        table.award_point(Zone::Top);
        events.scored = Some(Zone::Top);
    } else if table.ball.y - BALL_RADIUS > FIELD_HEIGHT {
        table.award_point(Zone::Bottom);
        events.scored = Some(Zone::Bottom);
    }

    events
}

fn touches_paddle(ball: &Ball, paddle_x: f32, paddle_y: f32) -> bool {
    let half_w = PADDLE_WIDTH / 2.0;
    let half_h = PADDLE_HEIGHT / 2.0;

    ball.x + BALL_RADIUS >= paddle_x - half_w
        && ball.x - BALL_RADIUS <= paddle_x + half_w
        && ball.y + BALL_RADIUS >= paddle_y - half_h
        && ball.y - BALL_RADIUS <= paddle_y + half_h
}

fn bounce_off_paddle(ball: &mut Ball, paddle_x: f32, speed_multiplier: f32, paddle: Zone) {
    // -1.0 = left end, 1.0 = right end
    let hit_pos = ((ball.x - paddle_x) / (PADDLE_WIDTH / 2.0)).clamp(-1.0, 1.0);
    let angle = hit_pos * MAX_BOUNCE_ANGLE;

    let speed = (ball.vx * ball.vx + ball.vy * ball.vy).sqrt() * speed_multiplier;

    ball.vx = angle.sin() * speed;
    ball.vy = match paddle {
        Zone::Bottom => angle.cos() * speed,
        Zone::Top => -angle.cos() * speed,
    };
}
