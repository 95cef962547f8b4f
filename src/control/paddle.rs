// Paddle controller: the only writer of paddle positions

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::game::{Simulation, Zone};

/// Leftmost paddle centre the controller will produce
pub const MIN_X: f32 = 125.0;
/// Rightmost paddle centre the controller will produce
pub const MAX_X: f32 = 675.0;

/// Applies scaled horizontal deltas to the paddles of a shared world.
pub struct PaddleController<S: Simulation> {
    world: Rc<RefCell<S>>,
    sensitivity: f32,
}

impl<S: Simulation> PaddleController<S> {
    pub fn new(world: Rc<RefCell<S>>, sensitivity: f32) -> Self {
        Self { world, sensitivity }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn world(&self) -> &Rc<RefCell<S>> {
        &self.world
    }

    /// Move `zone`'s paddle by `raw_delta` scaled by the sensitivity and
    /// return the position written to the world.
    ///
    /// A paddle at or beyond an edge is pushed back inward by the magnitude
    /// of the delta, whatever its sign.
    pub fn apply_delta(&mut self, zone: Zone, raw_delta: f32) -> f32 {
        let mut world = self.world.borrow_mut();
        let current = world.paddle_x(zone);
        let next = next_position(current, raw_delta * self.sensitivity);

        trace!(zone = zone.display_name(), current, next, "paddle moved");
        world.set_paddle_x(zone, next);
        next
    }
}

/// Boundary policy for a single step, independent of any world.
pub fn next_position(current: f32, scaled_delta: f32) -> f32 {
    if current >= MAX_X {
        (current - scaled_delta.abs()).max(MIN_X)
    } else if current <= MIN_X {
        (current + scaled_delta.abs()).min(MAX_X)
    } else {
        (current + scaled_delta).clamp(MIN_X, MAX_X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::game::Table;

    fn controller(sensitivity: f32) -> PaddleController<Table> {
        let table = Table::with_seed(&PhysicsConfig::default(), 60, 3);
        PaddleController::new(Rc::new(RefCell::new(table)), sensitivity)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_inside_range_applies_delta_directly() {
        let mut controller = controller(0.1);
        controller.world().borrow_mut().set_paddle_x(Zone::Bottom, 400.0);

        assert!(approx(controller.apply_delta(Zone::Bottom, 30.0), 403.0));
        assert!(approx(controller.apply_delta(Zone::Bottom, -50.0), 398.0));
        assert!(approx(controller.world().borrow().paddle2_pos_x, 398.0));
        // The other paddle is untouched
        assert_eq!(controller.world().borrow().paddle1_pos_x, 400.0);
    }

    #[test]
    fn test_large_delta_from_inside_is_clamped() {
        assert_eq!(next_position(600.0, 500.0), MAX_X);
        assert_eq!(next_position(200.0, -500.0), MIN_X);
    }

    #[test]
    fn test_right_edge_pushes_inward_for_either_sign() {
        let epsilon = 8.0;
        for raw in [-15.0_f32, 15.0] {
            let scaled = raw / 3.0;
            let next = next_position(MAX_X + epsilon, scaled);
            assert!(approx(next, MAX_X + epsilon - scaled.abs()));
        }
        // Resting exactly on the edge is nudged inward, not frozen
        assert!(approx(next_position(MAX_X, 4.0), MAX_X - 4.0));
    }

    #[test]
    fn test_left_edge_pushes_inward_for_either_sign() {
        let epsilon = 8.0;
        for scaled in [-5.0_f32, 5.0] {
            let next = next_position(MIN_X - epsilon, scaled);
            assert!(approx(next, MIN_X - epsilon + 5.0));
        }
        assert!(approx(next_position(MIN_X, -2.0), MIN_X + 2.0));
    }

    #[test]
    fn test_edge_correction_never_overshoots_far_edge() {
        assert_eq!(next_position(MAX_X, 10_000.0), MIN_X);
        assert_eq!(next_position(MIN_X, -10_000.0), MAX_X);
    }

    #[test]
    fn test_incremental_boundary_scenario() {
        let mut controller = controller(1.0 / 3.0);
        controller.world().borrow_mut().set_paddle_x(Zone::Bottom, 680.0);

        let next = controller.apply_delta(Zone::Bottom, -15.0);

        assert!(approx(next, 675.0));
        assert!(approx(controller.world().borrow().paddle2_pos_x, 675.0));
    }

    #[test]
    fn test_positions_stay_in_range_over_many_steps() {
        let mut controller = controller(1.0);
        let deltas = [90.0, 200.0, 310.0, -40.0, -700.0, -3.0, 12.5, 550.0, 0.0, -1.0];

        for (i, delta) in deltas.iter().cycle().take(200).enumerate() {
            let zone = if i % 2 == 0 { Zone::Top } else { Zone::Bottom };
            let next = controller.apply_delta(zone, *delta);
            assert!((MIN_X..=MAX_X).contains(&next), "step {} left range: {}", i, next);
        }
    }

    #[test]
    fn test_out_of_range_start_moves_toward_range() {
        let start = 900.0;
        let next = next_position(start, 20.0);
        assert!(next < start);

        let start = 10.0;
        let next = next_position(start, -20.0);
        assert!(next > start);
    }
}
