//! Player movement integration and heading easing
//!
//! Positions are integer playfield units; headings are radians. The ship
//! doesn't turn instantly: each tick it eases a fixed fraction of the
//! remaining angular error toward its target heading, snapping once the
//! error is small enough that further easing would be invisible.

use std::f32::consts::FRAC_PI_2;

use super::state::Player;
use crate::consts::ROTATION_SNAP_EPSILON;
use crate::shortest_angle_delta;

impl Player {
    /// Apply one tick of directional intent: aim the heading at the motion
    /// direction and advance the position, each axis clamped independently.
    ///
    /// `dx`/`dy` are -1, 0 or 1. An axis whose candidate position would
    /// leave the playfield keeps its old coordinate; the other axis still
    /// moves.
    pub fn steer_and_move(&mut self, dx: i32, dy: i32, width: i32, height: i32) {
        if dx != 0 || dy != 0 {
            // Negate the integers before widening: `-0.0f32` would flip the
            // angle atan2 reports for pure horizontal motion
            self.target_rotation = ((-dy) as f32).atan2((-dx) as f32) - FRAC_PI_2;
        }

        let new_x = self.pos.x + dx * self.speed;
        let new_y = self.pos.y + dy * self.speed;

        if new_x >= 0 && new_x <= width - self.size {
            self.pos.x = new_x;
        }
        if new_y >= 0 && new_y <= height - self.size {
            self.pos.y = new_y;
        }
    }

    /// Ease the current heading toward the target by one tick.
    ///
    /// The error is wrapped into (-π, π] first so the ship never spins the
    /// long way around the circle.
    pub fn update_rotation(&mut self) {
        if self.current_rotation != self.target_rotation {
            let diff = shortest_angle_delta(self.current_rotation, self.target_rotation);
            self.current_rotation += diff * self.rotation_rate;
            if diff.abs() < ROTATION_SNAP_EPSILON {
                self.current_rotation = self.target_rotation;
            }
        }
    }
}
