//! Opponent paddle control
//!
//! Purely reactive: the paddle chases the ball's current height with no
//! prediction, and holds still inside a dead zone so it doesn't jitter.

use super::state::{Direction, Paddle};

/// Decide which way the AI paddle should move to follow `ball_y`
pub fn chase_direction(paddle: &Paddle, ball_y: f32, dead_zone: f32) -> Option<Direction> {
    let center = paddle.center_y();
    if center < ball_y - dead_zone {
        Some(Direction::Down)
    } else if center > ball_y + dead_zone {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Move the AI paddle one step toward `ball_y` (clamped to the arena)
pub fn steer(paddle: &mut Paddle, ball_y: f32, dead_zone: f32) {
    if let Some(dir) = chase_direction(paddle, ball_y, dead_zone) {
        paddle.step(dir);
    }
}
