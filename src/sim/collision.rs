//! Collision detection and response for the rectangular table
//!
//! Each check runs once against the ball's already-integrated position. A
//! ball moving far enough in one tick can pass through a paddle; that's
//! accepted.

use super::state::{Arena, Ball, Paddle, Side};

/// Bounce off the top wall. Returns true on contact.
pub fn bounce_top_wall(ball: &mut Ball) -> bool {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Bounce off the bottom wall. Returns true on contact.
pub fn bounce_bottom_wall(ball: &mut Ball, arena_height: f32) -> bool {
    if ball.pos.y + ball.radius > arena_height {
        ball.pos.y = arena_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Bounce off `paddle`, which defends `side`.
///
/// On contact the ball is placed just outside the paddle face, its horizontal
/// velocity is reversed and its vertical velocity is replaced by the offset
/// from the paddle center times `deflection`.
pub fn bounce_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, deflection: f32) -> bool {
    let reaches_face = match side {
        Side::Player => ball.pos.x - ball.radius < paddle.right(),
        Side::Ai => ball.pos.x + ball.radius > paddle.x(),
    };
    if !reaches_face || !paddle.spans(ball.pos.y) {
        return false;
    }

    ball.pos.x = match side {
        Side::Player => paddle.right() + ball.radius,
        Side::Ai => paddle.x() - ball.radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = (ball.pos.y - paddle.center_y()) * deflection;
    true
}

/// Side that earns a point if the ball has left the arena
pub fn exited_side(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x > arena.width {
        Some(Side::Player)
    } else {
        None
    }
}
