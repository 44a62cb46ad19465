//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. Nothing moves unless the
//! game is in [`GamePhase::Playing`].

use super::ai;
use super::collision::{bounce_bottom_wall, bounce_paddle, bounce_top_wall, exited_side};
use super::phase::GamePhase;
use super::rng::ServeRng;
use super::state::{GameContext, GameEvent, Side};

/// Player input gathered for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer height; the player paddle centers on it
    pub pointer_y: Option<f32>,
    /// Net keyboard steps (negative = up)
    pub paddle_steps: i32,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        self.pointer_y.is_none() && self.paddle_steps == 0
    }
}

/// Events produced by one tick, in the order they happened
pub type TickEvents = Vec<GameEvent>;

/// Advance the game by one frame
pub fn update(ctx: &mut GameContext, input: &TickInput, rng: &mut impl ServeRng) -> TickEvents {
    let mut events = TickEvents::new();
    if ctx.phase() != GamePhase::Playing {
        return events;
    }

    apply_player_input(ctx, input);

    ctx.ball.advance();

    // Top/bottom walls
    if bounce_top_wall(&mut ctx.ball) {
        log::trace!("Wall bounce (top) at x={:.1}", ctx.ball.pos.x);
        events.push(GameEvent::WallBounce);
    }
    if bounce_bottom_wall(&mut ctx.ball, ctx.arena.height) {
        log::trace!("Wall bounce (bottom) at x={:.1}", ctx.ball.pos.x);
        events.push(GameEvent::WallBounce);
    }

    // Paddles
    let deflection = ctx.config.deflection_factor;
    for (paddle, side) in [(&ctx.player, Side::Player), (&ctx.ai, Side::Ai)] {
        if bounce_paddle(&mut ctx.ball, paddle, side, deflection) {
            log::debug!("{side:?} paddle hit, ball velocity now {}", ctx.ball.vel);
            events.push(GameEvent::PaddleBounce(side));
        }
    }

    // Left/right exits
    if let Some(scorer) = exited_side(&ctx.ball, &ctx.arena) {
        ctx.score.award(scorer);
        log::info!(
            "Point to {scorer:?} (player {} - ai {})",
            ctx.score.player,
            ctx.score.ai
        );
        events.push(GameEvent::Score(scorer));
        ctx.reset_ball(rng);
    }

    ai::steer(&mut ctx.ai, ctx.ball.pos.y, ctx.config.ai_dead_zone);

    events
}

fn apply_player_input(ctx: &mut GameContext, input: &TickInput) {
    if let Some(y) = input.pointer_y {
        ctx.player.center_on(y);
    }
    if input.paddle_steps != 0 {
        let dy = input.paddle_steps as f32 * ctx.player.speed();
        ctx.player.shift(dy);
    }
}
