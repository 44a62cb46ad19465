//! Read-only view of the game handed to renderers

use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use super::state::{GameContext, Score};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player_y: f32,
    pub ai_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub score: Score,
}

impl Snapshot {
    pub fn capture(ctx: &GameContext) -> Self {
        Self {
            phase: ctx.phase(),
            player_y: ctx.player.y(),
            ai_y: ctx.ai.y(),
            ball_x: ctx.ball.pos.x,
            ball_y: ctx.ball.pos.y,
            score: ctx.score,
        }
    }

    /// JSON form for host bridges
    pub fn to_json(&self) -> String {
        // Plain numeric fields and unit enums; serialization can't fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<&GameContext> for Snapshot {
    fn from(ctx: &GameContext) -> Self {
        Self::capture(ctx)
    }
}
