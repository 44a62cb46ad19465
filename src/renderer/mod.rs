//! Rendering seam
//!
//! Renderers get a [`Snapshot`] once per frame and must not reach back into
//! the game. Drawing itself is up to the host.

use crate::sim::{GamePhase, Snapshot};

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Records every snapshot
impl Renderer for Vec<Snapshot> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.push(*snapshot);
    }
}

/// Logs a one-line summary every `every` frames
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last_phase: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let phase_changed = self.last_phase != Some(snapshot.phase);
        if phase_changed || self.frames % self.every == 0 {
            log::info!("[frame {}] {}", self.frames, describe(snapshot));
        } else {
            log::trace!("[frame {}] {}", self.frames, describe(snapshot));
        }
        self.last_phase = Some(snapshot.phase);
        self.frames += 1;
    }
}

/// Human-readable summary of a frame
pub fn describe(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        GamePhase::Menu => "PONG - click Start".to_string(),
        GamePhase::Paused => format!(
            "Paused  {} : {}",
            snapshot.score.player, snapshot.score.ai
        ),
        GamePhase::Playing => format!(
            "{} : {}  ball ({:.1}, {:.1})  player y={:.1}  ai y={:.1}",
            snapshot.score.player,
            snapshot.score.ai,
            snapshot.ball_x,
            snapshot.ball_y,
            snapshot.player_y,
            snapshot.ai_y
        ),
    }
}
