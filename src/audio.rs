//! Sound cues
//!
//! The simulation never plays audio itself. Each tick's events become
//! [`SoundEffect`]s that the frame driver forwards to an [`AudioSink`]; a sink
//! may drop them freely.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball left the arena
    Score,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::PaddleBounce(_) => SoundEffect::PaddleHit,
            GameEvent::Score(_) => SoundEffect::Score,
        }
    }
}

/// Fire-and-forget consumer of sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Collects cues (handy for hosts that batch them, and for tests)
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Writes cues to the log instead of a speaker
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Cues that were not muted
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("♪ {effect:?}");
    }
}
