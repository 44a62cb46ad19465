//! Frame driver
//!
//! Owns the [`GameContext`] and runs one tick per display refresh:
//! 1. drain buffered input (phase signals first, then movement)
//! 2. snapshot the current state for the renderer
//! 3. step the simulation (a no-op unless playing)
//!
//! The snapshot is taken before the step, so a renderer always shows the
//! state the player was reacting to.

use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::config::GameConfig;
use crate::input::{InputEvent, InputQueue, PhaseSignal};
use crate::renderer::Renderer;
use crate::sim::{GameContext, GameEvent, ServeRng, Snapshot, entropy_rng, update};

/// Output of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Tick counter, starting at 0
    pub index: u64,
    /// State at the start of the tick
    pub snapshot: Snapshot,
    /// What happened during the step
    pub events: Vec<GameEvent>,
}

/// Single-threaded game loop
#[derive(Debug)]
pub struct FrameDriver<R = Pcg32> {
    ctx: GameContext,
    rng: R,
    input: InputQueue,
    frames: u64,
}

impl FrameDriver<Pcg32> {
    /// Driver with entropy-seeded serves
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, entropy_rng())
    }
}

impl<R: ServeRng> FrameDriver<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let ctx = GameContext::new(config, &mut rng);
        Self {
            ctx,
            rng,
            input: InputQueue::new(),
            frames: 0,
        }
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    /// Direct access for hosts that set up positions (tests, demos)
    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Buffer an input event until the next tick
    pub fn push_input(&mut self, event: InputEvent) -> bool {
        self.input.push(event)
    }

    /// Run one tick
    pub fn tick(&mut self) -> Frame {
        let drained = self.input.drain();
        for signal in drained.signals {
            match signal {
                PhaseSignal::Activate(point) => {
                    if !self.ctx.activate(point) {
                        log::trace!("Activation at {point} ignored");
                    }
                }
                PhaseSignal::PauseToggle => {
                    self.ctx.toggle_pause();
                }
            }
        }

        let snapshot = Snapshot::capture(&self.ctx);
        let events = update(&mut self.ctx, &drained.tick, &mut self.rng);

        let frame = Frame {
            index: self.frames,
            snapshot,
            events,
        };
        self.frames += 1;
        frame
    }

    /// Run one tick and hand its output to the collaborators
    pub fn frame(&mut self, renderer: &mut impl Renderer, audio: &mut impl AudioSink) -> Frame {
        let frame = self.tick();
        renderer.render(&frame.snapshot);
        for &event in &frame.events {
            audio.play(SoundEffect::from(event));
        }
        frame
    }

    /// Run `count` frames back to back
    pub fn run(&mut self, count: u64, renderer: &mut impl Renderer, audio: &mut impl AudioSink) {
        for _ in 0..count {
            self.frame(renderer, audio);
        }
    }
}
