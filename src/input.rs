//! Input buffering
//!
//! Host callbacks push [`InputEvent`]s whenever they arrive. Nothing touches
//! the game until the frame driver drains the queue at the start of a tick.
//!
//! Events fall into two groups:
//! - discrete: activations and pause toggles, kept in order (bounded)
//! - continuous: pointer height, coalesced to the latest value
//!
//! Keyboard paddle steps are summed into a net step count.

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{Direction, TickInput};

/// Discrete events kept per tick before new ones are dropped
pub const MAX_PENDING_EVENTS: usize = 32;

/// An input signal from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to height `y` (arena coordinates)
    PointerMove { y: f32 },
    /// Pointer click/tap at `(x, y)`
    PointerActivate { x: f32, y: f32 },
    /// Pause key pressed
    PauseToggle,
    /// Paddle key pressed
    PaddleStep(Direction),
}

impl InputEvent {
    /// Map a DOM-style key name to an event.
    ///
    /// `Escape` and `P`/`p` both toggle pause; arrow keys and `W`/`S` step the
    /// paddle.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::PauseToggle),
            "ArrowUp" => Some(Self::PaddleStep(Direction::Up)),
            "ArrowDown" => Some(Self::PaddleStep(Direction::Down)),
            _ if key.eq_ignore_ascii_case("p") => Some(Self::PauseToggle),
            _ if key.eq_ignore_ascii_case("w") => Some(Self::PaddleStep(Direction::Up)),
            _ if key.eq_ignore_ascii_case("s") => Some(Self::PaddleStep(Direction::Down)),
            _ => None,
        }
    }

    /// All coordinates are finite
    fn is_well_formed(&self) -> bool {
        match *self {
            Self::PointerMove { y } => y.is_finite(),
            Self::PointerActivate { x, y } => x.is_finite() && y.is_finite(),
            Self::PauseToggle | Self::PaddleStep(_) => true,
        }
    }
}

/// Discrete signal routed to the phase machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseSignal {
    Activate(Vec2),
    PauseToggle,
}

/// Everything collected since the previous drain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrainedInput {
    /// Phase signals in arrival order
    pub signals: Vec<PhaseSignal>,
    /// Movement for the physics step
    pub tick: TickInput,
}

/// Buffer between host callbacks and the tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    signals: VecDeque<PhaseSignal>,
    pointer_y: Option<f32>,
    paddle_steps: i32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            signals: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            pointer_y: None,
            paddle_steps: 0,
        }
    }

    /// Buffer an event. Returns false if it was rejected (non-finite
    /// coordinates) or dropped (queue full).
    pub fn push(&mut self, event: InputEvent) -> bool {
        if !event.is_well_formed() {
            log::warn!("Rejected malformed input {event:?}");
            return false;
        }

        match event {
            InputEvent::PointerMove { y } => {
                self.pointer_y = Some(y);
                true
            }
            InputEvent::PaddleStep(dir) => {
                self.paddle_steps = self.paddle_steps.saturating_add(dir.sign() as i32);
                true
            }
            InputEvent::PointerActivate { x, y } => {
                self.push_signal(PhaseSignal::Activate(Vec2::new(x, y)))
            }
            InputEvent::PauseToggle => self.push_signal(PhaseSignal::PauseToggle),
        }
    }

    fn push_signal(&mut self, signal: PhaseSignal) -> bool {
        if self.signals.len() >= MAX_PENDING_EVENTS {
            log::debug!("Input queue full, dropping {signal:?}");
            return false;
        }
        self.signals.push_back(signal);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty() && self.pointer_y.is_none() && self.paddle_steps == 0
    }

    /// Take everything buffered and reset
    pub fn drain(&mut self) -> DrainedInput {
        DrainedInput {
            signals: self.signals.drain(..).collect(),
            tick: TickInput {
                pointer_y: self.pointer_y.take(),
                paddle_steps: std::mem::take(&mut self.paddle_steps),
            },
        }
    }
}
