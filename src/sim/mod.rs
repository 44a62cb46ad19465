//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed step per frame
//! - Randomness only through [`ServeRng`]
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod collision;
pub mod phase;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{bounce_bottom_wall, bounce_paddle, bounce_top_wall, exited_side};
pub use phase::{GamePhase, LabelBox, StateMachine};
pub use rng::{ScriptedRng, ServeRng, entropy_rng};
pub use snapshot::Snapshot;
pub use state::{Arena, Ball, Direction, GameContext, GameEvent, Paddle, Score, Side};
pub use tick::{TickEvents, TickInput, update};
