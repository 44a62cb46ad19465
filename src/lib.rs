//! Paddle Pong - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, scoring, AI, phases)
//! - `driver`: Per-frame orchestration of input, snapshot and update
//! - `input`: Buffered input events consumed at tick boundaries
//! - `renderer`: Render seam consuming read-only snapshots
//! - `audio`: Sound cue seam fed from simulation events
//! - `config`: Data-driven arena and paddle geometry

pub mod audio;
pub mod config;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::{Frame, FrameDriver};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side of the arena
    pub const PADDLE_INSET: f32 = 20.0;
    /// Player paddle keyboard step (pixels per step)
    pub const PADDLE_SPEED: f32 = 6.0;
    /// AI paddle tracking speed (pixels per tick)
    pub const AI_SPEED: f32 = 4.0;
    /// AI holds still while its center is within this distance of the ball
    pub const AI_DEAD_ZONE: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal serve speed (sign randomized)
    pub const SERVE_SPEED_X: f32 = 6.0;
    /// Maximum vertical serve speed (scaled by a random factor in [-1, 1))
    pub const SERVE_SPEED_Y: f32 = 4.0;
    /// Vertical velocity per pixel of offset from paddle center on a hit
    pub const DEFLECTION_FACTOR: f32 = 0.25;

    /// Menu "Start" label hit box
    pub const LABEL_WIDTH: f32 = 110.0;
    pub const LABEL_HEIGHT: f32 = 56.0;
    /// Label center sits this far below the arena's vertical middle
    pub const LABEL_OFFSET_Y: f32 = 40.0;
}
