//! Game configuration
//!
//! Arena and paddle geometry, loaded from JSON when the host supplies a file.
//! Every field falls back to the defaults in [`crate::consts`].

use std::path::Path;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a [`GameConfig`]
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// Config file could not be read
    #[display("failed to read config: {_0}")]
    Io(std::io::Error),
    /// Config file is not valid JSON for [`GameConfig`]
    #[display("failed to parse config: {_0}")]
    Parse(serde_json::Error),
    /// Values parsed but describe an unplayable arena
    #[display("invalid config: {reason}")]
    #[from(ignore)]
    Invalid { reason: String },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Tunable geometry and speeds for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from each side wall to the paddle's outer edge
    pub paddle_inset: f32,
    /// Player keyboard step
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,

    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub deflection_factor: f32,

    pub label_width: f32,
    pub label_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ai_speed: AI_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,

            ball_radius: BALL_RADIUS,
            serve_speed_x: SERVE_SPEED_X,
            serve_speed_y: SERVE_SPEED_Y,
            deflection_factor: DEFLECTION_FACTOR,

            label_width: LABEL_WIDTH,
            label_height: LABEL_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Default config with a different arena size
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("serve_speed_x", self.serve_speed_x),
            ("label_width", self.label_width),
            ("label_height", self.label_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("serve_speed_y", self.serve_speed_y),
            ("deflection_factor", self.deflection_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::invalid(format!(
                "paddle_height {} does not fit arena_height {}",
                self.paddle_height, self.arena_height
            )));
        }
        if 2.0 * self.ball_radius >= self.arena_height {
            return Err(ConfigError::invalid("ball does not fit the arena height"));
        }
        // Both paddle zones plus room for the ball to serve between them
        let paddle_zones = 2.0 * (self.paddle_inset + self.paddle_width);
        if paddle_zones + 2.0 * self.ball_radius >= self.arena_width {
            return Err(ConfigError::invalid(format!(
                "arena_width {} leaves no room between the paddles",
                self.arena_width
            )));
        }

        Ok(())
    }
}
