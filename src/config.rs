//! Startup configuration
//!
//! An optional `config.json` next to the binary overrides the built-in
//! defaults. A missing or unreadable file is not an error: a warning is
//! logged and defaults are used. Partial files override only the fields
//! they name.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Target frame rate
    pub fps: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    /// AI paddle speed (pixels per frame)
    pub ai_speed: f32,
    /// Player paddle speed (pixels per frame)
    pub player_speed: f32,
    /// Element catalog used for entity coloring
    pub elements: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: consts::WIDTH,
            height: consts::HEIGHT,
            fps: consts::FPS,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            ball_size: consts::BALL_SIZE,
            ai_speed: consts::AI_SPEED,
            player_speed: consts::PLAYER_SPEED,
            elements: consts::ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults
    pub fn load(path: &str) -> Self {
        let config = match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Config file {path} is invalid ({e}); using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Config file {path} not found ({e}); using defaults");
                Self::default()
            }
        };
        config.sanitized()
    }

    /// Clamp nonsense values a hand-edited file could introduce
    fn sanitized(mut self) -> Self {
        if self.elements.is_empty() {
            log::warn!("Config lists no elements; restoring default catalog");
            self.elements = consts::ELEMENTS.iter().map(|s| s.to_string()).collect();
        }
        self.width = self.width.max(200);
        self.height = self.height.max(200);
        self.fps = self.fps.clamp(1, 240);
        // Zero or negative entity dimensions would make spawn ranges empty
        self.paddle_width = self.paddle_width.max(1.0);
        self.paddle_height = self.paddle_height.max(1.0);
        self.ball_size = self.ball_size.max(1.0);
        self.ai_speed = self.ai_speed.max(0.0);
        self.player_speed = self.player_speed.max(0.0);
        self
    }

    /// Target inter-frame interval
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }
}
