//! Rift Pong - a psychedelic interdimensional Pong variant
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Software renderer (pixel frame, post-processing, HUD)
//! - `palette`: Hue-cycling element colors
//! - `config`: Optional startup configuration overrides

pub mod config;
pub mod palette;
pub mod render;
pub mod sim;

pub use config::Config;

/// Built-in defaults, overridable via `config.json`
pub mod consts {
    /// Window dimensions
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    /// Target frame rate
    pub const FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Player paddle speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// AI paddle speed (pixels per frame)
    pub const AI_SPEED: f32 = 7.0;
    /// Charge meter cap
    pub const MAX_CHARGE: f32 = 100.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// Horizontal speed gain per paddle hit (multiplicative, uncapped)
    pub const PADDLE_BOOST: f32 = 1.1;

    /// Maximum trail points to store
    pub const TRAIL_LENGTH: usize = 20;

    /// Hue shift applied to every element color per frame
    pub const HUE_STEP: f32 = 0.01;

    /// Default element catalog (cosmetic color keys)
    pub const ELEMENTS: [&str; 6] = ["Fire", "Water", "Earth", "Air", "Void", "Time"];
}
