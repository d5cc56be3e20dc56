//! Software rendering: frame buffer, scene/HUD drawing, post effects

pub mod draw;
pub mod effects;
pub mod frame;
pub mod text;

pub use draw::{Drawable, draw_hud, draw_scene};
pub use effects::VisualEffects;
pub use frame::Frame;
