//! Scene and HUD drawing
//!
//! Everything here reads simulation state and writes pixels; nothing in
//! `sim` knows this module exists.

use glam::Vec2;

use crate::palette::{Color, ColorCycler};
use crate::sim::{Ball, GameState, Paddle, Particle, PowerUp, Rect, Rift};

use super::frame::Frame;
use super::text::{draw_text, draw_text_centered, text_width};

/// Number of expanding glow layers around paddles, the ball, and rifts
const GLOW_LAYERS: i32 = 5;
const HUD_SCALE: u32 = 2;
const HUD_MARGIN: i32 = 10;

/// Anything the scene pass knows how to put on screen
pub trait Drawable {
    fn draw(&self, frame: &mut Frame, colors: &ColorCycler);
}

impl Drawable for Particle {
    fn draw(&self, frame: &mut Frame, _colors: &ColorCycler) {
        frame.fill_circle(self.pos, self.size, self.color);
    }
}

impl Drawable for Paddle {
    fn draw(&self, frame: &mut Frame, colors: &ColorCycler) {
        let color = colors.get(&self.element);
        frame.fill_rect(&self.rect, color);
        for p in &self.particles {
            p.draw(frame, colors);
        }
        // Glow: expanding translucent outlines
        for i in 0..GLOW_LAYERS {
            let alpha = (50 - i * 10) as u8;
            frame.outline_rect(&self.rect.inflate(i as f32), color, alpha);
        }
    }
}

impl Drawable for Ball {
    fn draw(&self, frame: &mut Frame, colors: &ColorCycler) {
        let color = colors.get(&self.element);
        // Trail: oldest entries smallest and faintest
        for (i, pos) in self.trail.iter().enumerate() {
            let radius = (self.rect.size.x - 0.5 * i as f32) / 2.0;
            let alpha = 255u8.saturating_sub(12 * i as u8);
            frame.blend_circle(*pos, radius, color, alpha);
        }
        frame.fill_ellipse(&self.rect, color);
        for p in &self.particles {
            p.draw(frame, colors);
        }
        for i in 0..GLOW_LAYERS {
            let alpha = (50 - i * 10) as u8;
            frame.outline_ellipse(&self.rect.inflate(i as f32), color, alpha);
        }
    }
}

impl Drawable for PowerUp {
    fn draw(&self, frame: &mut Frame, _colors: &ColorCycler) {
        let size = self.pulse_size();
        let rect = Rect::from_center(self.rect.center(), Vec2::splat(size));
        frame.fill_rect(&rect, self.color);
    }
}

impl Drawable for Rift {
    fn draw(&self, frame: &mut Frame, colors: &ColorCycler) {
        for i in 0..GLOW_LAYERS {
            let alpha = (100 - i * 20).max(0) as u8;
            frame.outline_circle(self.center, self.radius - (i * 2) as f32, self.color, alpha, 2.0);
        }
        for p in &self.particles {
            p.draw(frame, colors);
        }
        let label = format!("D{}", self.destination);
        draw_text_centered(frame, self.center, &label, Color::WHITE, 1);
    }
}

/// Draw the whole playfield, back to front
pub fn draw_scene(state: &GameState, frame: &mut Frame) {
    frame.clear(Color::BLACK);
    for rift in &state.rifts {
        rift.draw(frame, &state.colors);
    }
    for powerup in &state.powerups {
        powerup.draw(frame, &state.colors);
    }
    state.player.draw(frame, &state.colors);
    state.ai.draw(frame, &state.colors);
    state.ball.draw(frame, &state.colors);
    for particle in &state.particles {
        particle.draw(frame, &state.colors);
    }
}

/// Draw score and dimensional readouts on top of the post-processed frame
pub fn draw_hud(state: &GameState, frame: &mut Frame) {
    let width = frame.width() as i32;

    let score = format!("{} - {}", state.score[0], state.score[1]);
    let x = (width - text_width(&score, HUD_SCALE) as i32) / 2;
    draw_text(frame, x, HUD_MARGIN, &score, Color::WHITE, HUD_SCALE);

    let dimension = format!("Dimension: {}", state.ball.dimension);
    draw_text(frame, HUD_MARGIN, HUD_MARGIN, &dimension, Color::WHITE, HUD_SCALE);

    let time = format!("Time: {:.2}x", state.time_factor);
    let x = width - text_width(&time, HUD_SCALE) as i32 - HUD_MARGIN;
    draw_text(frame, x, HUD_MARGIN, &time, Color::WHITE, HUD_SCALE);

    let shift = format!("Reality Shift: {:.2}", state.reality_shift);
    let x = width - text_width(&shift, HUD_SCALE) as i32 - HUD_MARGIN;
    draw_text(frame, x, HUD_MARGIN + 40, &shift, Color::WHITE, HUD_SCALE);
}
