//! Short-lived visual particles
//!
//! Particles are owned by whatever spawned them (paddle, ball, rift, or
//! the game's ambient list) and are dropped by the owner once expired.
//! They never affect gameplay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::palette::Color;

/// Size lost per update; together with the starting size this bounds the
/// particle's lifetime
pub const SIZE_DECAY: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Fixed at creation: random direction, speed in [1, 3]
    pub vel: Vec2,
    /// Color snapshot taken at creation (does not follow the palette)
    pub color: Color,
    /// Current radius; starts in [2, 5] and shrinks every frame
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: Color, rng: &mut impl Rng) -> Self {
        let speed = rng.random_range(1.0..3.0);
        let angle = rng.random_range(0.0..TAU);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            size: rng.random_range(2.0..=5.0),
        }
    }

    /// Advance one frame. Returns true once the particle has expired and
    /// should be discarded by its owner.
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.size -= SIZE_DECAY;
        self.size <= 0.0
    }
}

/// Age a particle list in place, dropping expired entries
pub fn age_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| !p.update());
}
