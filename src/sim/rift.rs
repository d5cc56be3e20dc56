//! Interdimensional rifts
//!
//! Stationary portals that retag the ball's dimension on proximity. They
//! persist indefinitely and do not move the ball.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::palette::Color;

use super::particle::{Particle, age_particles};
use super::spawn_coord;

/// Per-frame chance of emitting an ambient particle on the boundary
const PARTICLE_CHANCE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Rift {
    pub center: Vec2,
    pub radius: f32,
    /// Dimension id the ball is tagged with on contact
    pub destination: u8,
    pub color: Color,
    pub particles: Vec<Particle>,
}

impl Rift {
    pub fn spawn(screen: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            center: Vec2::new(spawn_coord(screen.x, rng), spawn_coord(screen.y, rng)),
            radius: rng.random_range(30.0..=50.0),
            destination: rng.random_range(1..=3),
            color: Color::random(rng),
            particles: Vec::new(),
        }
    }

    /// Advance one frame: emit an ambient boundary particle occasionally,
    /// age the rest
    pub fn update(&mut self, rng: &mut impl Rng) {
        if rng.random_bool(PARTICLE_CHANCE) {
            let angle = rng.random_range(0.0..TAU);
            let pos = self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius;
            self.particles.push(Particle::new(pos, self.color, rng));
        }
        age_particles(&mut self.particles);
    }

    /// Whether a point is inside the rift
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}
