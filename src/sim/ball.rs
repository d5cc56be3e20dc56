//! The ball: velocity, trail, element and dimension tags

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use rand::Rng;

use crate::consts::{BALL_SPEED, TRAIL_LENGTH};
use crate::palette::ColorCycler;

use super::particle::{Particle, age_particles};
use super::rect::Rect;

/// Per-frame chance of emitting a particle at the ball's center
const PARTICLE_CHANCE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    /// Recent center positions, newest first, capped at [`TRAIL_LENGTH`]
    pub trail: Vec<Vec2>,
    /// Cosmetic color key into the palette
    pub element: String,
    /// Set by rift contact; display-only in current scope
    pub dimension: u8,
    pub particles: Vec<Particle>,
}

impl Ball {
    pub fn new(screen: Vec2, size: f32, colors: &ColorCycler, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            rect: Rect::from_center(screen / 2.0, Vec2::splat(size)),
            vel: Vec2::ZERO,
            trail: Vec::with_capacity(TRAIL_LENGTH),
            element: String::new(),
            dimension: 0,
            particles: Vec::new(),
        };
        ball.reset(screen, colors, rng);
        ball
    }

    /// Re-center and relaunch after a point: speed 5 at a random angle
    /// within 45 degrees of horizontal, random horizontal sign, fresh
    /// element, dimension back to 0
    pub fn reset(&mut self, screen: Vec2, colors: &ColorCycler, rng: &mut impl Rng) {
        self.rect.set_center(screen / 2.0);
        let angle = rng.random_range(-FRAC_PI_4..FRAC_PI_4);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            BALL_SPEED * angle.cos() * sign,
            BALL_SPEED * angle.sin(),
        );
        self.element = colors.pick_element(rng);
        self.dimension = 0;
    }

    /// Record current center to the trail (newest first)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.rect.center());
        self.trail.truncate(TRAIL_LENGTH);
    }

    /// Advance one frame; `time_factor` scales movement (Time Warp)
    pub fn update(&mut self, time_factor: f32, colors: &ColorCycler, rng: &mut impl Rng) {
        self.rect.pos += self.vel * time_factor;
        self.record_trail();
        if rng.random_bool(PARTICLE_CHANCE) {
            self.particles.push(Particle::new(
                self.rect.center(),
                colors.get(&self.element),
                rng,
            ));
        }
        age_particles(&mut self.particles);
    }
}
