//! Pulsing power-up pickups

use glam::Vec2;
use rand::Rng;

use crate::palette::Color;

use super::rect::Rect;
use super::spawn_coord;

/// Base side length of the pickup square
pub const POWERUP_SIZE: f32 = 20.0;
/// Pulse phase advance per frame
const PULSE_STEP: f32 = 0.1;
/// Amplitude of the sinusoidal size animation
const PULSE_AMPLITUDE: f32 = 5.0;

/// The full pickup catalog. Only Time Warp and Reality Bend currently do
/// anything; the rest are declared so the gap stays visible (and testable
/// as "no observable state change") instead of silently missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    MultiBall,
    ElementalLock,
    PaddleGrowth,
    GravityShift,
    DimensionHop,
    TimeWarp,
    RealityBend,
    QuantumTunneling,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::MultiBall,
        PowerUpKind::ElementalLock,
        PowerUpKind::PaddleGrowth,
        PowerUpKind::GravityShift,
        PowerUpKind::DimensionHop,
        PowerUpKind::TimeWarp,
        PowerUpKind::RealityBend,
        PowerUpKind::QuantumTunneling,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::MultiBall => "Multi-ball",
            PowerUpKind::ElementalLock => "Elemental Lock",
            PowerUpKind::PaddleGrowth => "Paddle Growth",
            PowerUpKind::GravityShift => "Gravity Shift",
            PowerUpKind::DimensionHop => "Dimension Hop",
            PowerUpKind::TimeWarp => "Time Warp",
            PowerUpKind::RealityBend => "Reality Bend",
            PowerUpKind::QuantumTunneling => "Quantum Tunneling",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub color: Color,
    /// Monotonically increasing phase driving the size animation
    pub pulse: f32,
}

impl PowerUp {
    /// Spawn at a random on-screen position away from the edges
    pub fn spawn(screen: Vec2, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(spawn_coord(screen.x, rng), spawn_coord(screen.y, rng));
        Self {
            rect: Rect::from_center(pos, Vec2::splat(POWERUP_SIZE)),
            kind: PowerUpKind::random(rng),
            color: Color::random(rng),
            pulse: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.pulse += PULSE_STEP;
    }

    /// Current drawn side length
    pub fn pulse_size(&self) -> f32 {
        POWERUP_SIZE + self.pulse.sin() * PULSE_AMPLITUDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_stays_away_from_edges() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let p = PowerUp::spawn(Vec2::new(800.0, 600.0), &mut rng);
            let c = p.rect.center();
            assert!((100.0..700.0).contains(&c.x));
            assert!((100.0..500.0).contains(&c.y));
        }
    }

    #[test]
    fn test_pulse_advances_monotonically() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut p = PowerUp::spawn(Vec2::new(800.0, 600.0), &mut rng);
        let mut last = p.pulse;
        for _ in 0..50 {
            p.update();
            assert!(p.pulse > last);
            last = p.pulse;
        }
    }

    #[test]
    fn test_pulse_size_oscillates_within_amplitude() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = PowerUp::spawn(Vec2::new(800.0, 600.0), &mut rng);
        for _ in 0..200 {
            p.update();
            let size = p.pulse_size();
            assert!(size >= POWERUP_SIZE - PULSE_AMPLITUDE - 1e-4);
            assert!(size <= POWERUP_SIZE + PULSE_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn test_catalog_has_eight_kinds() {
        assert_eq!(PowerUpKind::ALL.len(), 8);
        let mut rng = Pcg32::seed_from_u64(4);
        for _ in 0..50 {
            let kind = PowerUpKind::random(&mut rng);
            assert!(PowerUpKind::ALL.contains(&kind));
        }
    }
}
