//! Deterministic game simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame stepping only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod game;
pub mod paddle;
pub mod particle;
pub mod pickup;
pub mod rect;
pub mod rift;

pub use ball::Ball;
pub use game::GameState;
pub use paddle::{Control, FrameInput, Paddle};
pub use particle::Particle;
pub use pickup::{PowerUp, PowerUpKind};
pub use rect::Rect;
pub use rift::Rift;

use rand::Rng;

/// Margin kept between spawned pickups/rifts and the screen edges
pub const SPAWN_MARGIN: f32 = 100.0;

/// Random spawn coordinate along one screen axis, kept away from the
/// edges. Degrades gracefully when the screen is smaller than two margins.
pub(crate) fn spawn_coord(extent: f32, rng: &mut impl Rng) -> f32 {
    let lo = SPAWN_MARGIN.min(extent / 2.0);
    let hi = (extent - SPAWN_MARGIN).max(lo + 1.0);
    rng.random_range(lo..hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_coord_respects_margin() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let x = spawn_coord(800.0, &mut rng);
            assert!((100.0..700.0).contains(&x));
        }
    }

    #[test]
    fn test_spawn_coord_on_tiny_screen() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..100 {
            let x = spawn_coord(120.0, &mut rng);
            assert!(x >= 0.0 && x <= 120.0);
        }
    }
}
