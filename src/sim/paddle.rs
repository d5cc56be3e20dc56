//! Player and AI paddles

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::consts::MAX_CHARGE;
use crate::palette::ColorCycler;

use super::particle::{Particle, age_particles};
use super::rect::Rect;

/// Who drives the paddle each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Player,
    Ai,
}

/// Keyboard state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub charge: bool,
}

/// Per-frame chance of emitting an ambient particle along the paddle
const PARTICLE_CHANCE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Cosmetic color key into the palette
    pub element: String,
    pub control: Control,
    /// Charge meter in [0, 100]; ramps while the charge key is held and
    /// decays when released. Nothing consumes it yet - the meter and its
    /// update rules are kept intact for a future mechanic.
    pub charge: f32,
    /// Consecutive hits since the last point was scored
    pub combo_meter: u32,
    pub particles: Vec<Particle>,
}

impl Paddle {
    pub fn new(
        x: f32,
        y: f32,
        size: Vec2,
        control: Control,
        colors: &ColorCycler,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            rect: Rect {
                pos: Vec2::new(x, y),
                size,
            },
            element: colors.pick_element(rng),
            control,
            charge: 0.0,
            combo_meter: 0,
            particles: Vec::new(),
        }
    }

    /// Derived combo multiplier: 1 + floor(meter / 3) * 0.2
    ///
    /// Computed rather than stored so it can never go stale between the
    /// meter changing and a hit recomputing it.
    pub fn combo_multiplier(&self) -> f32 {
        1.0 + (self.combo_meter / 3) as f32 * 0.2
    }

    /// Advance one frame: movement (input or AI tracking), charge meter,
    /// and the paddle's private particle set
    pub fn update(
        &mut self,
        input: &FrameInput,
        ball_center_y: f32,
        config: &Config,
        colors: &ColorCycler,
        rng: &mut impl Rng,
    ) {
        match self.control {
            Control::Player => {
                if input.up {
                    self.rect.pos.y -= config.player_speed;
                }
                if input.down {
                    self.rect.pos.y += config.player_speed;
                }
                if input.charge {
                    self.charge = (self.charge + 1.0).min(MAX_CHARGE);
                } else {
                    self.charge = (self.charge - 0.5).max(0.0);
                }
            }
            Control::Ai => {
                let center = self.rect.center().y;
                if center < ball_center_y {
                    self.rect.pos.y += config.ai_speed;
                } else if center > ball_center_y {
                    self.rect.pos.y -= config.ai_speed;
                }
            }
        }

        // Clamp to screen bounds
        let max_y = config.height as f32 - self.rect.size.y;
        self.rect.pos.y = self.rect.pos.y.clamp(0.0, max_y.max(0.0));

        age_particles(&mut self.particles);
        if rng.random_bool(PARTICLE_CHANCE) {
            let y = rng.random_range(self.rect.top()..self.rect.bottom());
            let pos = Vec2::new(self.rect.center().x, y);
            self.particles
                .push(Particle::new(pos, colors.get(&self.element), rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fixture(control: Control) -> (Paddle, Config, ColorCycler, Pcg32) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let colors = ColorCycler::new(&config.elements, &mut rng);
        let paddle = Paddle::new(
            50.0,
            255.0,
            Vec2::new(config.paddle_width, config.paddle_height),
            control,
            &colors,
            &mut rng,
        );
        (paddle, config, colors, rng)
    }

    #[test]
    fn test_player_moves_up_and_down() {
        let (mut paddle, config, colors, mut rng) = fixture(Control::Player);
        let y0 = paddle.rect.pos.y;

        let up = FrameInput {
            up: true,
            ..Default::default()
        };
        paddle.update(&up, 0.0, &config, &colors, &mut rng);
        assert_eq!(paddle.rect.pos.y, y0 - config.player_speed);

        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        paddle.update(&down, 0.0, &config, &colors, &mut rng);
        assert_eq!(paddle.rect.pos.y, y0);
    }

    #[test]
    fn test_player_clamped_to_screen() {
        let (mut paddle, config, colors, mut rng) = fixture(Control::Player);
        let up = FrameInput {
            up: true,
            ..Default::default()
        };
        for _ in 0..500 {
            paddle.update(&up, 0.0, &config, &colors, &mut rng);
        }
        assert_eq!(paddle.rect.pos.y, 0.0);

        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            paddle.update(&down, 0.0, &config, &colors, &mut rng);
        }
        assert_eq!(
            paddle.rect.pos.y,
            config.height as f32 - config.paddle_height
        );
    }

    #[test]
    fn test_charge_ramps_and_decays_within_bounds() {
        let (mut paddle, config, colors, mut rng) = fixture(Control::Player);
        let held = FrameInput {
            charge: true,
            ..Default::default()
        };
        for _ in 0..300 {
            paddle.update(&held, 0.0, &config, &colors, &mut rng);
        }
        assert_eq!(paddle.charge, MAX_CHARGE);

        let released = FrameInput::default();
        paddle.update(&released, 0.0, &config, &colors, &mut rng);
        assert_eq!(paddle.charge, MAX_CHARGE - 0.5);

        for _ in 0..1000 {
            paddle.update(&released, 0.0, &config, &colors, &mut rng);
        }
        assert_eq!(paddle.charge, 0.0);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let (mut paddle, config, colors, mut rng) = fixture(Control::Ai);
        let input = FrameInput::default();

        let y0 = paddle.rect.center().y;
        paddle.update(&input, y0 + 100.0, &config, &colors, &mut rng);
        assert!(paddle.rect.center().y > y0);

        let y1 = paddle.rect.center().y;
        paddle.update(&input, y1 - 100.0, &config, &colors, &mut rng);
        assert!(paddle.rect.center().y < y1);
    }

    #[test]
    fn test_combo_multiplier_steps_every_three_hits() {
        let (mut paddle, ..) = fixture(Control::Player);
        let expected = [1.0, 1.0, 1.0, 1.2, 1.2, 1.2, 1.4];
        for (m, want) in expected.iter().enumerate() {
            paddle.combo_meter = m as u32;
            assert!((paddle.combo_multiplier() - want).abs() < 1e-6, "m={m}");
        }
    }

    proptest! {
        #[test]
        fn prop_combo_multiplier_formula(m in 0u32..100_000) {
            let (mut paddle, ..) = fixture(Control::Player);
            paddle.combo_meter = m;
            let expected = 1.0 + (m as f32 / 3.0).floor() * 0.2;
            prop_assert!((paddle.combo_multiplier() - expected).abs() < 1e-4);
        }
    }
}
