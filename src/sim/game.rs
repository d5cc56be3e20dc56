//! Per-frame game orchestration
//!
//! Fixed update order every frame: palette, paddles, ball, collisions,
//! scoring, power-ups, rifts, ambient particles. Deterministic given the
//! seed and the input sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::consts::PADDLE_BOOST;
use crate::palette::{Color, ColorCycler};

use super::ball::Ball;
use super::paddle::{Control, FrameInput, Paddle};
use super::particle::{Particle, age_particles};
use super::pickup::{PowerUp, PowerUpKind};
use super::rift::Rift;

/// Burst sizes for collision/pickup/rift events
const HIT_BURST: usize = 20;
const PICKUP_BURST: usize = 30;
const RIFT_BURST: usize = 50;

/// Per-frame spawn probabilities
const POWERUP_SPAWN_CHANCE: f64 = 0.01;
const RIFT_SPAWN_CHANCE: f64 = 0.005;

/// Horizontal inset of both paddles from their screen edge
const PADDLE_INSET: f32 = 50.0;

/// Complete game state
pub struct GameState {
    pub config: Config,
    pub rng: Pcg32,
    pub colors: ColorCycler,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub powerups: Vec<PowerUp>,
    pub rifts: Vec<Rift>,
    /// Burst particles not owned by any entity
    pub particles: Vec<Particle>,
    /// `[player, ai]`; a side scores when the ball exits the opposite edge
    pub score: [u32; 2],
    /// Ball movement multiplier, set only by Time Warp pickups
    pub time_factor: f32,
    /// Cosmetic modifier, set only by Reality Bend pickups (HUD display)
    pub reality_shift: f32,
    /// Frame counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(seed: u64, config: Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let colors = ColorCycler::new(&config.elements, &mut rng);

        let screen = Vec2::new(config.width as f32, config.height as f32);
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let mid_y = (config.height as f32 - config.paddle_height) / 2.0;

        let player = Paddle::new(
            PADDLE_INSET,
            mid_y,
            paddle_size,
            Control::Player,
            &colors,
            &mut rng,
        );
        let ai = Paddle::new(
            screen.x - PADDLE_INSET - config.paddle_width,
            mid_y,
            paddle_size,
            Control::Ai,
            &colors,
            &mut rng,
        );
        let ball = Ball::new(screen, config.ball_size, &colors, &mut rng);

        Self {
            config,
            rng,
            colors,
            player,
            ai,
            ball,
            powerups: Vec::new(),
            rifts: Vec::new(),
            particles: Vec::new(),
            score: [0, 0],
            time_factor: 1.0,
            reality_shift: 0.0,
            time_ticks: 0,
        }
    }

    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.config.width as f32, self.config.height as f32)
    }

    /// Advance the whole game by one frame
    pub fn step(&mut self, input: &FrameInput) {
        self.time_ticks += 1;
        self.colors.update();

        let ball_y = self.ball.rect.center().y;
        self.player
            .update(input, ball_y, &self.config, &self.colors, &mut self.rng);
        self.ai
            .update(input, ball_y, &self.config, &self.colors, &mut self.rng);
        self.ball
            .update(self.time_factor, &self.colors, &mut self.rng);

        self.handle_collisions();
        self.handle_scoring();
        self.handle_powerups();
        self.handle_rifts();

        age_particles(&mut self.particles);
    }

    /// Wall and paddle collisions
    fn handle_collisions(&mut self) {
        let height = self.config.height as f32;
        if self.ball.rect.top() <= 0.0 || self.ball.rect.bottom() >= height {
            self.ball.vel.y = -self.ball.vel.y;
        }

        let ball_color = self.colors.get(&self.ball.element);
        let ball_center = self.ball.rect.center();
        for paddle in [&mut self.player, &mut self.ai] {
            if self.ball.rect.overlaps(&paddle.rect) {
                // Invert and amplify; the ramp is deliberately uncapped
                self.ball.vel.x *= -PADDLE_BOOST;
                paddle.combo_meter += 1;
                spawn_burst(
                    &mut self.particles,
                    ball_center,
                    ball_color,
                    HIT_BURST,
                    &mut self.rng,
                );
                log::debug!(
                    "Paddle hit: combo {} (x{:.1})",
                    paddle.combo_meter,
                    paddle.combo_multiplier()
                );
            }
        }
    }

    /// Award points on out-of-bounds exits, then relaunch
    fn handle_scoring(&mut self) {
        let width = self.config.width as f32;
        let left_out = self.ball.rect.left() <= 0.0;
        let right_out = self.ball.rect.right() >= width;
        if !left_out && !right_out {
            return;
        }

        if left_out {
            self.score[1] += 1;
        } else {
            self.score[0] += 1;
        }
        log::info!("Score: {} - {}", self.score[0], self.score[1]);

        let screen = self.screen();
        self.ball.reset(screen, &self.colors, &mut self.rng);
        self.player.combo_meter = 0;
        self.ai.combo_meter = 0;
    }

    /// Spawn, animate and collect power-ups
    fn handle_powerups(&mut self) {
        if self.rng.random_bool(POWERUP_SPAWN_CHANCE) {
            let pickup = PowerUp::spawn(self.screen(), &mut self.rng);
            log::debug!("Spawned {} pickup", pickup.kind.as_str());
            self.powerups.push(pickup);
        }

        let ball_rect = self.ball.rect;
        let mut collected = Vec::new();
        for (i, pickup) in self.powerups.iter_mut().enumerate() {
            pickup.update();
            if ball_rect.overlaps(&pickup.rect) {
                collected.push(i);
            }
        }

        for i in collected.into_iter().rev() {
            let pickup = self.powerups.remove(i);
            self.apply_powerup(&pickup);
            spawn_burst(
                &mut self.particles,
                self.ball.rect.center(),
                pickup.color,
                PICKUP_BURST,
                &mut self.rng,
            );
        }
    }

    fn apply_powerup(&mut self, pickup: &PowerUp) {
        log::info!("Collected {}", pickup.kind.as_str());
        match pickup.kind {
            PowerUpKind::TimeWarp => {
                self.time_factor = self.rng.random_range(0.5..1.5);
            }
            PowerUpKind::RealityBend => {
                self.reality_shift = self.rng.random_range(-0.2..0.2);
            }
            // Declared but not wired up yet; explicit no-ops so the gap
            // stays visible to maintainers.
            PowerUpKind::MultiBall
            | PowerUpKind::ElementalLock
            | PowerUpKind::PaddleGrowth
            | PowerUpKind::GravityShift
            | PowerUpKind::DimensionHop
            | PowerUpKind::QuantumTunneling => {}
        }
    }

    /// Spawn and animate rifts, retag the ball on contact
    ///
    /// Rifts persist indefinitely and the ball is not relocated; only its
    /// dimension tag changes.
    fn handle_rifts(&mut self) {
        if self.rng.random_bool(RIFT_SPAWN_CHANCE) {
            self.rifts.push(Rift::spawn(self.screen(), &mut self.rng));
            log::debug!("Rift opened ({} active)", self.rifts.len());
        }

        let ball_center = self.ball.rect.center();
        for rift in &mut self.rifts {
            rift.update(&mut self.rng);
            if rift.contains(ball_center) {
                self.ball.dimension = rift.destination;
                spawn_burst(
                    &mut self.particles,
                    ball_center,
                    rift.color,
                    RIFT_BURST,
                    &mut self.rng,
                );
            }
        }
    }
}

/// Push `count` particles at one point (collision/pickup/rift bursts)
fn spawn_burst(out: &mut Vec<Particle>, pos: Vec2, color: Color, count: usize, rng: &mut impl Rng) {
    for _ in 0..count {
        out.push(Particle::new(pos, color, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;

    fn state(seed: u64) -> GameState {
        GameState::new(seed, Config::default())
    }

    #[test]
    fn test_wall_bounce_inverts_dy_preserving_magnitude() {
        let mut s = state(1);
        // Heading for the top wall, horizontally clear of both paddles
        s.ball.rect.set_center(Vec2::new(400.0, 8.0));
        s.ball.vel = Vec2::new(0.0, -3.0);

        s.step(&FrameInput::default());
        assert_eq!(s.ball.vel.y, 3.0);
    }

    #[test]
    fn test_paddle_hit_combo_and_speed_ramp() {
        let mut s = state(2);
        s.player.combo_meter = 2;
        // Park the ball dead on the player paddle so it still overlaps
        // after this frame's movement
        s.ball.rect.set_center(s.player.rect.center());
        s.ball.vel = Vec2::ZERO;
        let particles_before = s.particles.len();

        s.step(&FrameInput::default());

        assert_eq!(s.player.combo_meter, 3);
        assert!((s.player.combo_multiplier() - 1.2).abs() < 1e-6);
        assert!(s.particles.len() >= particles_before + HIT_BURST);
    }

    #[test]
    fn test_paddle_hit_amplifies_horizontal_velocity() {
        let mut s = state(3);
        s.ball.rect.set_center(s.player.rect.center());
        s.ball.vel = Vec2::new(-5.0, 0.0);

        s.step(&FrameInput::default());
        // Ball drifted 5px left before the collision pass but still
        // overlaps the paddle; velocity is inverted and amplified
        assert!((s.ball.vel.x - 5.0 * PADDLE_BOOST).abs() < 1e-4);
    }

    #[test]
    fn test_left_exit_scores_right_and_resets() {
        let mut s = state(4);
        s.player.combo_meter = 5;
        s.ai.combo_meter = 2;
        s.ball.rect.pos = Vec2::new(-40.0, 300.0);
        s.ball.vel = Vec2::new(-1.0, 0.0);

        s.step(&FrameInput::default());

        assert_eq!(s.score, [0, 1]);
        assert_eq!(s.ball.rect.center(), s.screen() / 2.0);
        assert_eq!(s.ball.dimension, 0);
        assert_eq!(s.player.combo_meter, 0);
        assert_eq!(s.ai.combo_meter, 0);
    }

    #[test]
    fn test_right_exit_scores_left() {
        let mut s = state(5);
        s.ball.rect.pos = Vec2::new(s.config.width as f32 + 20.0, 300.0);
        s.ball.vel = Vec2::new(1.0, 0.0);

        s.step(&FrameInput::default());
        assert_eq!(s.score, [1, 0]);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut s = state(6);
        let mut last = s.score;
        for _ in 0..600 {
            s.step(&FrameInput::default());
            assert!(s.score[0] >= last[0] && s.score[1] >= last[1]);
            last = s.score;
        }
    }

    #[test]
    fn test_time_warp_sets_factor_in_range_and_applies() {
        let mut s = state(7);
        let mut pickup = PowerUp::spawn(s.screen(), &mut s.rng);
        pickup.kind = PowerUpKind::TimeWarp;
        // Oversized so the ball still overlaps after this frame's movement
        pickup.rect = Rect::from_center(s.ball.rect.center(), Vec2::splat(60.0));
        s.powerups.push(pickup);

        s.step(&FrameInput::default());

        assert!(s.powerups.is_empty());
        assert!((0.5..1.5).contains(&s.time_factor));

        // The factor scales the very next ball update
        let factor = s.time_factor;
        s.ball.rect.set_center(Vec2::new(300.0, 300.0));
        s.ball.vel = Vec2::new(4.0, 0.0);
        let x0 = s.ball.rect.pos.x;
        s.step(&FrameInput::default());
        assert!((s.ball.rect.pos.x - (x0 + 4.0 * factor)).abs() < 1e-3);
    }

    #[test]
    fn test_inert_pickups_change_nothing_observable() {
        let mut s = state(8);
        let mut pickup = PowerUp::spawn(s.screen(), &mut s.rng);
        pickup.kind = PowerUpKind::GravityShift;
        pickup.rect = Rect::from_center(s.ball.rect.center(), Vec2::splat(60.0));
        s.powerups.push(pickup);

        s.step(&FrameInput::default());

        assert!(s.powerups.is_empty());
        assert_eq!(s.time_factor, 1.0);
        assert_eq!(s.reality_shift, 0.0);
    }

    #[test]
    fn test_reality_bend_sets_shift_in_range() {
        let mut s = state(9);
        let mut pickup = PowerUp::spawn(s.screen(), &mut s.rng);
        pickup.kind = PowerUpKind::RealityBend;
        pickup.rect = Rect::from_center(s.ball.rect.center(), Vec2::splat(60.0));
        s.powerups.push(pickup);

        s.step(&FrameInput::default());
        assert!((-0.2..0.2).contains(&s.reality_shift));
    }

    #[test]
    fn test_rift_contact_retags_ball_but_persists() {
        let mut s = state(10);
        let mut rift = Rift::spawn(s.screen(), &mut s.rng);
        rift.destination = 2;
        rift.radius = 60.0;
        rift.center = s.ball.rect.center();
        s.rifts.push(rift);
        let particles_before = s.particles.len();

        s.step(&FrameInput::default());

        assert_eq!(s.ball.dimension, 2);
        assert_eq!(s.rifts.len(), 1);
        assert!(s.particles.len() >= particles_before + RIFT_BURST);
        // The ball is retagged, not teleported: still near where it was
        assert!(s.ball.rect.center().distance(s.rifts[0].center) < 20.0);
    }

    #[test]
    fn test_degenerate_config_file_survives_stepping() {
        // A hand-edited file can zero out entity dimensions; the sanitizer
        // must keep every spawn range non-empty
        let path = std::env::temp_dir().join("rift-pong-zero-paddle-config.json");
        std::fs::write(&path, r#"{"paddle_height": 0.0, "ball_size": 0.0}"#).unwrap();
        let config = Config::load(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);

        let mut s = GameState::new(11, config);
        for _ in 0..300 {
            s.step(&FrameInput::default());
        }
    }

    #[test]
    fn test_determinism_same_seed_same_trajectory() {
        let mut a = state(99);
        let mut b = state(99);

        let inputs = [
            FrameInput {
                up: true,
                ..Default::default()
            },
            FrameInput::default(),
            FrameInput {
                down: true,
                charge: true,
                ..Default::default()
            },
        ];

        for _ in 0..200 {
            for input in &inputs {
                a.step(input);
                b.step(input);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.ball.rect.pos, b.ball.rect.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.player.rect.pos, b.player.rect.pos);
        assert_eq!(a.powerups.len(), b.powerups.len());
        assert_eq!(a.rifts.len(), b.rifts.len());
    }
}
