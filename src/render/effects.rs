//! Full-frame post-processing: wave distortion and the kaleidoscope pass
//!
//! These run after the scene is drawn and before the HUD, so the score
//! stays readable while the playfield warps.

use rand::Rng;

use super::frame::Frame;

/// Per-frame chance of toggling the kaleidoscope on or off
const KALEIDOSCOPE_TOGGLE_CHANCE: f64 = 0.0005;
/// Rotation steps the kaleidoscope picks between when it switches on
const KALEIDOSCOPE_STEPS: [u32; 2] = [45, 90];
/// Peak horizontal displacement of a scanline, in pixels
const WAVE_DEPTH: f32 = 5.0;
/// Vertical frequency of the wave across scanlines
const WAVE_FREQUENCY: f32 = 0.1;

/// Cosmetic frame-warping state. Lives outside the simulation and draws
/// from its own RNG so toggling effects never changes gameplay.
#[derive(Debug, Default)]
pub struct VisualEffects {
    /// Current wave phase, fed by elapsed wall-clock time
    pub wave_distortion: f32,
    pub kaleidoscope: bool,
    /// Degrees between rotated copies; 0 while the effect is off
    pub kaleidoscope_step: u32,
}

impl VisualEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the effect state for one frame
    pub fn update(&mut self, elapsed_secs: f32, rng: &mut impl Rng) {
        self.wave_distortion = elapsed_secs.sin() * 2.0;
        if rng.random_bool(KALEIDOSCOPE_TOGGLE_CHANCE) {
            self.kaleidoscope = !self.kaleidoscope;
            self.kaleidoscope_step = if self.kaleidoscope {
                KALEIDOSCOPE_STEPS[rng.random_range(0..KALEIDOSCOPE_STEPS.len())]
            } else {
                0
            };
            log::debug!(
                "kaleidoscope {} (step {} deg)",
                if self.kaleidoscope { "on" } else { "off" },
                self.kaleidoscope_step
            );
        }
    }

    /// Apply the active effects to a finished scene frame
    pub fn apply(&self, frame: &mut Frame) {
        if self.wave_distortion != 0.0 {
            for y in 0..frame.height() {
                let offset =
                    ((y as f32 * WAVE_FREQUENCY + self.wave_distortion).sin() * WAVE_DEPTH) as i32;
                frame.scroll_row(y, offset);
            }
        }

        if self.kaleidoscope && self.kaleidoscope_step > 0 {
            let base = frame.clone();
            let mut angle_deg = self.kaleidoscope_step;
            while angle_deg < 360 {
                frame.add_rotated(&base, (angle_deg as f32).to_radians());
                angle_deg += self.kaleidoscope_step;
            }
        }
    }
}
