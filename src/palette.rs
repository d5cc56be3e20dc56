//! Element colors and the hue-cycling palette
//!
//! Every entity carries an element tag ("Fire", "Water", ...) that is only
//! a key into this palette. The palette rotates all hues in lockstep, so
//! the whole scene slowly drifts through the spectrum.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::HUE_STEP;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random bright color: each channel in [100, 255] so entities pop
    /// against the black background
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random_range(100..=255),
            g: rng.random_range(100..=255),
            b: rng.random_range(100..=255),
        }
    }

    /// Hue component in [0, 1)
    pub fn hue(self) -> f32 {
        rgb_to_hsv(self).0
    }

    /// Return this color with its hue rotated by `shift` (mod 1.0),
    /// saturation and value preserved
    pub fn rotate_hue(self, shift: f32) -> Self {
        let (h, s, v) = rgb_to_hsv(self);
        hsv_to_rgb((h + shift).rem_euclid(1.0), s, v)
    }
}

/// RGB -> HSV, all components in [0, 1]
fn rgb_to_hsv(c: Color) -> (f32, f32, f32) {
    let r = c.r as f32 / 255.0;
    let g = c.g as f32 / 255.0;
    let b = c.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (((g - b) / delta).rem_euclid(6.0)) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

/// HSV -> RGB, hue wraps modulo 1.0
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let h = h.rem_euclid(1.0) * 6.0;
    let i = h.floor();
    let f = h - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Hue-cycling color source for all element tags
///
/// Each element keeps a fixed random base color; `get` applies the current
/// global hue shift to that base. Deriving from the base (instead of
/// mutating stored colors) keeps the shift exact: after N updates every
/// hue has advanced by exactly N * [`HUE_STEP`] modulo 1.0.
#[derive(Debug, Clone)]
pub struct ColorCycler {
    shift: f32,
    base: Vec<(String, Color)>,
}

impl ColorCycler {
    pub fn new(catalog: &[String], rng: &mut impl Rng) -> Self {
        Self {
            shift: 0.0,
            base: catalog
                .iter()
                .map(|name| (name.clone(), Color::random(rng)))
                .collect(),
        }
    }

    /// Advance the global hue shift by one frame's worth
    pub fn update(&mut self) {
        self.shift = (self.shift + HUE_STEP).rem_euclid(1.0);
    }

    pub fn shift(&self) -> f32 {
        self.shift
    }

    /// Current color for an element tag; unknown tags render white
    pub fn get(&self, element: &str) -> Color {
        self.base
            .iter()
            .find(|(name, _)| name == element)
            .map(|(_, color)| color.rotate_hue(self.shift))
            .unwrap_or(Color::WHITE)
    }

    /// Pick a random element tag from the catalog
    pub fn pick_element(&self, rng: &mut impl Rng) -> String {
        self.base
            .choose(rng)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }
}
