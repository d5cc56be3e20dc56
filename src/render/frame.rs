//! RGBA8 pixel buffer and the 2D primitives the game draws with
//!
//! Byte layout matches the window surface buffer, so presenting is a
//! single copy.

use glam::Vec2;

use crate::palette::Color;
use crate::sim::Rect;

/// Alpha blend a single channel: src over dst at `alpha`/255
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    ((src as u16 * alpha + dst as u16 * (255 - alpha)) / 255) as u8
}

/// Software frame buffer (RGBA8)
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Fill with a solid color
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = 255;
        }
    }

    /// Write one opaque pixel (clipped)
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let i = self.index(x as u32, y as u32);
            self.pixels[i] = color.r;
            self.pixels[i + 1] = color.g;
            self.pixels[i + 2] = color.b;
            self.pixels[i + 3] = 255;
        }
    }

    /// Alpha-blend one pixel over the existing content (clipped)
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Color, alpha: u8) {
        if self.in_bounds(x, y) {
            let i = self.index(x as u32, y as u32);
            let a = alpha as u16;
            self.pixels[i] = blend_channel(color.r, self.pixels[i], a);
            self.pixels[i + 1] = blend_channel(color.g, self.pixels[i + 1], a);
            self.pixels[i + 2] = blend_channel(color.b, self.pixels[i + 2], a);
            self.pixels[i + 3] = 255;
        }
    }

    /// Read one pixel, None when out of bounds (used by tests and the
    /// rotation blit)
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x as u32, y as u32);
        Some(Color::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
        ))
    }

    fn rect_span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        (
            rect.left().floor() as i32,
            rect.top().floor() as i32,
            rect.right().ceil() as i32,
            rect.bottom().ceil() as i32,
        )
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let (x0, y0, x1, y1) = self.rect_span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    /// One-pixel rectangle border, alpha-blended (glow layers)
    pub fn outline_rect(&mut self, rect: &Rect, color: Color, alpha: u8) {
        let (x0, y0, x1, y1) = self.rect_span(rect);
        for x in x0..x1 {
            self.blend(x, y0, color, alpha);
            self.blend(x, y1 - 1, color, alpha);
        }
        for y in y0..y1 {
            self.blend(x0, y, color, alpha);
            self.blend(x1 - 1, y, color, alpha);
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.blend_circle(center, radius, color, 255);
    }

    /// Filled circle with alpha (trail fading)
    pub fn blend_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: u8) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let (x0, y0) = ((center.x - radius) as i32, (center.y - radius) as i32);
        let (x1, y1) = (
            (center.x + radius).ceil() as i32,
            (center.y + radius).ceil() as i32,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    if alpha == 255 {
                        self.put(x, y, color);
                    } else {
                        self.blend(x, y, color, alpha);
                    }
                }
            }
        }
    }

    /// Ring of the given thickness, alpha-blended (rift rings)
    pub fn outline_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: u8,
        thickness: f32,
    ) {
        if radius <= 0.0 {
            return;
        }
        let outer2 = radius * radius;
        let inner = (radius - thickness).max(0.0);
        let inner2 = inner * inner;
        let (x0, y0) = ((center.x - radius) as i32, (center.y - radius) as i32);
        let (x1, y1) = (
            (center.x + radius).ceil() as i32,
            (center.y + radius).ceil() as i32,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d2 = dx * dx + dy * dy;
                if d2 <= outer2 && d2 >= inner2 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    pub fn fill_ellipse(&mut self, rect: &Rect, color: Color) {
        self.ellipse_impl(rect, color, 255, false);
    }

    /// One-pixel-ish ellipse border, alpha-blended (ball glow)
    pub fn outline_ellipse(&mut self, rect: &Rect, color: Color, alpha: u8) {
        self.ellipse_impl(rect, color, alpha, true);
    }

    fn ellipse_impl(&mut self, rect: &Rect, color: Color, alpha: u8, outline_only: bool) {
        let a = rect.size.x / 2.0;
        let b = rect.size.y / 2.0;
        if a <= 0.0 || b <= 0.0 {
            return;
        }
        let center = rect.center();
        let (x0, y0, x1, y1) = self.rect_span(rect);
        // Inner ellipse one pixel smaller on each axis bounds the border
        let ia = (a - 1.0).max(0.0);
        let ib = (b - 1.0).max(0.0);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = (x as f32 + 0.5 - center.x) / a;
                let dy = (y as f32 + 0.5 - center.y) / b;
                let v = dx * dx + dy * dy;
                if v > 1.0 {
                    continue;
                }
                if outline_only {
                    let idx = if ia > 0.0 {
                        (x as f32 + 0.5 - center.x) / ia
                    } else {
                        2.0
                    };
                    let idy = if ib > 0.0 {
                        (y as f32 + 0.5 - center.y) / ib
                    } else {
                        2.0
                    };
                    if idx * idx + idy * idy < 1.0 {
                        continue;
                    }
                    self.blend(x, y, color, alpha);
                } else if alpha == 255 {
                    self.put(x, y, color);
                } else {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    /// Shift one scanline horizontally; vacated pixels turn black
    pub fn scroll_row(&mut self, y: u32, dx: i32) {
        if y >= self.height || dx == 0 {
            return;
        }
        let row_start = self.index(0, y);
        let row_end = row_start + (self.width * 4) as usize;
        let row: Vec<u8> = self.pixels[row_start..row_end].to_vec();

        for x in 0..self.width as i32 {
            let src_x = x - dx;
            let dst = row_start + (x as usize) * 4;
            if src_x >= 0 && src_x < self.width as i32 {
                let src = (src_x as usize) * 4;
                self.pixels[dst..dst + 4].copy_from_slice(&row[src..src + 4]);
            } else {
                self.pixels[dst..dst + 3].fill(0);
                self.pixels[dst + 3] = 255;
            }
        }
    }

    /// Additively blend `src` rotated by `angle` radians around the frame
    /// center (kaleidoscope pass). Nearest-neighbor sampling.
    pub fn add_rotated(&mut self, src: &Frame, angle: f32) {
        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let (sin, cos) = angle.sin_cos();

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                // Inverse rotation: where this destination pixel samples from
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let sx = (cos * dx + sin * dy + cx) as i32;
                let sy = (-sin * dx + cos * dy + cy) as i32;

                if let Some(c) = src.get(sx, sy) {
                    let i = self.index(x as u32, y as u32);
                    self.pixels[i] = self.pixels[i].saturating_add(c.r);
                    self.pixels[i + 1] = self.pixels[i + 1].saturating_add(c.g);
                    self.pixels[i + 2] = self.pixels[i + 2].saturating_add(c.b);
                }
            }
        }
    }

    /// Copy into the presentation buffer (same RGBA8 layout)
    pub fn copy_to(&self, dest: &mut [u8]) {
        dest.copy_from_slice(&self.pixels);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
