//! Minimal raster canvas over an `image::RgbaImage`.
//!
//! Everything is drawn with per-pixel coverage blending; shapes outside the
//! image bounds are clipped silently.
use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blend `color` over the pixel at (`x`, `y`) with the given coverage.
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0) * (color.0[3] as f32 / 255.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        for channel in 0..3 {
            dst.0[channel] = lerp_channel(dst.0[channel], color.0[channel], alpha);
        }
        dst.0[3] = dst.0[3].max((alpha * 255.0) as u8);
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba<u8>) {
        for y in rect.y..rect.bottom().min(self.height()) {
            for x in rect.x..rect.right().min(self.width()) {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    /// Draw a border of `thickness` pixels just inside `rect`.
    pub fn outline_rect(&mut self, rect: PixelRect, color: Rgba<u8>, thickness: u32) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let t = thickness.min(rect.width).min(rect.height);
        self.fill_rect(PixelRect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(
            PixelRect::new(rect.x, rect.bottom() - t, rect.width, t),
            color,
        );
        self.fill_rect(PixelRect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(
            PixelRect::new(rect.right() - t, rect.y, t, rect.height),
            color,
        );
    }

    /// Horizontal dashed line at `y` from `x0` to `x1`.
    pub fn dashed_hline(&mut self, y: u32, x0: u32, x1: u32, color: Rgba<u8>, alpha: f32, dash: u32) {
        let dash = dash.max(1);
        for x in x0..x1 {
            if ((x - x0) / dash) % 2 == 0 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    /// Vertical dashed line at `x` from `y0` to `y1`.
    pub fn dashed_vline(&mut self, x: u32, y0: u32, y1: u32, color: Rgba<u8>, alpha: f32, dash: u32) {
        let dash = dash.max(1);
        for y in y0..y1 {
            if ((y - y0) / dash) % 2 == 0 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
pub fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Linear interpolation for a single colour channel.
pub fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
