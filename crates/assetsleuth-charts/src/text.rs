//! Bitmap text for chart titles and labels.
//!
//! Glyphs come from the 8x8 `font8x8` tables and are scaled by whole pixels,
//! so labels stay crisp at any size with no font file on disk. Characters
//! outside Basic Latin and Latin-1 render as `?`.
use crate::canvas::{Canvas, PixelRect};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::Rgba;

/// Glyph cell edge in unscaled pixels.
pub const GLYPH_SIZE: u32 = 8;

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale.max(1)
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE * scale.max(1)
}

/// Draw `text` with its top-left corner at (`x`, `y`).
pub fn draw_text(canvas: &mut Canvas, x: u32, y: u32, text: &str, color: Rgba<u8>, scale: u32) {
    let scale = scale.max(1);
    let mut gx = x;
    for c in text.chars() {
        for (row, bits) in glyph(c).iter().enumerate() {
            // Bit 0 is the leftmost column.
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) != 0 {
                    canvas.fill_rect(
                        PixelRect::new(gx + col * scale, y + row as u32 * scale, scale, scale),
                        color,
                    );
                }
            }
        }
        gx = gx.saturating_add(GLYPH_SIZE * scale);
    }
}

/// Draw `text` centred horizontally on `cx`.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    cx: u32,
    y: u32,
    text: &str,
    color: Rgba<u8>,
    scale: u32,
) {
    let x = cx.saturating_sub(text_width(text, scale) / 2);
    draw_text(canvas, x, y, text, color, scale);
}

/// Draw `text` so that it ends at `right`.
pub fn draw_text_right(
    canvas: &mut Canvas,
    right: u32,
    y: u32,
    text: &str,
    color: Rgba<u8>,
    scale: u32,
) {
    let x = right.saturating_sub(text_width(text, scale));
    draw_text(canvas, x, y, text, color, scale);
}

/// Largest scale in `1..=max_scale` at which `text` fits in `width` pixels.
pub fn fitting_scale(text: &str, width: u32, max_scale: u32) -> u32 {
    (1..=max_scale.max(1))
        .rev()
        .find(|&scale| text_width(text, scale) <= width)
        .unwrap_or(1)
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `..`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    out.push_str("..");
    out
}
