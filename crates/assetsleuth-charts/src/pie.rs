//! Distribution pie chart — share of total bytes per category.
//!
//! Slices start at twelve o'clock and run clockwise in report order
//! (largest first). The largest slice is pulled out from the centre, and a
//! soft drop shadow sits under the whole pie. Slices wide enough for it
//! carry their percentage; the legend on the right lists every category.
use crate::canvas::{smooth_edge, Canvas, PixelRect};
use crate::palette::{self, category_color, shade};
use crate::text::{draw_text, draw_text_centered, text_height};
use assetsleuth_core::model::Category;
use assetsleuth_core::report::Report;
use image::{Rgba, RgbaImage};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 800;
pub const TITLE: &str = "ASSET SIZE DISTRIBUTION BY TYPE";

/// Pie centre, left of the legend column.
const CX: f32 = 460.0;
const CY: f32 = 420.0;
const LEGEND_X: u32 = 840;
const LEGEND_Y: u32 = 160;
const LEGEND_ROW: u32 = 64;
const SWATCH: u32 = 28;
/// Narrower slices get no percentage label.
const MIN_LABEL_SPAN: f32 = 15.0;
/// Label distance from the slice centre, as a fraction of the radius.
const LABEL_RADIUS: f32 = 0.62;

/// Pull-out distance of the largest slice, as a fraction of the radius.
const EXPLODE: f32 = 0.1;
/// Angular width (degrees) of the darkened band at slice edges.
const EDGE_BAND: f32 = 1.5;
const SHADOW_OFFSET: f32 = 8.0;
const SHADOW: Rgba<u8> = Rgba([0x40, 0x40, 0x40, 0xff]);

/// One pie slice, angles in degrees clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub category: Category,
    pub percentage: f64,
    pub start: f32,
    pub end: f32,
    pub exploded: bool,
}

impl Slice {
    fn mid_angle(&self) -> f32 {
        (self.start + self.end) / 2.0
    }

    fn is_full_circle(&self) -> bool {
        self.end - self.start >= 359.999
    }

    fn contains(&self, angle: f32) -> bool {
        self.is_full_circle() || (angle >= self.start && angle < self.end)
    }

    /// Centre offset for this slice, in pixels.
    fn offset(&self, radius: f32) -> (f32, f32) {
        if !self.exploded {
            return (0.0, 0.0);
        }
        // Clockwise-from-top back to screen angle.
        let theta = (self.mid_angle() - 90.0).to_radians();
        (theta.cos() * radius * EXPLODE, theta.sin() * radius * EXPLODE)
    }

    /// 1 on the slice's straight edges, falling to 0 across `EDGE_BAND`.
    fn edge_factor(&self, angle: f32) -> f32 {
        if self.is_full_circle() {
            return 0.0;
        }
        let d = (angle - self.start).min(self.end - angle).max(0.0);
        (1.0 - d / EDGE_BAND).max(0.0)
    }
}

/// Compute slices from category byte totals. Empty when the total is zero.
pub fn slices(report: &Report) -> Vec<Slice> {
    let total = report.total_size_bytes;
    if total == 0 {
        return Vec::new();
    }

    // Categories are sorted largest first.
    let largest = report.categories.first().map(|c| c.category);
    let mut cursor = 0.0f64;
    report
        .categories
        .iter()
        .filter(|c| c.total_size_bytes > 0)
        .map(|c| {
            let start = cursor;
            cursor += c.total_size_bytes as f64 / total as f64 * 360.0;
            Slice {
                category: c.category,
                percentage: c.percentage,
                start: start as f32,
                end: cursor as f32,
                exploded: Some(c.category) == largest,
            }
        })
        .collect()
}

/// Render the pie, or `None` when there are no bytes to divide.
pub fn render_distribution(report: &Report) -> Option<RgbaImage> {
    let slices = slices(report);
    if slices.is_empty() {
        return None;
    }

    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette::BACKGROUND);
    let (cx, cy) = (CX, CY);
    let radius = HEIGHT as f32 * 0.38;

    let offsets: Vec<(f32, f32)> = slices.iter().map(|s| s.offset(radius)).collect();

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Shadow. ─────────────────────────────────────────
            let shadow = hit(
                &slices,
                &offsets,
                px - cx - SHADOW_OFFSET,
                py - cy - SHADOW_OFFSET,
                radius,
            );
            if let Some((_, dist, _)) = shadow {
                canvas.blend(x, y, SHADOW, smooth_edge(dist, radius) * 0.25);
            }

            // 2. Slice. ──────────────────────────────────────────
            if let Some((slice, dist, angle)) = hit(&slices, &offsets, px - cx, py - cy, radius) {
                let edge = slice.edge_factor(angle);
                let radial = 1.0 - 0.12 * (dist / radius);
                let color = shade(category_color(slice.category), (1.0 - 0.35 * edge) * radial);
                canvas.blend(x, y, color, smooth_edge(dist, radius));
            }
        }
    }

    for (slice, &(ox, oy)) in slices.iter().zip(&offsets) {
        if slice.end - slice.start < MIN_LABEL_SPAN {
            continue;
        }
        let theta = (slice.mid_angle() - 90.0).to_radians();
        let lx = cx + ox + theta.cos() * radius * LABEL_RADIUS;
        let ly = cy + oy + theta.sin() * radius * LABEL_RADIUS;
        draw_text_centered(
            &mut canvas,
            lx.max(0.0) as u32,
            (ly - text_height(2) as f32 / 2.0).max(0.0) as u32,
            &format!("{:.1}%", slice.percentage),
            palette::TEXT,
            2,
        );
    }

    draw_text_centered(&mut canvas, WIDTH / 2, 24, TITLE, palette::TEXT, 3);
    draw_legend(&mut canvas, report);
    Some(canvas.into_image())
}

/// One row per category: swatch, name and share, then count and size.
fn draw_legend(canvas: &mut Canvas, report: &Report) {
    for (i, summary) in report.categories.iter().enumerate() {
        let y = LEGEND_Y + LEGEND_ROW * i as u32;
        let swatch = PixelRect::new(LEGEND_X, y, SWATCH, SWATCH);
        canvas.fill_rect(swatch, category_color(summary.category));
        canvas.outline_rect(swatch, palette::OUTLINE, 1);

        let text_x = LEGEND_X + SWATCH + 12;
        let heading = format!(
            "{:<9}{:>6.1}%",
            summary.category.label().to_uppercase(),
            summary.percentage
        );
        draw_text(canvas, text_x, y, &heading, palette::TEXT, 2);
        let detail = format!("{} files, {:.2} MB", summary.count, summary.total_size_mb);
        draw_text(canvas, text_x, y + 20, &detail, palette::TEXT, 1);
    }
}

/// Find the slice covering the point (`dx`, `dy`) relative to the pie centre.
///
/// Returns the slice, the distance from its (possibly offset) centre, and
/// the clockwise-from-top angle.
fn hit<'a>(
    slices: &'a [Slice],
    offsets: &[(f32, f32)],
    dx: f32,
    dy: f32,
    radius: f32,
) -> Option<(&'a Slice, f32, f32)> {
    slices.iter().zip(offsets).find_map(|(slice, &(ox, oy))| {
        let sx = dx - ox;
        let sy = dy - oy;
        let dist = (sx * sx + sy * sy).sqrt();
        if dist >= radius + 1.5 {
            return None;
        }
        let angle = (sy.atan2(sx).to_degrees() + 90.0).rem_euclid(360.0);
        slice.contains(angle).then_some((slice, dist, angle))
    })
}
