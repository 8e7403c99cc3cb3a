//! Bar charts — category totals and the largest individual assets.
//!
//! Both charts are titled and annotated: axis ticks in MB, the value of
//! every bar, category names under the vertical bars and file names beside
//! the horizontal ones.
use crate::canvas::{Canvas, PixelRect};
use crate::palette::{self, category_color};
use crate::ranking::{top_assets, TOP_ASSETS_LEN};
use crate::text::{
    draw_text, draw_text_centered, draw_text_right, fitting_scale, text_height, truncate,
    GLYPH_SIZE,
};
use assetsleuth_core::model::size;
use assetsleuth_core::report::Report;
use image::RgbaImage;

/// Plot-area margins: left, top, right, bottom.
pub type Margins = (u32, u32, u32, u32);

const GRID_LINES: u32 = 5;
const GRID_ALPHA: f32 = 0.3;
const DASH: u32 = 6;
const TITLE_Y: u32 = 24;

fn plot_area(width: u32, height: u32, margins: Margins) -> PixelRect {
    let (left, top, right, bottom) = margins;
    PixelRect::new(
        left,
        top,
        width.saturating_sub(left + right),
        height.saturating_sub(top + bottom),
    )
}

/// Length in pixels of a bar for `value` on an axis of `extent` pixels.
pub fn scaled(value: u64, max: u64, extent: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (value as f64 / max as f64 * extent as f64).round() as u32
}

/// Axis label for grid line `i` of [`GRID_LINES`] on an axis topping out at `max` bytes.
fn tick_label(max: u64, i: u32) -> String {
    format!("{:.2}", size::mb(max * i as u64 / GRID_LINES as u64))
}

fn draw_axes(canvas: &mut Canvas, plot: PixelRect) {
    canvas.fill_rect(PixelRect::new(plot.x, plot.y, 2, plot.height), palette::AXIS);
    canvas.fill_rect(
        PixelRect::new(plot.x, plot.bottom().saturating_sub(2), plot.width, 2),
        palette::AXIS,
    );
}

pub mod comparison {
    pub const WIDTH: u32 = 1200;
    pub const HEIGHT: u32 = 600;
    pub const MARGINS: super::Margins = (90, 80, 40, 70);
    pub const TITLE: &str = "TOTAL SIZE BY ASSET TYPE (MB)";
}

/// Vertical bars of category totals, largest first.
pub fn render_type_comparison(report: &Report) -> RgbaImage {
    use comparison::{HEIGHT, MARGINS, TITLE, WIDTH};

    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette::BACKGROUND);
    let plot = plot_area(WIDTH, HEIGHT, MARGINS);
    let max = report
        .categories
        .iter()
        .map(|c| c.total_size_bytes)
        .max()
        .unwrap_or(0);

    for i in 0..=GRID_LINES {
        let y = plot.bottom() - plot.height * i / GRID_LINES;
        if i > 0 {
            canvas.dashed_hline(y, plot.x, plot.right(), palette::GRID, GRID_ALPHA, DASH);
        }
        draw_text_right(
            &mut canvas,
            plot.x - 8,
            y.saturating_sub(GLYPH_SIZE / 2),
            &tick_label(max, i),
            palette::TEXT,
            1,
        );
    }

    let count = report.categories.len() as u32;
    if count > 0 {
        let slot = plot.width / count;
        let bar_width = (slot * 7 / 10).max(1);

        for (i, summary) in report.categories.iter().enumerate() {
            let height = scaled(summary.total_size_bytes, max, plot.height);
            let bar = PixelRect::new(
                plot.x + slot * i as u32 + (slot - bar_width) / 2,
                plot.bottom() - height,
                bar_width,
                height,
            );
            canvas.fill_rect(bar, category_color(summary.category));
            canvas.outline_rect(bar, palette::OUTLINE, 2);

            let centre = plot.x + slot * i as u32 + slot / 2;
            let value = format!("{:.2} MB", summary.total_size_mb);
            let scale = fitting_scale(&value, slot, 2);
            draw_text_centered(
                &mut canvas,
                centre,
                bar.y.saturating_sub(text_height(scale) + 6),
                &value,
                palette::TEXT,
                scale,
            );

            let name = summary.category.label().to_uppercase();
            let scale = fitting_scale(&name, slot, 2);
            let name_y = plot.bottom() + 10;
            draw_text_centered(&mut canvas, centre, name_y, &name, palette::TEXT, scale);
            draw_text_centered(
                &mut canvas,
                centre,
                name_y + text_height(scale) + 6,
                &format!("{} files", summary.count),
                palette::TEXT,
                1,
            );
        }
    }

    draw_text_centered(&mut canvas, WIDTH / 2, TITLE_Y, TITLE, palette::TEXT, 3);
    draw_axes(&mut canvas, plot);
    canvas.into_image()
}

pub mod top {
    pub const WIDTH: u32 = 1400;
    pub const HEIGHT: u32 = 1000;
    pub const MARGINS: super::Margins = (340, 80, 130, 50);
    pub const TITLE: &str = "TOP 20 LARGEST ASSETS (MB)";
    /// File names longer than this are shortened.
    pub const NAME_CHARS: usize = 40;
}

/// Horizontal bars of the largest assets across categories, largest on top.
///
/// Returns `None` when no category has a leaderboard entry.
pub fn render_top_assets(report: &Report) -> Option<RgbaImage> {
    use top::{HEIGHT, MARGINS, NAME_CHARS, TITLE, WIDTH};

    let ranked = top_assets(report, TOP_ASSETS_LEN);
    let max = ranked.first()?.size_bytes;

    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette::BACKGROUND);
    let plot = plot_area(WIDTH, HEIGHT, MARGINS);

    for i in 0..=GRID_LINES {
        let x = plot.x + plot.width * i / GRID_LINES;
        if i > 0 {
            canvas.dashed_vline(x, plot.y, plot.bottom(), palette::GRID, GRID_ALPHA, DASH);
        }
        draw_text_centered(
            &mut canvas,
            x,
            plot.bottom() + 8,
            &tick_label(max, i),
            palette::TEXT,
            1,
        );
    }

    let slot = plot.height / ranked.len() as u32;
    let bar_height = (slot * 8 / 10).max(1);
    for (i, asset) in ranked.iter().enumerate() {
        let bar = PixelRect::new(
            plot.x,
            plot.y + slot * i as u32 + (slot - bar_height) / 2,
            scaled(asset.size_bytes, max, plot.width),
            bar_height,
        );
        canvas.fill_rect(bar, category_color(asset.category));
        canvas.outline_rect(bar, palette::OUTLINE, 1);

        let label_y = (bar.y + bar_height / 2).saturating_sub(GLYPH_SIZE / 2);
        draw_text_right(
            &mut canvas,
            plot.x - 8,
            label_y,
            &truncate(&asset.name, NAME_CHARS),
            palette::TEXT,
            1,
        );
        draw_text(
            &mut canvas,
            bar.right() + 6,
            label_y,
            &format!("{:.2} MB", asset.size_mb),
            palette::TEXT,
            1,
        );
    }

    draw_text_centered(&mut canvas, WIDTH / 2, TITLE_Y, TITLE, palette::TEXT, 3);
    draw_axes(&mut canvas, plot);
    Some(canvas.into_image())
}
