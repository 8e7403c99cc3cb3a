//! Chart colours.
//!
//! Category colours are fixed so a category looks the same in every chart.
use assetsleuth_core::model::Category;
use image::Rgba;

pub const BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const OUTLINE: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
pub const GRID: Rgba<u8> = Rgba([0x80, 0x80, 0x80, 0xff]);
pub const AXIS: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xff]);
pub const TEXT: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);

pub fn category_color(category: Category) -> Rgba<u8> {
    match category {
        Category::Prefabs => Rgba([0xff, 0x6b, 0x6b, 0xff]),
        Category::Scenes => Rgba([0x4e, 0xcd, 0xc4, 0xff]),
        Category::Meshes => Rgba([0x45, 0xb7, 0xd1, 0xff]),
        Category::Textures => Rgba([0xff, 0xa0, 0x7a, 0xff]),
        Category::Materials => Rgba([0x98, 0xd8, 0xc8, 0xff]),
        Category::Audio => Rgba([0xf7, 0xdc, 0x6f, 0xff]),
        Category::Scripts => Rgba([0xbb, 0x8f, 0xce, 0xff]),
        Category::Other => Rgba([0x99, 0x99, 0x99, 0xff]),
    }
}

/// Scale the RGB channels of `color` by `factor`, keeping alpha.
pub fn shade(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}
