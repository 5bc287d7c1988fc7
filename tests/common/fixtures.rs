//! Test fixtures and constants.

use tile_expander::rendering::RasterImage;
use wplace_palette::Rgb;

/// Palette colors used across tests
pub mod colors {
    use wplace_palette::Rgb;

    pub const DEEP_RED: Rgb = Rgb::new(0x60, 0x00, 0x18);
    pub const BLUE: Rgb = Rgb::new(0x40, 0x93, 0xe4);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    /// Not a palette color
    pub const OFF_PALETTE: Rgb = Rgb::new(0x12, 0x34, 0x56);
}

/// A `cell x cell` glyph that is unique per color.
///
/// The anti-diagonal is fully transparent and the alpha of the remaining
/// pixels varies, so a paste that blends or drops alpha shows up as a
/// byte mismatch.
pub fn glyph(color: Rgb, cell: u32) -> RasterImage {
    let mut image = RasterImage::new_transparent(cell, cell).unwrap();
    for y in 0..cell {
        for x in 0..cell {
            if x + y == cell - 1 {
                continue;
            }
            let alpha = 255 - ((x * cell + y) % 5) as u8 * 30;
            image.put_pixel(x, y, [color.r, color.g ^ (x as u8), color.b ^ (y as u8), alpha]);
        }
    }
    image
}

/// A `width x height` source tile where every pixel is distinct and opaque.
pub fn gradient_tile(width: u32, height: u32) -> RasterImage {
    let mut image = RasterImage::new_transparent(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            image.put_pixel(x, y, [x as u8, y as u8, (x * y) as u8, 255]);
        }
    }
    image
}

/// A 2x2 tile with only the top-left pixel painted.
pub fn corner_tile(color: Rgb) -> RasterImage {
    let mut image = RasterImage::new_transparent(2, 2).unwrap();
    image.put_pixel(0, 0, color.to_rgba());
    image
}
