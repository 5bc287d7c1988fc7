//! Tile expansion transforms.
//!
//! Every transform works in two steps. Source pixels are first placed on an
//! intermediate canvas whose edge is the source edge times the cell size, then
//! that canvas is resampled with nearest-neighbor to the fixed output size. No
//! step ever blends two pixels, so hard edges and fully transparent gaps
//! survive unchanged.

use wplace_palette::Palette;

use crate::error::ExpandError;
use crate::models::CanvasSpec;
use crate::rendering::raster::RasterImage;
use crate::rendering::symbol_table::SymbolTable;

/// Where a source pixel lands inside its `scale x scale` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Top-left corner of the cell
    Dense,
    /// One pixel in from the top-left corner, leaving a transparent border
    Bordered,
}

impl Placement {
    #[inline]
    pub fn offset(&self) -> u32 {
        match self {
            Placement::Dense => 0,
            Placement::Bordered => 1,
        }
    }

    /// Fail unless the offset lands inside a `scale`-pixel cell.
    pub fn check(&self, scale: u32) -> Result<(), ExpandError> {
        let offset = self.offset();
        if offset >= scale {
            return Err(ExpandError::InvalidPlacement { scale, offset });
        }
        Ok(())
    }
}

/// Size of the intermediate canvas for a source and cell size.
fn scaled_dims(src: &RasterImage, scale: u32) -> Result<(u32, u32), ExpandError> {
    let width = src.width().checked_mul(scale);
    let height = src.height().checked_mul(scale);
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ExpandError::CanvasTooLarge {
            width: src.width() as u64 * scale as u64,
            height: src.height() as u64 * scale as u64,
        }),
    }
}

/// Build the pre-resample canvas for a sparse transform.
///
/// Source pixel `(x, y)` is copied unchanged to
/// `(x * scale + offset, y * scale + offset)`; every other pixel is
/// `(0, 0, 0, 0)`.
pub fn place_sparse(
    src: &RasterImage,
    scale: u32,
    placement: Placement,
) -> Result<RasterImage, ExpandError> {
    placement.check(scale)?;
    let (width, height) = scaled_dims(src, scale)?;
    let offset = placement.offset();

    let mut canvas = RasterImage::new_transparent(width, height)?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            canvas.put_pixel(x * scale + offset, y * scale + offset, src.pixel(x, y));
        }
    }
    Ok(canvas)
}

/// Spread source pixels over `scale`-sized cells and resample to `canvas`.
pub fn expand_sparse(
    src: &RasterImage,
    scale: u32,
    placement: Placement,
    canvas: CanvasSpec,
) -> Result<RasterImage, ExpandError> {
    let placed = place_sparse(src, scale, placement)?;
    tracing::debug!(
        src_width = src.width(),
        src_height = src.height(),
        scale,
        offset = placement.offset(),
        intermediate = placed.width(),
        "Placed sparse canvas"
    );
    resize_nearest(placed, canvas.width(), canvas.height())
}

/// Build the pre-resample canvas for symbol substitution.
///
/// Each fully opaque source pixel whose color is a palette color gets that
/// color's glyph pasted at `(x * cell, y * cell)`. Pixels with partial alpha
/// or a color outside the palette leave their cell transparent. A palette
/// color the table holds no glyph for is an error.
pub fn place_symbols(
    src: &RasterImage,
    palette: &Palette,
    table: &SymbolTable,
) -> Result<RasterImage, ExpandError> {
    let cell = table.cell_size();
    let (width, height) = scaled_dims(src, cell)?;
    let mut canvas = RasterImage::new_transparent(width, height)?;

    let mut placed = 0usize;
    let mut skipped = 0usize;
    for (x, y, pixel) in src.opaque_pixels() {
        let Some(color) = palette.lookup_pixel(pixel).and_then(|e| e.color) else {
            skipped += 1;
            continue;
        };
        let glyph = table
            .glyph(color)
            .ok_or_else(|| table.missing_glyph(color))?;
        canvas.paste(glyph, x * cell, y * cell);
        placed += 1;
    }

    tracing::debug!(placed, skipped, cell, "Placed symbol canvas");
    Ok(canvas)
}

/// Replace palette pixels with their glyphs and resample to `canvas`.
pub fn expand_symbolic(
    src: &RasterImage,
    palette: &Palette,
    table: &SymbolTable,
    canvas: CanvasSpec,
) -> Result<RasterImage, ExpandError> {
    let placed = place_symbols(src, palette, table)?;
    resize_nearest(placed, canvas.width(), canvas.height())
}

/// Nearest-neighbor resample using pixel-center sampling.
///
/// Output pixel `X` reads source column `floor((2X + 1) * sw / (2 * w))`, and
/// likewise for rows. When `w` is an integer multiple `k` of `sw`, every
/// source pixel becomes an exact `k`-wide block starting at a multiple of `k`.
/// A source already at the target size is returned as is.
pub fn resize_nearest(
    src: RasterImage,
    width: u32,
    height: u32,
) -> Result<RasterImage, ExpandError> {
    if src.is_empty() {
        return Err(ExpandError::EmptyImage {
            width: src.width(),
            height: src.height(),
        });
    }
    if src.width() == width && src.height() == height {
        return Ok(src);
    }

    if width == 0 || height == 0 {
        return RasterImage::new_transparent(width, height);
    }

    // Column lookup is shared by every row
    let columns: Vec<u32> = (0..width)
        .map(|x| nearest_index(x, src.width(), width))
        .collect();

    let src_bytes = src.as_bytes();
    let src_stride = src.width() as usize * 4;
    let row_bytes = width as usize * 4;
    let mut data = Vec::with_capacity(row_bytes * height as usize);
    let mut last_sy = None;

    for y in 0..height {
        let sy = nearest_index(y, src.height(), height) as usize;
        if last_sy == Some(sy) {
            // Repeat of the previous output row
            let start = data.len() - row_bytes;
            data.extend_from_within(start..);
            continue;
        }
        let src_row = &src_bytes[sy * src_stride..(sy + 1) * src_stride];
        for &sx in &columns {
            let i = sx as usize * 4;
            data.extend_from_slice(&src_row[i..i + 4]);
        }
        last_sy = Some(sy);
    }

    RasterImage::from_rgba(width, height, data)
}

#[inline]
fn nearest_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    let idx = ((2 * dst as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    (idx as u32).min(src_len - 1)
}
