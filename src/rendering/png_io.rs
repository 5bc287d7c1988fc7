//! PNG decoding and encoding for RGBA8 rasters.
//!
//! Decoding accepts any PNG color type and bit depth and normalizes to RGBA8:
//! - 16-bit channels are stripped to 8 bits
//! - indexed images and tRNS chunks are expanded
//! - grayscale is replicated into R, G and B
//! - images without an alpha channel get alpha 255

use std::io::Cursor;
use std::path::Path;

use crate::error::ExpandError;
use crate::rendering::raster::RasterImage;

/// Decode PNG bytes to an RGBA8 raster.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage, ExpandError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| ExpandError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ExpandError::PngDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let rgba = to_rgba8(info.color_type, &buf, info.width, info.height, info.line_size)?;
    RasterImage::from_rgba(info.width, info.height, rgba)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RasterImage, ExpandError> {
    let bytes = std::fs::read(path).map_err(|source| ExpandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
        .map_err(|e| ExpandError::PngDecode(format!("{}: {}", path.display(), decode_message(&e))))
}

/// Encode an RGBA8 raster as PNG.
///
/// The encoder runs with fast settings. With `optimize`, the result is
/// recompressed by oxipng; if that fails the fast encoding is returned.
pub fn encode_png(image: &RasterImage, optimize: bool) -> Result<Vec<u8>, ExpandError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExpandError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_bytes())
            .map_err(|e| ExpandError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ExpandError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Recompressed PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "PNG recompression failed, keeping fast encoding");
            Ok(png_bytes)
        }
    }
}

/// Encode and write a PNG file, returning the number of bytes written.
pub fn write_png(path: &Path, image: &RasterImage, optimize: bool) -> Result<usize, ExpandError> {
    let bytes = encode_png(image, optimize)?;
    std::fs::write(path, &bytes).map_err(|source| ExpandError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}

fn decode_message(e: &ExpandError) -> String {
    match e {
        ExpandError::PngDecode(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Expand 8-bit decoder output of any color type into tightly packed RGBA8.
fn to_rgba8(
    color_type: png::ColorType,
    data: &[u8],
    width: u32,
    height: u32,
    line_size: usize,
) -> Result<Vec<u8>, ExpandError> {
    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        // EXPAND turns indexed data into RGB(A) before we see it
        png::ColorType::Indexed => {
            return Err(ExpandError::PngDecode(
                "indexed output after palette expansion".to_string(),
            ))
        }
    };

    let row_len = width as usize * channels;
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    for row in data.chunks(line_size).take(height as usize) {
        if row.len() < row_len {
            return Err(ExpandError::PngDecode("truncated image row".to_string()));
        }
        for px in row[..row_len].chunks_exact(channels) {
            match channels {
                1 => out.extend_from_slice(&[px[0], px[0], px[0], 255]),
                2 => out.extend_from_slice(&[px[0], px[0], px[0], px[1]]),
                3 => out.extend_from_slice(&[px[0], px[1], px[2], 255]),
                _ => out.extend_from_slice(px),
            }
        }
    }
    Ok(out)
}
