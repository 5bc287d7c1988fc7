use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Missing symbol glyph for {color} (expected {path})")]
    MissingGlyph { color: String, path: PathBuf },

    #[error("Glyph for {color} is {width}x{height}, expected {cell}x{cell}")]
    GlyphSize {
        color: String,
        width: u32,
        height: u32,
        cell: u32,
    },

    #[error("Color {0} is not in the palette")]
    NotInPalette(String),

    #[error("Unsupported canvas size: {0}")]
    UnsupportedSize(u32),

    #[error("Invalid placement: offset {offset} does not fit a {scale}px cell")]
    InvalidPlacement { scale: u32, offset: u32 },

    #[error("Invalid symbol cell size: {0}px (must be at least 1)")]
    InvalidCellSize(u32),

    #[error("Canvas too large: {width}x{height}")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("Region {width}x{height} at ({x}, {y}) lies outside the image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, {width}x{height} RGBA needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
