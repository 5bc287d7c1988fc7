//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;
use tile_expander::rendering::{png_io, RasterImage};

/// Assert the file is a PNG and decode it
pub fn read_png(path: &Path) -> RasterImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected {} to exist: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    png_io::decode_png(&bytes).expect("Output should decode")
}

/// Assert the image is `size x size`
pub fn assert_square(image: &RasterImage, size: u32) {
    assert_eq!(
        (image.width(), image.height()),
        (size, size),
        "Expected {size}x{size} output"
    );
}

/// Assert every pixel of a `k x k` output block equals `expected`
pub fn assert_block(image: &RasterImage, bx: u32, by: u32, k: u32, expected: [u8; 4]) {
    for y in by * k..(by + 1) * k {
        for x in bx * k..(bx + 1) * k {
            assert_eq!(image.pixel(x, y), expected, "block ({bx}, {by}) at pixel ({x}, {y})");
        }
    }
}
