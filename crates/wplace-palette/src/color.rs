//! Exact 24-bit RGB color type
//!
//! Palette matching is exact, so colors are kept as raw bytes. The lowercase
//! six-digit hex form doubles as the file stem of a color's glyph image.

use std::fmt;

/// An opaque 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Take the color channels of an RGBA pixel, ignoring alpha.
    ///
    /// # Example
    /// ```
    /// use wplace_palette::Rgb;
    /// let deep_red = Rgb::from_rgba([96, 0, 24, 255]);
    /// assert_eq!(deep_red.to_hex(), "600018");
    /// ```
    #[inline]
    pub const fn from_rgba(pixel: [u8; 4]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Fully opaque RGBA pixel of this color.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Lowercase six-digit hex without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
