//! wplace-palette: the closed wplace color set
//!
//! The wplace canvas accepts 64 palette slots: one transparent slot and 63
//! opaque colors. Tile tooling needs to answer one question about a pixel,
//! namely which slot it paints, and the answer must be exact. This crate
//! holds that table and the hex naming used for glyph files.
//!
//! ```
//! use wplace_palette::{Palette, Rgb};
//!
//! let palette = Palette::wplace();
//! assert_eq!(palette.len(), 64);
//!
//! let entry = palette.lookup_pixel([0x60, 0x00, 0x18, 255]);
//! assert_eq!(entry.map(|e| e.name), Some("Deep Red"));
//! assert_eq!(Rgb::new(0x60, 0x00, 0x18).to_hex(), "600018");
//! ```

mod color;
mod palette;

pub use color::Rgb;
pub use palette::{Palette, PaletteEntry, WPLACE_COLORS, WPLACE_PALETTE_LEN};
