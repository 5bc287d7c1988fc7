//! The wplace palette and exact color lookup.
//!
//! Unlike a dithering palette there is no nearest-color search here: a pixel
//! either carries one of the palette's RGB values exactly or it is not a
//! palette pixel at all.

use std::collections::HashMap;

use crate::color::Rgb;

/// One palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Position in the palette, 0 for transparent
    pub id: u8,
    /// Display name as shown in the color picker
    pub name: &'static str,
    /// RGB value; `None` for the transparent slot, which is matched by alpha
    pub color: Option<Rgb>,
}

impl PaletteEntry {
    const fn opaque(id: u8, name: &'static str, hex: u32) -> Self {
        Self {
            id,
            name,
            color: Some(Rgb::new(
                ((hex >> 16) & 0xff) as u8,
                ((hex >> 8) & 0xff) as u8,
                (hex & 0xff) as u8,
            )),
        }
    }
}

/// Number of slots in the wplace palette, transparent included.
pub const WPLACE_PALETTE_LEN: usize = 64;

/// The wplace palette in picker order.
pub const WPLACE_COLORS: [PaletteEntry; WPLACE_PALETTE_LEN] = [
    PaletteEntry {
        id: 0,
        name: "Transparent",
        color: None,
    },
    PaletteEntry::opaque(1, "Black", 0x000000),
    PaletteEntry::opaque(2, "Dark Gray", 0x3c3c3c),
    PaletteEntry::opaque(3, "Gray", 0x787878),
    PaletteEntry::opaque(4, "Medium Gray", 0xaaaaaa),
    PaletteEntry::opaque(5, "Light Gray", 0xd2d2d2),
    PaletteEntry::opaque(6, "White", 0xffffff),
    PaletteEntry::opaque(7, "Deep Red", 0x600018),
    PaletteEntry::opaque(8, "Dark Red", 0xa50e1e),
    PaletteEntry::opaque(9, "Red", 0xed1c24),
    PaletteEntry::opaque(10, "Light Red", 0xfa8072),
    PaletteEntry::opaque(11, "Dark Orange", 0xe45c1a),
    PaletteEntry::opaque(12, "Orange", 0xff7f27),
    PaletteEntry::opaque(13, "Gold", 0xf6aa09),
    PaletteEntry::opaque(14, "Yellow", 0xf9dd3b),
    PaletteEntry::opaque(15, "Light Yellow", 0xfffabc),
    PaletteEntry::opaque(16, "Dark Goldenrod", 0x9c8431),
    PaletteEntry::opaque(17, "Goldenrod", 0xc5ad31),
    PaletteEntry::opaque(18, "Light Goldenrod", 0xe8d45f),
    PaletteEntry::opaque(19, "Dark Olive", 0x4a6b3a),
    PaletteEntry::opaque(20, "Olive", 0x5a944a),
    PaletteEntry::opaque(21, "Light Olive", 0x84c573),
    PaletteEntry::opaque(22, "Dark Green", 0x0eb968),
    PaletteEntry::opaque(23, "Green", 0x13e67b),
    PaletteEntry::opaque(24, "Light Green", 0x87ff5e),
    PaletteEntry::opaque(25, "Dark Teal", 0x0c816e),
    PaletteEntry::opaque(26, "Teal", 0x10aea6),
    PaletteEntry::opaque(27, "Light Teal", 0x13e1be),
    PaletteEntry::opaque(28, "Dark Cyan", 0x0f799f),
    PaletteEntry::opaque(29, "Cyan", 0x60f7f2),
    PaletteEntry::opaque(30, "Light Cyan", 0xbbfaf2),
    PaletteEntry::opaque(31, "Dark Blue", 0x28509e),
    PaletteEntry::opaque(32, "Blue", 0x4093e4),
    PaletteEntry::opaque(33, "Light Blue", 0x7dc7ff),
    PaletteEntry::opaque(34, "Dark Indigo", 0x4d31b8),
    PaletteEntry::opaque(35, "Indigo", 0x6b50f6),
    PaletteEntry::opaque(36, "Light Indigo", 0x99b1fb),
    PaletteEntry::opaque(37, "Dark Slate Blue", 0x4a4284),
    PaletteEntry::opaque(38, "Slate Blue", 0x7a71c4),
    PaletteEntry::opaque(39, "Light Slate Blue", 0xb5aef1),
    PaletteEntry::opaque(40, "Dark Purple", 0x780c99),
    PaletteEntry::opaque(41, "Purple", 0xaa38b9),
    PaletteEntry::opaque(42, "Light Purple", 0xe09ff9),
    PaletteEntry::opaque(43, "Dark Pink", 0xcb007a),
    PaletteEntry::opaque(44, "Pink", 0xec1f80),
    PaletteEntry::opaque(45, "Light Pink", 0xf38da9),
    PaletteEntry::opaque(46, "Dark Peach", 0x9b5249),
    PaletteEntry::opaque(47, "Peach", 0xd18078),
    PaletteEntry::opaque(48, "Light Peach", 0xfab6a4),
    PaletteEntry::opaque(49, "Dark Brown", 0x684634),
    PaletteEntry::opaque(50, "Brown", 0x95682a),
    PaletteEntry::opaque(51, "Light Brown", 0xdba463),
    PaletteEntry::opaque(52, "Dark Tan", 0x7b6352),
    PaletteEntry::opaque(53, "Tan", 0x9c846b),
    PaletteEntry::opaque(54, "Light Tan", 0xd6b594),
    PaletteEntry::opaque(55, "Dark Beige", 0xd18051),
    PaletteEntry::opaque(56, "Beige", 0xf8b277),
    PaletteEntry::opaque(57, "Light Beige", 0xffc5a5),
    PaletteEntry::opaque(58, "Dark Stone", 0x6d643f),
    PaletteEntry::opaque(59, "Stone", 0x948c6b),
    PaletteEntry::opaque(60, "Light Stone", 0xcdc59e),
    PaletteEntry::opaque(61, "Dark Slate", 0x333941),
    PaletteEntry::opaque(62, "Slate", 0x6d758d),
    PaletteEntry::opaque(63, "Light Slate", 0xb3b9d1),
];

/// A closed set of named colors with exact RGB lookup.
///
/// # Example
///
/// ```
/// use wplace_palette::{Palette, Rgb};
///
/// let palette = Palette::wplace();
/// let entry = palette.lookup(Rgb::new(96, 0, 24)).unwrap();
/// assert_eq!(entry.name, "Deep Red");
/// assert!(palette.lookup(Rgb::new(1, 2, 3)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_color: HashMap<Rgb, usize>,
}

impl Palette {
    /// The 64-slot wplace palette.
    pub fn wplace() -> Self {
        let by_color = WPLACE_COLORS
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.color.map(|c| (c, i)))
            .collect();
        Self {
            entries: WPLACE_COLORS.to_vec(),
            by_color,
        }
    }

    /// Number of slots, transparent included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for the wplace palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slots that carry an RGB value, in palette order.
    pub fn opaque_colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().filter_map(|e| e.color)
    }

    /// Exact RGB match.
    pub fn lookup(&self, color: Rgb) -> Option<&PaletteEntry> {
        self.by_color.get(&color).map(|&i| &self.entries[i])
    }

    /// True if `color` is one of the palette's RGB values.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.by_color.contains_key(&color)
    }

    /// Match an RGBA pixel. Only fully opaque pixels can match an opaque slot.
    pub fn lookup_pixel(&self, pixel: [u8; 4]) -> Option<&PaletteEntry> {
        if pixel[3] != 255 {
            return None;
        }
        self.lookup(Rgb::from_rgba(pixel))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::wplace()
    }
}
