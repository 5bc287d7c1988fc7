//! Glyph lookup for symbol substitution.
//!
//! Glyphs live on disk as `<hex>.png` (lowercase, no `#`), one per opaque
//! palette color, each exactly `cell_size x cell_size` pixels.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use wplace_palette::{Palette, Rgb};

use crate::error::ExpandError;
use crate::rendering::png_io;
use crate::rendering::raster::RasterImage;

/// Mapping from palette color to its glyph image
#[derive(Debug, Clone)]
pub struct SymbolTable {
    cell_size: u32,
    dir: Option<PathBuf>,
    glyphs: HashMap<Rgb, RasterImage>,
}

impl SymbolTable {
    /// Load a glyph for every opaque color in `palette`.
    pub fn load(dir: &Path, cell_size: u32, palette: &Palette) -> Result<Self, ExpandError> {
        Self::load_for(dir, cell_size, palette, palette.opaque_colors())
    }

    /// Load glyphs for just the given colors.
    ///
    /// Colors outside `palette` are ignored since substitution never asks for
    /// them. Duplicates are loaded once.
    pub fn load_for(
        dir: &Path,
        cell_size: u32,
        palette: &Palette,
        colors: impl IntoIterator<Item = Rgb>,
    ) -> Result<Self, ExpandError> {
        let mut glyphs = HashMap::new();
        for color in colors {
            if !palette.contains(color) || glyphs.contains_key(&color) {
                continue;
            }
            let path = Self::glyph_path(dir, color);
            if !path.is_file() {
                return Err(ExpandError::MissingGlyph {
                    color: color.to_string(),
                    path,
                });
            }
            let glyph = png_io::read_png(&path)?;
            check_size(color, &glyph, cell_size)?;
            tracing::trace!(%color, path = %path.display(), "Loaded glyph");
            glyphs.insert(color, glyph);
        }

        tracing::debug!(
            dir = %dir.display(),
            glyphs = glyphs.len(),
            cell_size,
            "Loaded symbol table"
        );

        Ok(Self {
            cell_size,
            dir: Some(dir.to_path_buf()),
            glyphs,
        })
    }

    /// Build a table from in-memory glyphs.
    pub fn from_glyphs(
        cell_size: u32,
        glyphs: impl IntoIterator<Item = (Rgb, RasterImage)>,
    ) -> Result<Self, ExpandError> {
        let palette = Palette::wplace();
        let mut map = HashMap::new();
        for (color, glyph) in glyphs {
            if !palette.contains(color) {
                return Err(ExpandError::NotInPalette(color.to_string()));
            }
            check_size(color, &glyph, cell_size)?;
            map.insert(color, glyph);
        }
        Ok(Self {
            cell_size,
            dir: None,
            glyphs: map,
        })
    }

    /// `<dir>/<hex>.png`
    pub fn glyph_path(dir: &Path, color: Rgb) -> PathBuf {
        dir.join(format!("{}.png", color.to_hex()))
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, color: Rgb) -> Option<&RasterImage> {
        self.glyphs.get(&color)
    }

    /// Error for a color this table has no glyph for.
    pub(crate) fn missing_glyph(&self, color: Rgb) -> ExpandError {
        let path = match &self.dir {
            Some(dir) => Self::glyph_path(dir, color),
            None => PathBuf::from(format!("{}.png", color.to_hex())),
        };
        ExpandError::MissingGlyph {
            color: color.to_string(),
            path,
        }
    }
}

fn check_size(color: Rgb, glyph: &RasterImage, cell: u32) -> Result<(), ExpandError> {
    if glyph.width() != cell || glyph.height() != cell {
        return Err(ExpandError::GlyphSize {
            color: color.to_string(),
            width: glyph.width(),
            height: glyph.height(),
            cell,
        });
    }
    Ok(())
}
