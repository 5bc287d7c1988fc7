use std::path::{Path, PathBuf};

use wplace_palette::{Palette, Rgb};

use crate::error::ExpandError;
use crate::models::{CanvasSpec, ExpandConfig, ExpandMode};
use crate::rendering::{self, png_io, Placement, RasterImage, SymbolTable};

/// Suffix of the source tile next to the outputs
pub const SOURCE_SUFFIX: &str = "_orig.png";

/// Suffix of the symbol overlay
pub const SYMBOL_SUFFIX: &str = "_sym.png";

/// One file written by a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTile {
    pub path: PathBuf,
    pub size: u32,
    pub bytes: usize,
}

/// Result from running the tile pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub source: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub outputs: Vec<WrittenTile>,
}

/// Pipeline that orchestrates load → transform → resample → save for one tile
pub struct TilePipeline {
    config: ExpandConfig,
    palette: Palette,
}

impl TilePipeline {
    pub fn new(config: ExpandConfig) -> Result<Self, ExpandError> {
        config.validate()?;
        Ok(Self {
            config,
            palette: Palette::wplace(),
        })
    }

    /// `<prefix>_orig.png`
    pub fn source_path(prefix: &Path) -> PathBuf {
        with_suffix(prefix, SOURCE_SUFFIX)
    }

    /// `<prefix>.png`
    pub fn overlay_path(prefix: &Path) -> PathBuf {
        with_suffix(prefix, ".png")
    }

    /// `<prefix>_sym.png`
    pub fn symbol_path(prefix: &Path) -> PathBuf {
        with_suffix(prefix, SYMBOL_SUFFIX)
    }

    /// Process the tile at `prefix` in the configured mode
    pub fn run(&self, prefix: &Path) -> Result<PipelineReport, ExpandError> {
        let source = Self::source_path(prefix);
        let src = png_io::read_png(&source)?;

        tracing::debug!(
            source = %source.display(),
            width = src.width(),
            height = src.height(),
            mode = self.config.mode.as_str(),
            "Loaded source tile"
        );

        let mut outputs = Vec::new();
        match self.config.mode {
            ExpandMode::Bordered => {
                outputs.push(self.write_bordered(&src, prefix)?);
            }
            ExpandMode::Dense => {
                let params = self.config.dense;
                let canvas = CanvasSpec::from_size(params.size)?;
                let image = rendering::expand_sparse(&src, params.scale, Placement::Dense, canvas)?;
                outputs.push(self.write(&Self::overlay_path(prefix), &image)?);
            }
            ExpandMode::Symbolic => {
                // Load glyphs before writing anything so a missing glyph leaves no files behind
                let table = self.symbol_table_for(&src)?;
                outputs.push(self.write_bordered(&src, prefix)?);
                let canvas = CanvasSpec::from_size(self.config.symbolic.size)?;
                let image = rendering::expand_symbolic(&src, &self.palette, &table, canvas)?;
                outputs.push(self.write(&Self::symbol_path(prefix), &image)?);
            }
        }

        Ok(PipelineReport {
            source,
            source_width: src.width(),
            source_height: src.height(),
            outputs,
        })
    }

    /// Glyphs for exactly the palette colors `src` paints with
    fn symbol_table_for(&self, src: &RasterImage) -> Result<SymbolTable, ExpandError> {
        let mut colors: Vec<Rgb> = src
            .opaque_pixels()
            .filter_map(|(_, _, px)| self.palette.lookup_pixel(px)?.color)
            .collect();
        colors.sort_unstable();
        colors.dedup();

        SymbolTable::load_for(
            &self.config.glyph_dir,
            self.config.symbolic.cell_size,
            &self.palette,
            colors,
        )
    }

    fn write_bordered(&self, src: &RasterImage, prefix: &Path) -> Result<WrittenTile, ExpandError> {
        let params = self.config.bordered;
        let canvas = CanvasSpec::from_size(params.size)?;
        let image = rendering::expand_sparse(src, params.scale, Placement::Bordered, canvas)?;
        self.write(&Self::overlay_path(prefix), &image)
    }

    fn write(&self, path: &Path, image: &RasterImage) -> Result<WrittenTile, ExpandError> {
        let bytes = png_io::write_png(path, image, self.config.optimize)?;
        tracing::info!(
            path = %path.display(),
            size = image.width(),
            bytes,
            "Wrote tile"
        );
        Ok(WrittenTile {
            path: path.to_path_buf(),
            size: image.width(),
            bytes,
        })
    }

    /// Get the config
    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut s = prefix.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_prefix() {
        let prefix = Path::new("tiles/1024/717");
        assert_eq!(
            TilePipeline::source_path(prefix),
            PathBuf::from("tiles/1024/717_orig.png")
        );
        assert_eq!(
            TilePipeline::overlay_path(prefix),
            PathBuf::from("tiles/1024/717.png")
        );
        assert_eq!(
            TilePipeline::symbol_path(prefix),
            PathBuf::from("tiles/1024/717_sym.png")
        );
    }

    #[test]
    fn test_prefix_with_dots_is_not_an_extension() {
        let prefix = Path::new("v1.2/tile");
        assert_eq!(
            TilePipeline::overlay_path(prefix),
            PathBuf::from("v1.2/tile.png")
        );
    }

    #[test]
    fn test_new_validates_config() {
        let mut config = ExpandConfig::default();
        config.symbolic.size = 6999;
        assert!(matches!(
            TilePipeline::new(config),
            Err(ExpandError::UnsupportedSize(6999))
        ));
    }

    #[test]
    fn test_missing_source_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = TilePipeline::new(ExpandConfig::default()).unwrap();
        let err = pipeline.run(&dir.path().join("nope")).unwrap_err();
        match err {
            ExpandError::Read { path, .. } => {
                assert_eq!(path, dir.path().join("nope_orig.png"));
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }
}
