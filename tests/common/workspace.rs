//! Temporary tile directory for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tile_expander::models::{ExpandConfig, ExpandMode};
use tile_expander::rendering::{png_io, RasterImage, SymbolTable};
use tile_expander::services::{PipelineReport, TilePipeline};
use wplace_palette::Rgb;

/// A scratch directory laid out like the tile server's `tiles/` tree
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn glyph_dir(&self) -> PathBuf {
        self.root().join("symbols")
    }

    /// Write `<root>/<prefix>_orig.png` and return the full prefix path
    pub fn add_source(&self, prefix: &str, image: &RasterImage) -> PathBuf {
        let prefix = self.root().join(prefix);
        if let Some(parent) = prefix.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create tile dir");
        }
        png_io::write_png(&TilePipeline::source_path(&prefix), image, false)
            .expect("Failed to write source tile");
        prefix
    }

    /// Write one glyph file per color into the glyph directory
    pub fn add_glyphs(&self, glyphs: &[(Rgb, RasterImage)]) {
        let dir = self.glyph_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create glyph dir");
        for (color, glyph) in glyphs {
            png_io::write_png(&SymbolTable::glyph_path(&dir, *color), glyph, false)
                .expect("Failed to write glyph");
        }
    }

    /// Config pointing at this workspace's glyph directory
    pub fn config(&self, mode: ExpandMode) -> ExpandConfig {
        ExpandConfig {
            mode,
            glyph_dir: self.glyph_dir(),
            ..ExpandConfig::default()
        }
    }

    pub fn run(&self, prefix: &Path, mode: ExpandMode) -> PipelineReport {
        TilePipeline::new(self.config(mode))
            .expect("Default config should be valid")
            .run(prefix)
            .expect("Pipeline run failed")
    }
}
