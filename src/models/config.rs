use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::error::ExpandError;
use crate::models::CanvasSpec;
use crate::rendering::Placement;

/// Which overlay a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpandMode {
    /// Each source pixel as a dot in the center of a 3x3 cell
    #[default]
    Bordered,
    /// Plain nearest-neighbor enlargement with no gaps
    Dense,
    /// Bordered overlay plus a symbol overlay (`<prefix>_sym.png`)
    Symbolic,
}

impl ExpandMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpandMode::Bordered => "bordered",
            ExpandMode::Dense => "dense",
            ExpandMode::Symbolic => "symbolic",
        }
    }
}

/// Tool configuration, optionally loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExpandConfig {
    /// Overlay to produce
    #[serde(default)]
    pub mode: ExpandMode,

    /// Directory holding `<hex>.png` symbol glyphs
    #[serde(default = "default_glyph_dir")]
    pub glyph_dir: PathBuf,

    /// Spaced-out overlay parameters
    #[serde(
        default = "SparseConfig::bordered",
        deserialize_with = "bordered_section"
    )]
    pub bordered: SparseConfig,

    /// Gapless overlay parameters
    #[serde(default = "SparseConfig::dense", deserialize_with = "dense_section")]
    pub dense: SparseConfig,

    /// Symbol overlay parameters
    #[serde(default)]
    pub symbolic: SymbolConfig,

    /// Losslessly recompress written PNGs (slow on 7000px canvases)
    #[serde(default)]
    pub optimize: bool,
}

fn default_glyph_dir() -> PathBuf {
    PathBuf::from("symbols")
}

/// Parameters for the pixel-spacing transforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseConfig {
    /// Cell edge length each source pixel expands to
    pub scale: u32,

    /// Output canvas edge length
    pub size: u32,
}

impl SparseConfig {
    fn bordered() -> Self {
        Self {
            scale: 3,
            size: CanvasSpec::STANDARD.size,
        }
    }

    fn dense() -> Self {
        Self {
            scale: 1,
            size: CanvasSpec::SMALL.size,
        }
    }
}

/// A `bordered:` or `dense:` section as written in YAML.
///
/// The two sections share a shape but not their defaults, so missing keys
/// are filled in from the section they belong to.
#[derive(Deserialize)]
struct SparseSection {
    scale: Option<u32>,
    size: Option<u32>,
}

impl SparseSection {
    fn with_defaults(self, defaults: SparseConfig) -> SparseConfig {
        SparseConfig {
            scale: self.scale.unwrap_or(defaults.scale),
            size: self.size.unwrap_or(defaults.size),
        }
    }
}

fn bordered_section<'de, D: Deserializer<'de>>(d: D) -> Result<SparseConfig, D::Error> {
    Ok(SparseSection::deserialize(d)?.with_defaults(SparseConfig::bordered()))
}

fn dense_section<'de, D: Deserializer<'de>>(d: D) -> Result<SparseConfig, D::Error> {
    Ok(SparseSection::deserialize(d)?.with_defaults(SparseConfig::dense()))
}

/// Parameters for symbol substitution
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SymbolConfig {
    /// Glyph edge length in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Output canvas edge length
    #[serde(default = "default_symbol_size")]
    pub size: u32,
}

fn default_cell_size() -> u32 {
    7
}

fn default_symbol_size() -> u32 {
    CanvasSpec::SYMBOL.size
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            size: default_symbol_size(),
        }
    }
}

impl ExpandConfig {
    /// Load configuration from a YAML file, or the defaults when no file is
    /// given. A named file that cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ExpandError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ExpandError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| ExpandError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            mode = config.mode.as_str(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check every canvas size and placement before any file is touched
    pub fn validate(&self) -> Result<(), ExpandError> {
        CanvasSpec::from_size(self.bordered.size)?;
        CanvasSpec::from_size(self.dense.size)?;
        CanvasSpec::from_size(self.symbolic.size)?;
        Placement::Bordered.check(self.bordered.scale)?;
        Placement::Dense.check(self.dense.scale)?;
        if self.symbolic.cell_size == 0 {
            return Err(ExpandError::InvalidCellSize(0));
        }
        Ok(())
    }
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            mode: ExpandMode::default(),
            glyph_dir: default_glyph_dir(),
            bordered: SparseConfig::bordered(),
            dense: SparseConfig::dense(),
            symbolic: SymbolConfig::default(),
            optimize: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ExpandConfig::default();

        assert_eq!(config.mode, ExpandMode::Bordered);
        assert_eq!(config.glyph_dir, PathBuf::from("symbols"));
        assert_eq!(config.bordered, SparseConfig { scale: 3, size: 3000 });
        assert_eq!(config.dense, SparseConfig { scale: 1, size: 2000 });
        assert_eq!(config.symbolic.cell_size, 7);
        assert_eq!(config.symbolic.size, 7000);
        assert!(!config.optimize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
mode: symbolic
glyph_dir: /srv/wplace/symbols
symbolic:
  cell_size: 7
"#;
        let config: ExpandConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.mode, ExpandMode::Symbolic);
        assert_eq!(config.glyph_dir, PathBuf::from("/srv/wplace/symbols"));
        assert_eq!(config.symbolic.size, 7000);
        // Untouched sections keep their defaults
        assert_eq!(config.bordered, SparseConfig { scale: 3, size: 3000 });
    }

    #[test]
    fn test_parse_empty_yaml_is_default() {
        let config: ExpandConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ExpandConfig::default());
    }

    #[test]
    fn test_validate_rejects_unsupported_size() {
        let mut config = ExpandConfig::default();
        config.dense.size = 2048;
        assert!(matches!(
            config.validate(),
            Err(ExpandError::UnsupportedSize(2048))
        ));
    }

    #[test]
    fn test_validate_rejects_bordered_scale_one() {
        // A 1px cell has no room for the border offset
        let mut config = ExpandConfig::default();
        config.bordered.scale = 1;
        assert!(matches!(
            config.validate(),
            Err(ExpandError::InvalidPlacement {
                scale: 1,
                offset: 1
            })
        ));
    }

    #[test]
    fn test_parse_partial_sparse_section_keeps_section_defaults() {
        let yaml = "mode: dense\ndense:\n  size: 2000\nbordered:\n  scale: 5\n";
        let config: ExpandConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.mode, ExpandMode::Dense);
        assert_eq!(config.dense, SparseConfig { scale: 1, size: 2000 });
        assert_eq!(config.bordered, SparseConfig { scale: 5, size: 3000 });
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let mut config = ExpandConfig::default();
        config.symbolic.cell_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ExpandError::InvalidCellSize(0))
        ));
    }

    #[test]
    fn test_load_partial_file_keeps_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expand.yaml");
        std::fs::write(&path, "mode: dense\ndense:\n  size: 2000\n").unwrap();

        let config = ExpandConfig::load(Some(&path)).unwrap();
        assert_eq!(config.mode, ExpandMode::Dense);
        assert_eq!(config.dense, SparseConfig { scale: 1, size: 2000 });
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = Path::new("/nonexistent/tile-expander.yaml");
        match ExpandConfig::load(Some(path)) {
            Err(ExpandError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expand.yaml");
        std::fs::write(&path, "mode: sideways\n").unwrap();

        assert!(matches!(
            ExpandConfig::load(Some(&path)),
            Err(ExpandError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(ExpandConfig::load(None).unwrap(), ExpandConfig::default());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ExpandMode::Bordered.as_str(), "bordered");
        assert_eq!(ExpandMode::Dense.as_str(), "dense");
        assert_eq!(ExpandMode::Symbolic.as_str(), "symbolic");
    }
}
