use std::fs;
use std::path::{Path, PathBuf};

use layers::glyphs::GlyphLayoutConfig;
use serde::{Deserialize, Serialize};

/// Optional JSON manifest overriding the layout parameters.
///
/// Every field defaults to the reference constants, so an absent file (or an
/// empty object) is equivalent to the built-in configuration. The column
/// count is not part of the manifest: it always derives from the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VizConfig {
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub row_gap: f64,
    pub diameter_min_px: f64,
    pub diameter_max_px: f64,
    pub length_domain_min_km: f64,
    pub length_domain_max_km: f64,
    pub min_glyph_gap_px: f64,
    pub max_attempts: u32,
}

impl Default for VizConfig {
    fn default() -> Self {
        let reference = GlyphLayoutConfig::default();
        Self {
            margin_left: reference.margin_left,
            margin_top: reference.margin_top,
            margin_right: reference.margin_right,
            margin_bottom: reference.margin_bottom,
            row_gap: reference.row_gap,
            diameter_min_px: reference.diameter_min_px,
            diameter_max_px: reference.diameter_max_px,
            length_domain_min_km: reference.length_domain_min_km,
            length_domain_max_km: reference.length_domain_max_km,
            min_glyph_gap_px: reference.min_glyph_gap_px,
            max_attempts: reference.max_attempts,
        }
    }
}

#[derive(Debug)]
pub enum VizConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for VizConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            VizConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for VizConfigError {}

impl VizConfig {
    /// Loads the manifest; a missing file is the default configuration, a
    /// present-but-broken one is an error.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self, VizConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| VizConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| VizConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolves to a layout configuration for one viewport width.
    pub fn layout_config(&self, viewport_width: f64) -> GlyphLayoutConfig {
        GlyphLayoutConfig {
            cols: GlyphLayoutConfig::cols_for_width(viewport_width),
            margin_left: self.margin_left,
            margin_top: self.margin_top,
            margin_right: self.margin_right,
            margin_bottom: self.margin_bottom,
            row_gap: self.row_gap,
            diameter_min_px: self.diameter_min_px,
            diameter_max_px: self.diameter_max_px,
            length_domain_min_km: self.length_domain_min_km,
            length_domain_max_km: self.length_domain_max_km,
            min_glyph_gap_px: self.min_glyph_gap_px,
            max_attempts: self.max_attempts,
        }
    }
}
