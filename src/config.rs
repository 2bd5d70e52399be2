//! Rendering configuration
//!
//! Settings for preview composition and resampling, loadable from TOML:
//!
//! ```toml
//! filter = "point"
//!
//! [preview]
//! width = 64
//! height = 128
//! ```

use crate::canvas::MAX_CANVAS_SIDE;
use crate::geometry::PREVIEW_GRID;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Resampling used when a region changes size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Nearest-neighbor (pixel-perfect)
    #[default]
    Point,
    /// Bilinear interpolation
    Bilinear,
}

impl FilterMode {
    pub fn filter_type(self) -> FilterType {
        match self {
            FilterMode::Point => FilterType::Nearest,
            FilterMode::Bilinear => FilterType::Triangle,
        }
    }
}

/// Preview output size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_width")]
    pub width: u32,
    #[serde(default = "default_preview_height")]
    pub height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { width: default_preview_width(), height: default_preview_height() }
    }
}

fn default_preview_width() -> u32 {
    64
}

fn default_preview_height() -> u32 {
    128
}

/// Top-level rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub filter: FilterMode,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl RenderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = toml::from_str(contents)?;
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        Ok(config)
    }

    /// Check value ranges, returning one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let (cols, rows) = PREVIEW_GRID;

        if self.preview.width < cols {
            errors.push(format!("preview.width must be at least {} (got {})", cols, self.preview.width));
        }
        if self.preview.height < rows {
            errors.push(format!("preview.height must be at least {} (got {})", rows, self.preview.height));
        }
        if self.preview.width > MAX_CANVAS_SIDE {
            errors.push(format!("preview.width must be at most {} (got {})", MAX_CANVAS_SIDE, self.preview.width));
        }
        if self.preview.height > MAX_CANVAS_SIDE {
            errors.push(format!("preview.height must be at most {} (got {})", MAX_CANVAS_SIDE, self.preview.height));
        }

        errors
    }
}

/// Load configuration from a TOML file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    match path {
        Some(p) => {
            let contents = fs::read_to_string(p)?;
            RenderConfig::from_toml_str(&contents)
        }
        None => Ok(RenderConfig::default()),
    }
}
