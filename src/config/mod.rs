//! Tool configuration management for `svgbox.toml`.
//!
//! Every section is optional; a missing config file yields pure defaults,
//! and CLI flags override whatever the file sets.
//!
//! # Example
//!
//! ```toml
//! [bounds]
//! precision = 2       # decimal places in reported boxes
//!
//! [crop]
//! margin = 0.0        # padding around --fit bounds
//! stretch = false     # append preserveAspectRatio="none"
//!
//! [stroke]
//! width = 8.0         # default for `svgbox stroke` when --width is omitted
//! color = "#f4f1ea"   # default for `svgbox stroke` when --color is omitted
//! ```

mod error;

pub use error::ConfigError;

use std::path::Path;

use serde::Deserialize;

use crate::edit::color::parse_hex_color;

/// Upper bound on reported decimal places; anything beyond this is noise
/// for coordinates that came out of a float regex.
const MAX_PRECISION: usize = 12;

/// `[bounds]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundsConfig {
    /// Decimal places used when printing boxes and viewBox values.
    pub precision: usize,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// `[crop]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Padding added around computed bounds in `--fit` mode.
    pub margin: f64,

    /// Append `preserveAspectRatio="none"` after the rewritten viewBox.
    pub stretch: bool,
}

/// `[stroke]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeConfig {
    /// Replacement stroke width, applied when the CLI omits `--width`.
    pub width: Option<f64>,

    /// Replacement stroke color (`#rrggbb`), applied when the CLI omits
    /// `--color`.
    pub color: Option<String>,
}

/// Root configuration loaded from `svgbox.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub bounds: BoundsConfig,
    pub crop: CropConfig,
    pub stroke: StrokeConfig,
}

impl ToolConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: the tool runs fine on defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the transforms cannot work with.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.precision > MAX_PRECISION {
            return Err(ConfigError::Validation(format!(
                "bounds.precision must be at most {MAX_PRECISION}, got {}",
                self.bounds.precision
            )));
        }

        if !self.crop.margin.is_finite() || self.crop.margin < 0.0 {
            return Err(ConfigError::Validation(format!(
                "crop.margin must be a non-negative number, got {}",
                self.crop.margin
            )));
        }

        if let Some(width) = self.stroke.width
            && (!width.is_finite() || width <= 0.0)
        {
            return Err(ConfigError::Validation(format!(
                "stroke.width must be a positive number, got {width}"
            )));
        }

        if let Some(color) = &self.stroke.color
            && parse_hex_color(color).is_none()
        {
            return Err(ConfigError::Validation(format!(
                "stroke.color must be a six-digit hex color like \"#f4f1ea\", got `{color}`"
            )));
        }

        Ok(())
    }
}
