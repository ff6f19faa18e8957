//! Parser and renderer configuration.
//!
//! Every setting has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! default_angle = 135
//!
//! [colors]
//! "rosa choque" = "#ff1493"
//! "verde musgo" = "#556b2f"
//!
//! [render]
//! animation_seconds = 12
//! preview_height_px = 240
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::color::normalize_name;
use crate::error::ConfigError;
use crate::logging::targets;
use crate::parser::name_token;
use crate::validate;

/// Angle used by linear gradients when the input names none.
pub const DEFAULT_ANGLE: f64 = 90.0;

/// Length of one sweep animation cycle.
pub const DEFAULT_ANIMATION_SECONDS: f64 = 8.0;

/// Height of the preview box.
pub const DEFAULT_PREVIEW_HEIGHT_PX: u32 = 180;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extra dictionary entries, merged over the built-in names. Each name is
    /// keyed by the text the parser sees for it, so `"cor de rosa"` answers to
    /// `rosa`.
    pub colors: BTreeMap<String, String>,
    /// Linear gradient angle in degrees when none is given.
    pub default_angle: f64,
    /// Renderer settings.
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: BTreeMap::new(),
            default_angle: DEFAULT_ANGLE,
            render: RenderConfig::default(),
        }
    }
}

/// Settings for the markup/style template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Duration of one gradient sweep cycle, in seconds.
    pub animation_seconds: f64,
    /// Height of the preview box, in pixels.
    pub preview_height_px: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animation_seconds: DEFAULT_ANIMATION_SECONDS,
            preview_height_px: DEFAULT_PREVIEW_HEIGHT_PX,
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            colors = config.colors.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every dictionary entry is a color and numeric settings are
    /// usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in &self.colors {
            if normalize_name(name).is_empty() {
                return Err(ConfigError::EmptyColorName);
            }
            if name_token(name).is_none() {
                return Err(ConfigError::UnreachableColorName { name: name.clone() });
            }
            if !validate::is_valid_color(value) {
                return Err(ConfigError::invalid_color(name, value));
            }
        }

        if !self.default_angle.is_finite() {
            return Err(ConfigError::invalid_setting(
                "default_angle",
                "must be a finite number",
            ));
        }
        if !(self.render.animation_seconds.is_finite() && self.render.animation_seconds > 0.0) {
            return Err(ConfigError::invalid_setting(
                "render.animation_seconds",
                "must be a positive number",
            ));
        }

        Ok(())
    }
}
