//! Shared context for unit resolution.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::values::{Length, LengthUnit};

/// Settings for length resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Device pixels per inch used for absolute units.
    ///
    /// [§ 5.2 Absolute lengths](https://www.w3.org/TR/css-values-3/#absolute-lengths)
    /// "1in = 96px" for the reference pixel.
    pub dpi: f32,
    /// Font size of the root element in pixels.
    pub default_font_size: f32,
    /// x-height as a fraction of the em size.
    ///
    /// "In the cases where it is impossible or impractical to determine the
    /// x-height, a value of 0.5em must be assumed."
    pub ex_ratio: f32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            default_font_size: 16.0,
            ex_ratio: 0.5,
        }
    }
}

impl CacheConfig {
    /// Check that every setting is a positive, finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("dpi", self.dpi),
            ("default_font_size", self.default_font_size),
            ("ex_ratio", self.ex_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Read a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a setting is invalid.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Font metrics used to resolve `em` and `ex`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontMetrics {
    /// The computed font size, in pixels.
    pub em_size: f32,
    /// The x-height, in pixels.
    pub ex_size: f32,
}

/// Read-only context shared by every value computed in a layout pass.
#[derive(Debug, Clone, Default)]
pub struct ResourceCache {
    config: CacheConfig,
}

impl ResourceCache {
    /// Create a cache from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the configuration is invalid.
    pub fn new(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Metrics for the root element's font.
    #[must_use]
    pub fn default_metrics(&self) -> FontMetrics {
        self.metrics_for_font_size(self.config.default_font_size)
    }

    /// Metrics for a font of `font_size` pixels, using the configured
    /// x-height ratio.
    #[must_use]
    pub fn metrics_for_font_size(&self, font_size: f32) -> FontMetrics {
        FontMetrics {
            em_size: font_size,
            ex_size: font_size * self.config.ex_ratio,
        }
    }

    /// Convert `length` to pixels.
    ///
    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-3/#lengths)
    ///
    /// Results too large for `f32` saturate at `±f32::MAX`, so a computed
    /// length is always finite.
    #[must_use]
    pub fn compute_length(&self, length: Length, em_size: f32, ex_size: f32) -> Length {
        let dpi = self.config.dpi;
        let value = length.value;
        let px = match length.unit {
            LengthUnit::Px => value,
            LengthUnit::Em => value * em_size,
            LengthUnit::Ex => value * ex_size,
            LengthUnit::In => value * dpi,
            LengthUnit::Cm => value * dpi / 2.54,
            LengthUnit::Mm => value * dpi / 25.4,
            LengthUnit::Pt => value * dpi / 72.0,
            LengthUnit::Pc => value * dpi / 6.0,
        };
        Length::px(px.clamp(-f32::MAX, f32::MAX))
    }
}
