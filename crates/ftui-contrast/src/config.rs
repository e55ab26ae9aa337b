//! Threshold configuration shared by the classifier and the derivers.
//!
//! There is no global mutable state: callers pass a [`ContrastConfig`] to
//! every operation, and [`ContrastConfig::default`] carries the named
//! defaults [`LUMINANCE_THRESHOLD`] and [`FONT_CONTRAST`].

use thiserror::Error;

/// Luminance below which a color counts as dark.
pub const LUMINANCE_THRESHOLD: f64 = 150.0;

/// How far a derived font color is pushed away from its background.
pub const FONT_CONTRAST: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("luminance threshold {0} is outside [0, 255]")]
    LuminanceThresholdOutOfRange(f64),
    #[error("font contrast {0} is outside (0, 1]")]
    FontContrastOutOfRange(f64),
}

/// Tunable thresholds for classification and derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContrastConfig {
    /// Luminance cutoff for the dark/light decision, in `[0, 255]`.
    pub luminance_threshold: f64,
    /// Contrast factor for font colors, in `(0, 1]`.
    pub font_contrast: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            luminance_threshold: LUMINANCE_THRESHOLD,
            font_contrast: FONT_CONTRAST,
        }
    }
}

impl ContrastConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn luminance_threshold(mut self, threshold: f64) -> Self {
        self.luminance_threshold = threshold;
        self
    }

    #[must_use]
    pub fn font_contrast(mut self, contrast: f64) -> Self {
        self.font_contrast = contrast;
        self
    }

    /// Check both fields against their documented ranges.
    ///
    /// NaN fails both checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=255.0).contains(&self.luminance_threshold) {
            return Err(ConfigError::LuminanceThresholdOutOfRange(
                self.luminance_threshold,
            ));
        }
        if !(self.font_contrast > 0.0 && self.font_contrast <= 1.0) {
            return Err(ConfigError::FontContrastOutOfRange(self.font_contrast));
        }
        Ok(())
    }

    /// Consume the config, returning it only if [`validate`](Self::validate) passes.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map(|()| self)
    }
}
