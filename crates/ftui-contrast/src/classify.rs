//! Dark/light classification.

use crate::color::Color;
use crate::config::ContrastConfig;

/// Saturation (percent) above which the dark band is widened.
pub const SATURATION_CUTOFF: f64 = 80.0;

/// Extra luminance units counted as dark for highly saturated colors.
pub const SATURATED_BAND: f64 = 20.0;

/// Result of classifying a color. Every color is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    Dark,
    Light,
}

/// Whether `color` reads as dark against `luminance_threshold`.
///
/// Dark when luminance is below the threshold, or when saturation exceeds
/// [`SATURATION_CUTOFF`] and luminance is below the threshold plus
/// [`SATURATED_BAND`].
#[must_use]
pub fn is_dark(color: Color, luminance_threshold: f64) -> bool {
    let luma = color.luminance();
    if luma < luminance_threshold {
        return true;
    }
    color.saturation() > SATURATION_CUTOFF && luma < luminance_threshold + SATURATED_BAND
}

/// Classify `color` using the threshold from `config`.
#[must_use]
pub fn classify(color: Color, config: &ContrastConfig) -> Tone {
    let tone = if is_dark(color, config.luminance_threshold) {
        Tone::Dark
    } else {
        Tone::Light
    };
    tracing::trace!(
        color = %color,
        luminance = color.luminance(),
        threshold = config.luminance_threshold,
        ?tone,
        "classified color"
    );
    tone
}
