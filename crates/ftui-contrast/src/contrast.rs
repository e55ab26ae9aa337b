//! Readable font and focus colors derived from a background.
//!
//! Both derivations branch on [`classify`]: dark backgrounds are pushed
//! lighter, light backgrounds darker, so the derived color always moves
//! away from its source.

use crate::classify::{Tone, classify};
use crate::color::Color;
use crate::config::ContrastConfig;
use crate::value::ThemeValue;

/// Lightness points added to a dark context for its focus color.
pub const FOCUS_LIGHTEN: f64 = 40.0;

/// Lightness points removed from a light context for its focus color.
pub const FOCUS_DARKEN: f64 = 50.0;

/// Saturation points added to every focus color.
pub const FOCUS_SATURATE: f64 = 80.0;

/// Font and focus colors derived from one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedColors {
    pub tone: Tone,
    pub font: Color,
    pub focus: Color,
}

/// Readable foreground color for `background`.
///
/// Lightness is scaled by `100% * font_contrast` (capped at 100%) toward
/// white for dark backgrounds or toward black for light ones. Saturation is
/// scaled down by `50% * font_contrast` in both cases.
#[must_use]
pub fn font_color_for(background: Color, config: &ContrastConfig) -> Color {
    let contrast = config.font_contrast;
    let saturation = (-50.0 * contrast).max(-100.0);
    let lightness = match classify(background, config) {
        Tone::Dark => (100.0 * contrast).min(100.0),
        Tone::Light => (-100.0 * contrast).max(-100.0),
    };
    let font = background
        .to_hsl()
        .scale_lightness(lightness)
        .scale_saturation(saturation)
        .to_color();
    tracing::trace!(%background, %font, lightness, saturation, "derived font color");
    font
}

/// [`font_color_for`] over an arbitrary theme value.
///
/// Returns `None` unless `value` is a concrete color: the derivation is not
/// applicable to unset or non-color values.
#[must_use]
pub fn font_color_for_value(value: &ThemeValue, config: &ContrastConfig) -> Option<Color> {
    value
        .as_color()
        .map(|background| font_color_for(background, config))
}

/// Emphasis color for focus indicators drawn over `context`.
///
/// Uses fixed adjustments: dark contexts are lightened by
/// [`FOCUS_LIGHTEN`], light ones darkened by [`FOCUS_DARKEN`], and both are
/// saturated by [`FOCUS_SATURATE`]. Only the luminance threshold of
/// `config` is consulted.
#[must_use]
pub fn focus_color_for(context: Color, config: &ContrastConfig) -> Color {
    let hsl = context.to_hsl();
    let adjusted = match classify(context, config) {
        Tone::Dark => hsl.lighten(FOCUS_LIGHTEN),
        Tone::Light => hsl.darken(FOCUS_DARKEN),
    };
    let focus = adjusted.saturate(FOCUS_SATURATE).to_color();
    tracing::trace!(%context, %focus, "derived focus color");
    focus
}

/// Classify `background` and derive both its font and focus colors.
#[must_use]
pub fn derive(background: Color, config: &ContrastConfig) -> DerivedColors {
    DerivedColors {
        tone: classify(background, config),
        font: font_color_for(background, config),
        focus: focus_color_for(background, config),
    }
}
