// SPDX-License-Identifier: Apache-2.0
//! Focus indicator rendering strategy.
//!
//! A theme configures its focus emphasis with a single value. The *shape*
//! of that value picks one of two mutually exclusive strategies:
//!
//! - a plain color renders as a `border-color` declaration,
//! - a shadow descriptor renders as a `box-shadow` declaration.
//!
//! Anything else renders nothing. The choice is made once per theme compile
//! through [`render_focus_style`], not per element.
//!
//! # Example
//!
//! ```
//! use ftui_contrast::{Color, FocusStyleSpec, StyleEffect, render_focus_style};
//!
//! let spec = FocusStyleSpec::Border(Color::new(51, 102, 255));
//! let effect = render_focus_style(&spec);
//! assert_eq!(effect, Some(StyleEffect::BorderColor(Color::new(51, 102, 255))));
//! assert_eq!(effect.unwrap().to_string(), "border-color: #3366ff");
//! ```

use std::fmt;

use crate::color::Color;
use crate::value::ThemeValue;

/// Shadow/outline descriptor, rendered verbatim as a `box-shadow` value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowSpec {
    /// Horizontal offset in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_x: f64,
    /// Vertical offset in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_y: f64,
    /// Blur radius in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blur: f64,
    /// Spread radius in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spread: f64,
    pub color: Color,
    /// Draw inside the border box instead of outside.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inset: bool,
}

impl ShadowSpec {
    /// A zero-offset, zero-blur ring of `spread` pixels, the usual focus outline.
    #[must_use]
    pub const fn ring(spread: f64, color: Color) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread,
            color,
            inset: false,
        }
    }

    #[must_use]
    pub fn blur(mut self, blur: f64) -> Self {
        self.blur = blur;
        self
    }

    #[must_use]
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    #[must_use]
    pub fn inset(mut self, inset: bool) -> Self {
        self.inset = inset;
        self
    }
}

impl fmt::Display for ShadowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

/// The configured focus style, classified by shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FocusStyleSpec {
    /// Render as a border color.
    Border(Color),
    /// Render as a shadow effect.
    Shadow(ShadowSpec),
    /// No focus style; renders nothing.
    #[default]
    Unset,
}

impl From<&ThemeValue> for FocusStyleSpec {
    fn from(value: &ThemeValue) -> Self {
        match value {
            ThemeValue::Color(color) => Self::Border(*color),
            ThemeValue::Shadow(shadow) => Self::Shadow(*shadow),
            other => {
                tracing::debug!(kind = other.kind(), "focus style value has no rendering");
                Self::Unset
            }
        }
    }
}

impl From<ThemeValue> for FocusStyleSpec {
    fn from(value: ThemeValue) -> Self {
        Self::from(&value)
    }
}

impl From<Color> for FocusStyleSpec {
    fn from(color: Color) -> Self {
        Self::Border(color)
    }
}

impl From<ShadowSpec> for FocusStyleSpec {
    fn from(shadow: ShadowSpec) -> Self {
        Self::Shadow(shadow)
    }
}

/// A single rendered style declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleEffect {
    BorderColor(Color),
    Shadow(ShadowSpec),
}

impl StyleEffect {
    /// CSS property name of this declaration.
    #[must_use]
    pub const fn property(&self) -> &'static str {
        match self {
            Self::BorderColor(_) => "border-color",
            Self::Shadow(_) => "box-shadow",
        }
    }

    /// CSS value of this declaration.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::BorderColor(color) => color.to_string(),
            Self::Shadow(shadow) => shadow.to_string(),
        }
    }
}

impl fmt::Display for StyleEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property(), self.value())
    }
}

/// Pick the rendering strategy for a focus style.
///
/// Shadow descriptors become [`StyleEffect::Shadow`] with their parameters
/// untouched, colors become [`StyleEffect::BorderColor`], and
/// [`FocusStyleSpec::Unset`] yields `None`.
#[must_use]
pub fn render_focus_style(spec: &FocusStyleSpec) -> Option<StyleEffect> {
    match spec {
        FocusStyleSpec::Shadow(shadow) => Some(StyleEffect::Shadow(*shadow)),
        FocusStyleSpec::Border(color) => Some(StyleEffect::BorderColor(*color)),
        FocusStyleSpec::Unset => None,
    }
}
