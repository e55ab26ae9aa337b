#![forbid(unsafe_code)]

//! Contrast utilities for FrankenTUI theme compilation.
//!
//! # Role in FrankenTUI
//! The theme compiler needs readable foreground and focus colors for
//! arbitrary background colors. `ftui-contrast` derives them from a small
//! luminance/saturation heuristic and keeps every operation a pure function
//! of its inputs and a [`ContrastConfig`].
//!
//! # This crate provides
//! - [`luminance`] for weighted (BT.709) brightness in `[0, 255]`.
//! - [`is_dark`] / [`classify`] for the dark/light decision.
//! - [`font_color_for`] and [`focus_color_for`] for derived colors.
//! - [`darkest_of`] (and a rayon-backed [`par_darkest_of`]) for palette ranking.
//! - [`render_focus_style`] for choosing border-color vs. shadow focus rendering.
//! - [`ContrastCache`] for memoizing derivations over repeated backgrounds.
//!
//! # How it fits in the system
//! Color literals are parsed by the caller (see `theme_frankentui`); this
//! crate only sees channel values and thresholds, and hands back colors and
//! style declarations for the compiler to emit.

/// Memoized derivations.
pub mod cache;
/// Dark/light classification.
pub mod classify;
/// Color values, luminance, and HSL arithmetic.
pub mod color;
/// Threshold configuration.
pub mod config;
/// Font and focus color derivation.
pub mod contrast;
/// Focus indicator rendering strategy.
pub mod focus;
/// Darkest-color selection.
pub mod palette;
/// Theme values of any shape.
pub mod value;

pub use cache::{CacheStats, ContrastCache};
pub use classify::{SATURATED_BAND, SATURATION_CUTOFF, Tone, classify, is_dark};
pub use color::{Color, Hsl, luminance};
pub use config::{ConfigError, ContrastConfig, FONT_CONTRAST, LUMINANCE_THRESHOLD};
pub use contrast::{
    DerivedColors, FOCUS_DARKEN, FOCUS_LIGHTEN, FOCUS_SATURATE, derive, focus_color_for,
    font_color_for, font_color_for_value,
};
pub use focus::{FocusStyleSpec, ShadowSpec, StyleEffect, render_focus_style};
pub use palette::{darkest_index, darkest_of, par_darkest_index, par_darkest_of};
pub use value::ThemeValue;
