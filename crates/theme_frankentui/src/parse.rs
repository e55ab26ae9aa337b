//! Color literal parsing for theme files and command-line arguments.
//!
//! Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, and a small set of CSS named
//! colors (case-insensitive).

use ftui_contrast::Color;

use crate::error::{Result, ThemeError};

/// Parse a color literal, or `None` if it is not one.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Color::new(r, g, b))
            }
            _ => None,
        };
    }

    if let Some(inner) = trimmed
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            return None;
        }
        let r: u8 = parts[0].trim().parse().ok()?;
        let g: u8 = parts[1].trim().parse().ok()?;
        let b: u8 = parts[2].trim().parse().ok()?;
        return Some(Color::new(r, g, b));
    }

    let (r, g, b) = match trimmed.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "navy" => (0, 0, 128),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(Color::new(r, g, b))
}

/// Like [`parse_color`], but reports the offending literal.
pub fn require_color(value: &str) -> Result<Color> {
    parse_color(value).ok_or_else(|| ThemeError::InvalidColor(value.to_string()))
}
