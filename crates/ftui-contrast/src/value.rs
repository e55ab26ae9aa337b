//! Theme values as the host theme compiler hands them over.

use crate::color::Color;
use crate::focus::ShadowSpec;

/// A single configured theme value of any shape.
///
/// Color-only operations accept a `ThemeValue` and treat every variant other
/// than [`ThemeValue::Color`] as "not applicable".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ThemeValue {
    Color(Color),
    Number(f64),
    Shadow(ShadowSpec),
    Text(String),
    #[default]
    Unset,
}

impl ThemeValue {
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Number(_) => "number",
            Self::Shadow(_) => "shadow",
            Self::Text(_) => "text",
            Self::Unset => "unset",
        }
    }
}

impl From<Color> for ThemeValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ShadowSpec> for ThemeValue {
    fn from(shadow: ShadowSpec) -> Self {
        Self::Shadow(shadow)
    }
}

impl From<Option<Color>> for ThemeValue {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Self::Unset, Self::Color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_colors_expose_a_color() {
        let red = Color::new(255, 0, 0);
        assert_eq!(ThemeValue::Color(red).as_color(), Some(red));
        assert_eq!(ThemeValue::Number(3.0).as_color(), None);
        assert_eq!(ThemeValue::Text("red".into()).as_color(), None);
        assert_eq!(ThemeValue::Unset.as_color(), None);
        assert_eq!(
            ThemeValue::Shadow(ShadowSpec::ring(1.0, red)).as_color(),
            None
        );
    }

    #[test]
    fn option_conversion_maps_none_to_unset() {
        assert_eq!(ThemeValue::from(None::<Color>), ThemeValue::Unset);
        assert_eq!(
            ThemeValue::from(Some(Color::WHITE)),
            ThemeValue::Color(Color::WHITE)
        );
    }

    #[test]
    fn kind_names_each_variant() {
        assert_eq!(ThemeValue::default().kind(), "unset");
        assert_eq!(ThemeValue::Number(1.0).kind(), "number");
        assert_eq!(ThemeValue::from(Color::BLACK).kind(), "color");
    }
}
