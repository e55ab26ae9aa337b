//! Theme file loading and compilation to CSS.
//!
//! A theme file is JSON:
//!
//! ```json
//! {
//!   "background": "#1e1e2e",
//!   "palette": ["#313244", "#45475a"],
//!   "focus_style": { "spread": 2, "color": "#89b4fa" },
//!   "contrast": { "luminance_threshold": 150, "font_contrast": 0.72 }
//! }
//! ```
//!
//! Every field is optional. `focus_style` may be a color literal (border
//! focus), a shadow object (shadow focus), or anything else (no focus rule).

use std::fmt;
use std::path::Path;

use ftui_contrast::{
    Color, ContrastConfig, FocusStyleSpec, ShadowSpec, StyleEffect, ThemeValue, Tone,
    darkest_of, derive, render_focus_style,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::parse::{parse_color, require_color};

/// CSS selector used when none is given.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Raw theme file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub palette: Vec<String>,
    #[serde(default)]
    pub focus_style: serde_json::Value,
    #[serde(default)]
    pub contrast: ContrastConfig,
}

/// Shadow object as written in a theme file, with a color literal.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShadowDecl {
    #[serde(default)]
    offset_x: f64,
    #[serde(default)]
    offset_y: f64,
    #[serde(default)]
    blur: f64,
    #[serde(default)]
    spread: f64,
    color: String,
    #[serde(default)]
    inset: bool,
}

impl ThemeFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ThemeError::ThemeFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Interpret `focus_style` by shape.
    ///
    /// Strings that are not color literals, numbers, and objects that are
    /// not shadows all become non-rendering values. A shadow whose color
    /// does not parse is an error.
    pub fn focus_value(&self) -> Result<ThemeValue> {
        let value = match &self.focus_style {
            serde_json::Value::Null => ThemeValue::Unset,
            serde_json::Value::String(text) => match parse_color(text) {
                Some(color) => ThemeValue::Color(color),
                None => ThemeValue::Text(text.clone()),
            },
            serde_json::Value::Number(number) => {
                ThemeValue::Number(number.as_f64().unwrap_or_default())
            }
            object @ serde_json::Value::Object(_) => {
                match serde_json::from_value::<ShadowDecl>(object.clone()) {
                    Ok(decl) => ThemeValue::Shadow(ShadowSpec {
                        offset_x: decl.offset_x,
                        offset_y: decl.offset_y,
                        blur: decl.blur,
                        spread: decl.spread,
                        color: require_color(&decl.color)?,
                        inset: decl.inset,
                    }),
                    Err(error) => {
                        tracing::debug!(
                            kind = "object",
                            %error,
                            "focus_style object is not a shadow; ignoring"
                        );
                        ThemeValue::Unset
                    }
                }
            }
            other => {
                tracing::debug!(
                    kind = json_kind(other),
                    value = %other,
                    "unsupported focus_style value; ignoring"
                );
                ThemeValue::Unset
            }
        };
        Ok(value)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result of compiling a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTheme {
    pub selector: String,
    pub background: Option<Color>,
    pub tone: Option<Tone>,
    pub font: Option<Color>,
    pub focus: Option<Color>,
    pub darkest: Option<Color>,
    pub focus_effect: Option<StyleEffect>,
}

/// Compile a parsed theme file.
pub fn compile(theme: &ThemeFile, selector: &str) -> Result<CompiledTheme> {
    let config = theme.contrast.validated()?;

    let background = theme.background.as_deref().map(require_color).transpose()?;
    let palette = theme
        .palette
        .iter()
        .map(|literal| require_color(literal))
        .collect::<Result<Vec<_>>>()?;

    let derived = background.map(|bg| derive(bg, &config));
    let spec = FocusStyleSpec::from(&theme.focus_value()?);
    let focus_effect = render_focus_style(&spec);

    tracing::debug!(
        selector,
        background = ?background,
        palette = palette.len(),
        focus = ?spec,
        "compiled theme"
    );

    Ok(CompiledTheme {
        selector: selector.to_string(),
        background,
        tone: derived.map(|d| d.tone),
        font: derived.map(|d| d.font),
        focus: derived.map(|d| d.focus),
        darkest: darkest_of(&palette),
        focus_effect,
    })
}

/// Load and compile the theme at `path`.
pub fn compile_file(path: &Path, selector: &str) -> Result<CompiledTheme> {
    let theme = ThemeFile::load(path)?;
    compile(&theme, selector)
}

impl CompiledTheme {
    /// CSS rule blocks for this theme.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn report(&self) -> ThemeReport {
        ThemeReport {
            selector: self.selector.clone(),
            background: self.background.map(|c| c.hex()),
            tone: self.tone,
            font: self.font.map(|c| c.hex()),
            focus: self.focus.map(|c| c.hex()),
            darkest: self.darkest.map(|c| c.hex()),
            focus_rule: self.focus_effect.map(|e| FocusRule {
                property: e.property().to_string(),
                value: e.value(),
            }),
        }
    }
}

impl fmt::Display for CompiledTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        if let Some(bg) = self.background {
            writeln!(f, "  background-color: {bg};")?;
        }
        if let Some(font) = self.font {
            writeln!(f, "  color: {font};")?;
        }
        if let Some(focus) = self.focus {
            writeln!(f, "  --focus-color: {focus};")?;
        }
        if let Some(darkest) = self.darkest {
            writeln!(f, "  --darkest: {darkest};")?;
        }
        writeln!(f, "}}")?;

        if let Some(effect) = self.focus_effect {
            writeln!(f, "{}:focus {{", self.selector)?;
            writeln!(f, "  {effect};")?;
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/// JSON form of a compiled theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeReport {
    pub selector: String,
    pub background: Option<String>,
    pub tone: Option<Tone>,
    pub font: Option<String>,
    pub focus: Option<String>,
    pub darkest: Option<String>,
    pub focus_rule: Option<FocusRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusRule {
    pub property: String,
    pub value: String,
}
