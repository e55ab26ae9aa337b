//! `inspect` and `darkest` subcommands.

use std::io::Write;

use clap::Args;
use ftui_contrast::{
    Color, ContrastConfig, FONT_CONTRAST, LUMINANCE_THRESHOLD, Tone, darkest_index, derive,
};
use serde::Serialize;

use crate::error::{Result, ThemeError};
use crate::parse::require_color;

#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Luminance below which a color counts as dark (0-255).
    #[arg(long, default_value_t = LUMINANCE_THRESHOLD)]
    pub luminance_threshold: f64,

    /// Font contrast factor (0-1].
    #[arg(long, default_value_t = FONT_CONTRAST)]
    pub font_contrast: f64,
}

impl Default for ContrastArgs {
    fn default() -> Self {
        Self {
            luminance_threshold: LUMINANCE_THRESHOLD,
            font_contrast: FONT_CONTRAST,
        }
    }
}

impl ContrastArgs {
    pub fn config(&self) -> Result<ContrastConfig> {
        Ok(ContrastConfig::new()
            .luminance_threshold(self.luminance_threshold)
            .font_contrast(self.font_contrast)
            .validated()?)
    }
}

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Color literal (`#rrggbb`, `#rgb`, `rgb(r, g, b)`, or a name).
    pub color: String,

    #[command(flatten)]
    pub contrast: ContrastArgs,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DarkestArgs {
    /// Candidate colors, in order. Ties go to the earliest.
    pub colors: Vec<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub color: String,
    pub luminance: f64,
    pub saturation: f64,
    pub tone: Tone,
    pub font: String,
    pub focus: String,
}

impl ColorReport {
    #[must_use]
    pub fn new(color: Color, config: &ContrastConfig) -> Self {
        let derived = derive(color, config);
        Self {
            color: color.hex(),
            luminance: color.luminance(),
            saturation: color.saturation(),
            tone: derived.tone,
            font: derived.font.hex(),
            focus: derived.focus.hex(),
        }
    }
}

pub fn run_inspect(args: InspectArgs, out: &mut impl Write) -> Result<()> {
    let config = args.contrast.config()?;
    let color = require_color(&args.color)?;
    let report = ColorReport::new(color, &config);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let tone = match report.tone {
        Tone::Dark => "dark",
        Tone::Light => "light",
    };
    writeln!(out, "color       {}", report.color)?;
    writeln!(out, "luminance   {:.2}", report.luminance)?;
    writeln!(out, "saturation  {:.1}%", report.saturation)?;
    writeln!(out, "tone        {tone}")?;
    writeln!(out, "font        {}", report.font)?;
    writeln!(out, "focus       {}", report.focus)?;
    Ok(())
}

pub fn run_darkest(args: DarkestArgs, out: &mut impl Write) -> Result<()> {
    let palette = args
        .colors
        .iter()
        .map(|literal| require_color(literal))
        .collect::<Result<Vec<_>>>()?;
    let index = darkest_index(&palette).ok_or(ThemeError::EmptyPalette)?;
    let darkest = palette[index];

    if args.json {
        let value = serde_json::json!({
            "index": index,
            "color": darkest.hex(),
            "luminance": darkest.luminance(),
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{darkest}")?;
    }
    Ok(())
}
