use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{Result, ThemeError};
use crate::inspect::{DarkestArgs, InspectArgs, run_darkest, run_inspect};
use crate::logging::init_logging;
use crate::theme::{DEFAULT_SELECTOR, compile_file};

#[derive(Debug, Parser)]
#[command(
    name = "theme_frankentui",
    about = "Derive readable font, focus, and palette colors for FrankenTUI themes",
    version
)]
pub struct Cli {
    /// Log derivation decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report luminance, tone, and derived colors for one color.
    Inspect(InspectArgs),

    /// Print the darkest of the given colors.
    Darkest(DarkestArgs),

    /// Compile a JSON theme file into CSS.
    Compile(CompileArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Theme file to compile.
    pub theme: PathBuf,

    /// Selector for the generated rule blocks.
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Emit a JSON report instead of CSS.
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

pub fn run_with_output(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Inspect(args) => run_inspect(args, out),
        Commands::Darkest(args) => run_darkest(args, out),
        Commands::Compile(args) => run_compile(args, out),
    }
}

pub fn run_compile(args: CompileArgs, out: &mut impl Write) -> Result<()> {
    let compiled = compile_file(&args.theme, &args.selector)?;
    let rendered = if args.json {
        let mut text = serde_json::to_string_pretty(&compiled.report())?;
        text.push('\n');
        text
    } else {
        compiled.to_css()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|source| ThemeError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote compiled theme");
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_inspect_with_overrides() {
        let cli = Cli::try_parse_from([
            "theme_frankentui",
            "inspect",
            "#1e1e2e",
            "--luminance-threshold",
            "120",
            "--font-contrast",
            "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.color, "#1e1e2e");
                assert_eq!(args.contrast.luminance_threshold, 120.0);
                assert_eq!(args.contrast.font_contrast, 0.5);
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn inspect_defaults_to_named_thresholds() {
        let cli = Cli::try_parse_from(["theme_frankentui", "inspect", "white"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.contrast.luminance_threshold, ftui_contrast::LUMINANCE_THRESHOLD);
        assert_eq!(args.contrast.font_contrast, ftui_contrast::FONT_CONTRAST);
    }

    #[test]
    fn parses_darkest_list_and_global_verbose() {
        let cli =
            Cli::try_parse_from(["theme_frankentui", "darkest", "white", "black", "-v"]).unwrap();
        assert!(cli.verbose);
        let Commands::Darkest(args) = cli.command else {
            panic!("expected darkest");
        };
        assert_eq!(args.colors, vec!["white", "black"]);
    }

    #[test]
    fn compile_selector_defaults_to_root() {
        let cli = Cli::try_parse_from(["theme_frankentui", "compile", "theme.json"]).unwrap();
        let Commands::Compile(args) = cli.command else {
            panic!("expected compile");
        };
        assert_eq!(args.selector, ":root");
        assert!(args.output.is_none());
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["theme_frankentui"]).is_err());
    }
}
