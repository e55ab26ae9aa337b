use std::path::PathBuf;

use ftui_contrast::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid theme file {path}: {source}")]
    ThemeFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("palette is empty; at least one color is required")]
    EmptyPalette,

    #[error("invalid contrast settings: {0}")]
    Config(#[from] ConfigError),
}

impl ThemeError {
    /// Process exit code: 2 for bad input, 1 for I/O and internal failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidColor(_) | Self::EmptyPalette | Self::Config(_) | Self::ThemeFile { .. } => 2,
            Self::Read { .. } | Self::Write { .. } | Self::Output(_) | Self::Serialize(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_with_two() {
        assert_eq!(ThemeError::InvalidColor("#zz".into()).exit_code(), 2);
        assert_eq!(ThemeError::EmptyPalette.exit_code(), 2);
        assert_eq!(
            ThemeError::from(ConfigError::FontContrastOutOfRange(0.0)).exit_code(),
            2
        );
    }

    #[test]
    fn io_errors_exit_with_one() {
        let error = ThemeError::Read {
            path: PathBuf::from("theme.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("theme.json"));
    }

    #[test]
    fn invalid_color_message_quotes_literal() {
        let msg = ThemeError::InvalidColor("bogus".into()).to_string();
        assert_eq!(msg, "invalid color literal `bogus`");
    }
}
