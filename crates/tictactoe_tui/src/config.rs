//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File receiving tracing output while the terminal is in use.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Board colours.
    #[serde(default)]
    theme: ThemeConfig,
}

/// Colour names (or `#rrggbb`) for the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Colour of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Colour of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Background of the highlighted square.
    #[serde(default = "default_cursor_color")]
    cursor_color: String,
}

/// Parsed theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of the highlighted square.
    pub cursor: Color,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_cursor_color() -> String {
    "white".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            cursor_color: default_cursor_color(),
        }
    }
}

impl ThemeConfig {
    /// Parses the configured colour names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first colour ratatui does not recognise.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            cursor: parse_color("cursor_color", &self.cursor_color)?,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Unknown colour for {}: {:?}", field, value)))
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Parses and validates TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML or an unknown colour.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::parse(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads an explicit config file, or the default file if it exists.
    ///
    /// A missing explicit path is an error; a missing default file yields
    /// the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a file that should be loaded is unreadable
    /// or invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        match explicit {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => Ok(Self::default()),
        }
    }

    /// Parsed board colours.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown colour name.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        self.theme.palette()
    }
}
