//! Terminal front end for the tic-tac-toe engine.
//!
//! The front end is the display collaborator: it drives a
//! [`tictactoe::Game`], renders the board with ratatui and turns engine
//! notifications into status text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod messages;
pub mod script;
pub mod terminal;
mod ui;

pub use app::{App, AppAction};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Palette, ThemeConfig, TuiConfig};
