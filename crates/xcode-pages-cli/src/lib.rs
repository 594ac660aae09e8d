//! xcode-pages CLI.
//!
//! Thin command-line layer over the `xcode-pages` library, meant to be the
//! command of an Xcode external build target:
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - Command implementations
//! - [`config`] - Settings loading from file and environment
//! - [`error`] - CLI errors and miette reports
//! - [`logger`] - Tracing setup
//! - [`ui`] - Status lines on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
