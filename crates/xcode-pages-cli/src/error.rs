//! Error handling for the xcode-pages CLI.
//!
//! Library failures arrive as [`PagesError`] and keep their diagnostics.
//! Settings problems get their own [`ConfigError`] so the report can point at
//! the settings file or environment variable that caused them.

mod report;

use std::path::PathBuf;
use thiserror::Error;
use xcode_pages::PagesError;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The documentation pipeline failed
    #[error(transparent)]
    Pages(#[from] PagesError),

    /// I/O errors outside the pipeline (resolving the project root, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested settings file does not exist
    #[error("Settings file not found: {}\n\nHint: Check the --config path", .0.display())]
    NotFound(PathBuf),

    /// A settings source holds a value of the wrong type or an unknown key
    #[error("{0}\n\nHint: Check xcode-pages.toml and XCODE_PAGES_* environment variables")]
    Invalid(#[from] Box<figment::Error>),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
