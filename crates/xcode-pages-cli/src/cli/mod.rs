//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `xcode-pages env` - Print the environment Xcode passed in
//! - `xcode-pages input` - Print Doxygen's input directories
//! - `xcode-pages version` - Print the project number
//! - `xcode-pages config` - Print the Doxygen configuration stream
//! - `xcode-pages doxygen` - Generate HTML documentation
//! - `xcode-pages docset` - Generate and package a docset
//! - `xcode-pages install` - Generate, install and load the docset in Xcode

mod commands;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, ConfigArgs};

/// Doxygen documentation for Xcode projects
#[derive(Parser, Debug)]
#[command(
    name = "xcode-pages",
    version,
    about = "Doxygen documentation for Xcode projects",
    long_about = "Builds Doxygen documentation from an Xcode external build target.\n\
                  Reads PROJECT_NAME and HOME from the environment Xcode provides, asks\n\
                  agvtool for the project versions and feeds Doxygen its configuration\n\
                  on stdin. A Doxyfile in the project root is appended as overrides."
)]
pub struct Cli {
    /// Project root to scan for sources
    ///
    /// Defaults to the current directory, which is the source root when run
    /// from an Xcode external build target.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file to load instead of xcode-pages.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
