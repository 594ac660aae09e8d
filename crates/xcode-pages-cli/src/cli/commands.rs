use clap::{Args, Subcommand};

/// Available xcode-pages subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every environment variable as KEY=value
    ///
    /// Add an external build target running this command to see what Xcode
    /// passes to build tools.
    Env,

    /// Print the space-delimited directories holding .h, .m and .mm files
    Input,

    /// Print the project number built from agvtool's versions
    Version,

    /// Print the Doxygen configuration stream without running Doxygen
    Config(ConfigArgs),

    /// Generate HTML documentation with Doxygen
    Doxygen,

    /// Generate documentation and package it as a docset
    Docset,

    /// Generate documentation, install the docset and load it in Xcode
    Install,
}

/// Arguments for the config command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Include the docset settings used by `docset` and `install`
    #[arg(long)]
    pub docset: bool,
}
