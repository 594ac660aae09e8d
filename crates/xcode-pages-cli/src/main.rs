//! xcode-pages entry point.
//!
//! Parses arguments, sets up logging, then runs one command on a
//! single-threaded runtime: every external tool is awaited in turn.

use clap::Parser;
use miette::Result;
use xcode_pages_cli::cli::{Cli, Command};
use xcode_pages_cli::commands::{generate, inspect, Session};
use xcode_pages_cli::{error, logger, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result: xcode_pages_cli::Result<()> = async {
        let session = Session::open(args.root.as_deref(), args.config.as_deref())?;
        match &args.command {
            Command::Env => inspect::env(&session),
            Command::Input => inspect::input(&session),
            Command::Version => inspect::version(&session).await,
            Command::Config(config_args) => inspect::config(&session, config_args).await,
            Command::Doxygen => generate::doxygen(&session).await,
            Command::Docset => generate::docset(&session).await,
            Command::Install => generate::install(&session).await,
        }
    }
    .await;

    result.map_err(error::cli_error_to_miette)
}
