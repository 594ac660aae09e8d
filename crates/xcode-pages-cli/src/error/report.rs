//! Miette report conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert a CliError to a miette Report.
///
/// Pipeline errors keep their diagnostic code and help text.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Pages(e) => Report::new(e),
        other => miette::miette!("{}", other),
    }
}
