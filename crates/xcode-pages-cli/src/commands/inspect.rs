//! Commands printing what a documentation build would use.
//!
//! Results go to stdout, one value per command, so they can be captured by
//! shell scripts in other build phases.

use crate::cli::ConfigArgs;
use crate::commands::Session;
use crate::error::Result;

/// Print the environment as sorted `KEY=value` lines.
pub fn env(session: &Session) -> Result<()> {
    for (key, value) in session.pipeline().env().iter() {
        println!("{}={}", key, value);
    }
    Ok(())
}

/// Print the space-delimited source directories.
pub fn input(session: &Session) -> Result<()> {
    println!("{}", session.pipeline().input()?);
    Ok(())
}

/// Print the project number, e.g. `v1.2 (7)`.
pub async fn version(session: &Session) -> Result<()> {
    let number = session.pipeline().versions().project_number().await?;
    println!("{}", number);
    Ok(())
}

/// Print the configuration stream Doxygen would receive.
pub async fn config(session: &Session, args: &ConfigArgs) -> Result<()> {
    let config = session.pipeline().configuration(args.docset).await?;
    print!("{}", config);
    Ok(())
}
