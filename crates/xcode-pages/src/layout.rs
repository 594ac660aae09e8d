//! Where Doxygen writes and where docsets get installed.

use crate::env::{Environment, HOME};
use crate::error::Result;
use crate::settings::Settings;
use std::path::PathBuf;

/// Name of Doxygen's HTML output subdirectory.
pub const HTML_DIR: &str = "html";

/// Shared docset location below the home directory.
pub const SHARED_DOCSETS: &str = "Library/Developer/Shared/Documentation/DocSets";

/// Doxygen output directory, `<PROJECT_NAME>Pages`.
pub fn output_directory(env: &Environment) -> Result<String> {
    Ok(format!("{}Pages", env.project_name()?))
}

/// Doxygen HTML output directory, `<PROJECT_NAME>Pages/html`.
pub fn html_output_directory(env: &Environment) -> Result<String> {
    Ok(format!("{}/{}", output_directory(env)?, HTML_DIR))
}

/// Directory docsets are installed into.
pub fn docset_install_directory(env: &Environment, settings: &Settings) -> Result<PathBuf> {
    match &settings.docset_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(PathBuf::from(env.require(HOME)?).join(SHARED_DOCSETS)),
    }
}
