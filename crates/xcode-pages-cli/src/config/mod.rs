//! Settings loading with figment.
//!
//! Priority: environment (`XCODE_PAGES_*`) > settings file > defaults.
//! The settings file is `xcode-pages.toml` in the project root, or whatever
//! `--config` points at.

mod tests;

use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use xcode_pages::Settings;

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "xcode-pages.toml";

/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "XCODE_PAGES_";

/// Settings file to read, if any.
///
/// An explicit path must exist; the default one is optional.
fn settings_file(root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let default_path = root.join(SETTINGS_FILE);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}

/// Figment holding every settings source, lowest priority first.
pub fn figment(root: &Path, explicit: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));

    if let Some(path) = settings_file(root, explicit)? {
        debug!(path = %path.display(), "loading settings file");
        figment = figment.merge(Toml::file(path));
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

/// Load settings for the project at `root`.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Settings> {
    figment(root, explicit)?
        .extract()
        .map_err(|e| ConfigError::Invalid(Box::new(e)).into())
}
