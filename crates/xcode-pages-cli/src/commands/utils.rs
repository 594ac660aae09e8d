//! Shared setup for command implementations.

use crate::config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use xcode_pages::{Environment, Pipeline, SystemRunner};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Everything a command needs: project root, environment and settings.
pub struct Session {
    pipeline: Pipeline,
}

impl Session {
    /// Capture the environment, resolve the root and load settings.
    pub fn open(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = root.map_or_else(|| cwd.clone(), |r| resolve_path(r, &cwd));
        let config_path = config_path.map(|p| resolve_path(p, &cwd));

        let settings = config::load(&root, config_path.as_deref())?;
        debug!(root = %root.display(), ?settings, "session");

        Ok(Self {
            pipeline: Pipeline::new(root, Environment::capture(), settings, Arc::new(SystemRunner)),
        })
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(Path::new("/abs"), cwd), PathBuf::from("/abs"));
        assert_eq!(resolve_path(Path::new("rel/dir"), cwd), PathBuf::from("/work/rel/dir"));
    }
}
