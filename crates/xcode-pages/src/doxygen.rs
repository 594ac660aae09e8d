//! Doxygen invocation.

use crate::doxyfile::DoxyConfig;
use crate::error::{ExitCode, PagesError, Result};
use crate::runner::{Completed, CommandRunner, Invocation};
use crate::settings::Settings;
use std::path::Path;
use tracing::info;

/// Runs Doxygen with its configuration piped through stdin.
pub struct Doxygen<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> Doxygen<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    /// `doxygen -` in `root`, reading `config` from stdin.
    pub fn invocation(&self, root: &Path, config: &DoxyConfig) -> Invocation {
        Invocation::new(&self.settings.doxygen)
            .arg("-")
            .stdin(config.to_string())
            .current_dir(root)
            .relay(true)
    }

    /// Generate documentation for the project at `root`.
    ///
    /// Doxygen's stdout is echoed line by line as it runs.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::ToolNotFound` when Doxygen is missing and
    /// `PagesError::GenerationFailed` when it exits with a non-zero status.
    pub async fn generate(&self, root: &Path, config: &DoxyConfig) -> Result<Completed> {
        info!(root = %root.display(), "running doxygen");

        let completed = self.runner.run(&self.invocation(root, config)).await?;
        if !completed.is_success() {
            return Err(PagesError::GenerationFailed {
                code: ExitCode(completed.code),
                output: completed.combined_output(),
            });
        }

        Ok(completed)
    }
}
