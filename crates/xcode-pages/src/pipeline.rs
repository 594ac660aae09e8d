//! The three documentation builds Xcode can trigger.
//!
//! Each step waits for the previous one and any failure stops the run, so a
//! broken Doxygen run never gets packaged or installed.

use crate::docset::Docset;
use crate::doxyfile::DoxyConfig;
use crate::doxygen::Doxygen;
use crate::env::Environment;
use crate::error::Result;
use crate::layout;
use crate::runner::CommandRunner;
use crate::scanner;
use crate::settings::Settings;
use crate::version::VersionResolver;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Documentation build for one project root.
pub struct Pipeline {
    root: PathBuf,
    env: Environment,
    settings: Settings,
    runner: Arc<dyn CommandRunner>,
}

impl Pipeline {
    pub fn new(
        root: impl Into<PathBuf>,
        env: Environment,
        settings: Settings,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            root: root.into(),
            env,
            settings,
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Space-delimited source directories.
    pub fn input(&self) -> Result<String> {
        scanner::input(&self.root)
    }

    pub fn versions(&self) -> VersionResolver<'_> {
        VersionResolver::new(self.runner.as_ref(), &self.root, &self.env, &self.settings)
    }

    /// Absolute path of Doxygen's HTML output directory.
    pub fn html_dir(&self) -> Result<PathBuf> {
        Ok(self.root.join(layout::html_output_directory(&self.env)?))
    }

    /// Full configuration stream: defaults, then the project's `Doxyfile`.
    pub async fn configuration(&self, docset: bool) -> Result<DoxyConfig> {
        // Fail on a missing PROJECT_NAME before running any tool
        self.env.project_name()?;

        let input = self.input()?;
        let project_number = self.versions().project_number().await?;

        let mut config = DoxyConfig::defaults(&self.env, &self.settings, &project_number, &input)?;
        if docset {
            config.generate_docset(&self.settings);
        }
        config.append_override(&self.root)?;
        Ok(config)
    }

    /// Generate HTML documentation.
    pub async fn doxygen(&self) -> Result<()> {
        self.generate(false).await
    }

    /// Generate documentation and package it as a docset.
    pub async fn doxygen_docset(&self) -> Result<()> {
        let html_dir = self.html_dir()?;
        self.generate(true).await?;
        Docset::new(self.runner.as_ref(), &self.settings)
            .package(&html_dir)
            .await
    }

    /// Generate documentation, install the docset and reload it in the IDE.
    ///
    /// Returns the installed docset paths.
    pub async fn doxygen_docset_install(&self) -> Result<Vec<PathBuf>> {
        let html_dir = self.html_dir()?;
        let docset_dir = layout::docset_install_directory(&self.env, &self.settings)?;
        self.generate(true).await?;
        Docset::new(self.runner.as_ref(), &self.settings)
            .install(&html_dir, &docset_dir)
            .await
    }

    async fn generate(&self, docset: bool) -> Result<()> {
        let config = self.configuration(docset).await?;
        Doxygen::new(self.runner.as_ref(), &self.settings)
            .generate(&self.root, &config)
            .await?;
        info!(output = %layout::output_directory(&self.env)?, "documentation generated");
        Ok(())
    }
}
