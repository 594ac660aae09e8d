//! Docset packaging and installation.
//!
//! With `GENERATE_DOCSET = YES`, Doxygen writes a Makefile into its HTML
//! output directory. `make` builds the `.docset` bundle there and
//! `make install` copies it into the shared documentation directory. A running
//! Xcode only notices the new bundle once it is told to load it, which is done
//! through a throwaway AppleScript.

use crate::error::{PagesError, Result};
use crate::runner::{CommandRunner, Invocation};
use crate::settings::Settings;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name suffix of a documentation bundle.
pub const DOCSET_SUFFIX: &str = ".docset";

/// Names of the `.docset` bundles in `html_dir`, sorted.
pub fn bundles(html_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(html_dir).map_err(|e| PagesError::io(html_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PagesError::io(html_dir, e))?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(DOCSET_SUFFIX) && name.len() > DOCSET_SUFFIX.len() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

fn applescript_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// AppleScript telling `ide_app` to load each bundle from `docset_dir`.
pub fn reload_script(ide_app: &str, docset_dir: &Path, bundles: &[String]) -> String {
    let mut script = format!("tell application {}\n", applescript_string(ide_app));
    for bundle in bundles {
        let path = docset_dir.join(bundle);
        script.push_str(&format!(
            "\tload documentation set with path {}\n",
            applescript_string(&path.to_string_lossy())
        ));
    }
    script.push_str("end tell\n");
    script
}

/// Builds and installs docsets with `make`.
pub struct Docset<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> Docset<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    /// Run the docset Makefile's default target in `html_dir`.
    pub async fn package(&self, html_dir: &Path) -> Result<()> {
        info!(dir = %html_dir.display(), "packaging docset");
        self.make(html_dir, None).await
    }

    /// Run `make install` in `html_dir`, then have the IDE load every
    /// installed bundle from `docset_dir`.
    ///
    /// Returns the paths the IDE was asked to load.
    pub async fn install(&self, html_dir: &Path, docset_dir: &Path) -> Result<Vec<PathBuf>> {
        info!(dir = %html_dir.display(), "installing docset");
        self.make(html_dir, Some("install")).await?;

        let bundles = bundles(html_dir)?;
        if bundles.is_empty() {
            warn!(dir = %html_dir.display(), "no docset bundles found, skipping IDE reload");
            return Ok(Vec::new());
        }

        let script = reload_script(&self.settings.ide_app, docset_dir, &bundles);
        self.run_script(&script).await?;

        Ok(bundles.iter().map(|b| docset_dir.join(b)).collect())
    }

    async fn make(&self, dir: &Path, target: Option<&str>) -> Result<()> {
        let program = &self.settings.make;
        let mut invocation = Invocation::new(program).current_dir(dir).relay(true);
        if let Some(target) = target {
            invocation = invocation.arg(target);
        }
        self.runner.run(&invocation).await?.check(program)?;
        Ok(())
    }

    /// Write `script` to a temporary file and hand it to the script host.
    ///
    /// The file is removed when this returns, whatever the outcome.
    async fn run_script(&self, script: &str) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("xcode-pages-")
            .suffix(".applescript")
            .tempfile()
            .map_err(|e| PagesError::io(std::env::temp_dir(), e))?;
        let path = file.path().to_path_buf();
        file.write_all(script.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| PagesError::io(&path, e))?;

        let program = &self.settings.script_host;
        let invocation = Invocation::new(program).arg(path.to_string_lossy());
        self.runner.run(&invocation).await?.check(program)?;
        Ok(())
    }
}
