//! Doxygen configuration stream.
//!
//! Doxygen reads its configuration as `KEY = value` lines and lets later
//! lines override earlier ones. The stream therefore starts with defaults
//! derived from the Xcode environment and ends with the project's own
//! `Doxyfile`, if there is one, copied verbatim.

use crate::env::Environment;
use crate::error::{PagesError, Result};
use crate::layout;
use crate::settings::Settings;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Override file looked up in the project root.
pub const OVERRIDE_FILE: &str = "Doxyfile";

/// Column keys are padded to.
const KEY_WIDTH: usize = 22;

static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("acronym pattern is valid"));
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("camel pattern is valid"));

/// Turn an identifier-like name into a title: `MyCoolApp` becomes `My Cool App`.
///
/// Words are split at camel-case boundaries and at `_`, `-` and whitespace,
/// then each word is capitalised. A run of capitals is kept together as one
/// word, so `HTMLParser` becomes `Html Parser`.
pub fn titleize(name: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(name, "${1}_${2}");
    let split = CAMEL_BOUNDARY.replace_all(&split, "${1}_${2}");

    split
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}

/// Ordered Doxygen configuration, plus an optional verbatim tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoxyConfig {
    entries: Vec<(String, String)>,
    overrides: Option<String>,
}

impl DoxyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default configuration for the project.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::MissingVariable` when `PROJECT_NAME` is unset.
    pub fn defaults(
        env: &Environment,
        settings: &Settings,
        project_number: &str,
        input: &str,
    ) -> Result<Self> {
        let project_name = env.project_name()?;
        let mut config = Self::new();

        config
            .set("PROJECT_NAME", quoted(&titleize(project_name)))
            .set("PROJECT_NUMBER", quoted(project_number))
            .set("OUTPUT_DIRECTORY", quoted(&layout::output_directory(env)?))
            .set("TAB_SIZE", "4")
            .set("EXTENSION_MAPPING", "h=Objective-C")
            .set("INPUT", input)
            .set("SOURCE_BROWSER", "YES")
            .set("HTML_TIMESTAMP", "NO")
            .set("GENERATE_LATEX", "NO");

        if let Some(have_dot) = settings.have_dot {
            config.set("HAVE_DOT", yes_no(have_dot));
        }

        Ok(config)
    }

    /// Ask Doxygen for a docset Makefile next to the HTML output.
    pub fn generate_docset(&mut self, settings: &Settings) -> &mut Self {
        self.set("GENERATE_DOCSET", "YES");
        if let Some(bundle_id) = &settings.docset_bundle_id {
            self.set("DOCSET_BUNDLE_ID", bundle_id.as_str());
        }
        self
    }

    /// Append a `KEY = value` line.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Value of the last line setting `key`, ignoring the override tail.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append the contents of `<root>/Doxyfile` verbatim, if the file exists.
    ///
    /// Returns whether an override file was found.
    pub fn append_override(&mut self, root: &Path) -> Result<bool> {
        let path = root.join(OVERRIDE_FILE);
        if !path.is_file() {
            return Ok(false);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| PagesError::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "appending override file");
        self.overrides = Some(contents);
        Ok(true)
    }

    pub fn overrides(&self) -> Option<&str> {
        self.overrides.as_deref()
    }
}

impl fmt::Display for DoxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            let line = format!("{:<width$} = {}", key, value, width = KEY_WIDTH);
            writeln!(f, "{}", line.trim_end())?;
        }
        if let Some(overrides) = &self.overrides {
            f.write_str(overrides)?;
        }
        Ok(())
    }
}
