//! Snapshot of the environment handed over by Xcode.
//!
//! Xcode passes everything an external build target needs through the Unix
//! environment. The snapshot is taken once at the entry point and threaded
//! through every component, so nothing below this module reads `std::env`.

use crate::error::{PagesError, Result};
use std::collections::BTreeMap;
use std::ffi::OsString;
use tracing::debug;

/// Name of the Xcode project, e.g. `MyCoolApp`.
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// Home directory of the user running the build.
pub const HOME: &str = "HOME";

fn lossy(key: OsString, value: OsString) -> (String, String) {
    match (key.into_string(), value.into_string()) {
        (Ok(key), Ok(value)) => (key, value),
        (key, value) => {
            let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
            let value = value.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
            debug!(name = %key, "environment variable is not valid Unicode");
            (key, value)
        }
    }
}

/// Read-only view of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    ///
    /// Names and values that are not valid Unicode are kept, with invalid
    /// sequences replaced by `U+FFFD`.
    pub fn capture() -> Self {
        std::env::vars_os().map(|(key, value)| lossy(key, value)).collect()
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up a variable that must be present and non-empty.
    pub fn require(&self, name: &str) -> Result<&str> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(PagesError::missing_variable(name)),
        }
    }

    /// The `PROJECT_NAME` variable.
    pub fn project_name(&self) -> Result<&str> {
        self.require(PROJECT_NAME)
    }

    /// All variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        let env: Environment = [("PROJECT_NAME", "Foo")].into_iter().collect();
        assert_eq!(env.project_name().unwrap(), "Foo");
    }

    #[test]
    fn test_require_missing_or_empty() {
        let env: Environment = [("HOME", "")].into_iter().collect();
        assert!(matches!(
            env.require(HOME),
            Err(PagesError::MissingVariable { ref name }) if name == "HOME"
        ));
        assert!(env.project_name().is_err());
    }

    #[test]
    fn test_iter_is_sorted() {
        let env: Environment = [("B", "2"), ("A", "1")].into_iter().collect();
        let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_capture_sees_path() {
        // PATH is set in any sane test environment
        let env = Environment::capture();
        assert!(!env.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_kept() {
        use std::os::unix::ffi::OsStringExt;

        let (key, value) = lossy(
            OsString::from("SRCROOT"),
            OsString::from_vec(b"/Users/caf\xe9".to_vec()),
        );
        assert_eq!(key, "SRCROOT");
        assert_eq!(value, "/Users/caf\u{FFFD}");
    }
}
