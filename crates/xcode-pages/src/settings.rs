//! Tool names and tunable options.
//!
//! Every field has a default, so an empty settings file (or none at all)
//! gives the stock Xcode toolchain behaviour.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Apple's generic versioning tool
    pub version_tool: String,

    /// Doxygen binary
    pub doxygen: String,

    /// Build tool used to package and install the docset
    pub make: String,

    /// Interpreter for the IDE reload script
    pub script_host: String,

    /// Application told to load the installed docsets
    pub ide_app: String,

    /// Where `make install` puts docsets; derived from `HOME` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docset_dir: Option<PathBuf>,

    /// Emitted as `DOCSET_BUNDLE_ID` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docset_bundle_id: Option<String>,

    /// Goes between the marketing version and the parenthesised build version
    pub number_separator: String,

    /// Emitted as `HAVE_DOT` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub have_dot: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_tool: "agvtool".to_string(),
            doxygen: "doxygen".to_string(),
            make: "make".to_string(),
            script_host: "osascript".to_string(),
            ide_app: "Xcode".to_string(),
            docset_dir: None,
            docset_bundle_id: None,
            number_separator: " ".to_string(),
            have_dot: None,
        }
    }
}
