//! Source directory discovery.
//!
//! Finds every directory below the project root that holds Objective-C
//! headers or sources. These directories become Doxygen's `INPUT` list.
//!
//! Doxygen separates `INPUT` entries with spaces, so paths are emitted as-is
//! and must not contain spaces themselves. Paths with spaces are not quoted or
//! escaped; a project laid out that way gets a broken `INPUT` list.

use crate::error::Result;
use indexmap::IndexSet;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Extensions of files that Doxygen should read.
pub const SOURCE_EXTENSIONS: [&str; 3] = ["h", "m", "mm"];

/// Directory name used when sources sit directly in the root.
const CURRENT_DIR: &str = ".";

/// Collect the distinct directories holding source files, relative to `root`.
///
/// Directories come out in the order they are first met while walking the
/// tree sorted by file name, so the same tree always yields the same list.
/// Hidden files and directories below the root are skipped, as a shell `**`
/// glob would.
pub fn source_directories(root: &Path) -> Result<IndexSet<String>> {
    let mut dirs = IndexSet::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_source(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let dir = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            _ => CURRENT_DIR.to_string(),
        };

        if !dirs.contains(&dir) {
            debug!(%dir, "found source directory");
            dirs.insert(dir);
        }
    }

    Ok(dirs)
}

/// Space-delimited list of source directories, ready for Doxygen's `INPUT`.
pub fn input(root: &Path) -> Result<String> {
    let dirs = source_directories(root)?;
    Ok(dirs.into_iter().collect::<Vec<_>>().join(" "))
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
