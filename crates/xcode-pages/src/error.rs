//! Error types for the documentation pipeline.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = PagesError> = std::result::Result<T, E>;

/// Errors that can occur while scanning, versioning, generating or installing.
#[derive(Debug, Error, Diagnostic)]
pub enum PagesError {
    /// A file or directory could not be read or written
    #[error("I/O error at {}: {source}", .path.display())]
    #[diagnostic(code(xcode_pages::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source tree could not be walked
    #[error("failed to scan source tree: {0}")]
    #[diagnostic(
        code(xcode_pages::walk),
        help("Check that the project root exists and is readable")
    )]
    Walk(#[from] walkdir::Error),

    /// A required environment variable is unset or empty
    #[error("environment variable {name} is not set")]
    #[diagnostic(
        code(xcode_pages::missing_variable),
        help("Run from an Xcode external build target, or export {name} yourself")
    )]
    MissingVariable { name: String },

    /// An external program is not on the PATH
    #[error("'{program}' not found in PATH")]
    #[diagnostic(
        code(xcode_pages::tool_not_found),
        help("Install {program} or point the matching XCODE_PAGES_* setting at it")
    )]
    ToolNotFound { program: String },

    /// An external program could not be started or talked to
    #[error("failed to run '{program}': {source}")]
    #[diagnostic(code(xcode_pages::spawn_failed))]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external program exited with a non-zero status
    #[error("'{program}' exited with {code}")]
    #[diagnostic(code(xcode_pages::tool_failed))]
    ToolFailed {
        program: String,
        code: ExitCode,
        #[help]
        output: String,
    },

    /// Doxygen itself exited with a non-zero status
    #[error("documentation generation failed: doxygen exited with {code}")]
    #[diagnostic(code(xcode_pages::generation_failed))]
    GenerationFailed {
        code: ExitCode,
        #[help]
        output: String,
    },
}

/// Exit code of a finished child; `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub Option<i32>);

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(code) => write!(f, "code {}", code),
            None => f.write_str("a signal"),
        }
    }
}

impl PagesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Classify a spawn failure: a missing binary gets its own variant.
    pub fn spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ToolNotFound { program }
        } else {
            Self::Spawn { program, source }
        }
    }

    pub fn tool_failed(program: impl Into<String>, code: Option<i32>, output: String) -> Self {
        Self::ToolFailed {
            program: program.into(),
            code: ExitCode(code),
            output,
        }
    }
}
