//! Doxygen documentation for Xcode projects.
//!
//! Meant to run from an Xcode external build target. Xcode describes the
//! project through environment variables; this crate turns them, plus the
//! layout of the source tree and the versions reported by `agvtool`, into a
//! Doxygen configuration, runs Doxygen, and optionally packages and installs
//! the result as a docset.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use xcode_pages::{Environment, Pipeline, Settings, SystemRunner};
//!
//! # async fn run() -> xcode_pages::Result<()> {
//! let pipeline = Pipeline::new(
//!     std::env::current_dir().unwrap(),
//!     Environment::capture(),
//!     Settings::default(),
//!     Arc::new(SystemRunner),
//! );
//! pipeline.doxygen_docset().await?;
//! # Ok(())
//! # }
//! ```

pub mod docset;
pub mod doxyfile;
pub mod doxygen;
pub mod env;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod runner;
pub mod scanner;
pub mod settings;
pub mod version;

pub use doxyfile::{titleize, DoxyConfig};
pub use env::Environment;
pub use error::{ExitCode, PagesError, Result};
pub use pipeline::Pipeline;
pub use runner::{CommandRunner, Completed, Invocation, SystemRunner};
pub use settings::Settings;
pub use version::{resolve_placeholders, VersionResolver, Versions};
