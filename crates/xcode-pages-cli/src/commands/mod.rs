//! Command implementations.
//!
//! - [`inspect`] - `env`, `input`, `version`, `config`: print what a build would use
//! - [`generate`] - `doxygen`, `docset`, `install`: run the documentation build
//!
//! Every command starts from a [`Session`], which captures the environment
//! and loads settings exactly once.

pub mod generate;
pub mod inspect;
pub(crate) mod utils;

pub use utils::Session;
