//! Logging setup for the xcode-pages CLI.
//!
//! Logs go to stderr. Stdout is reserved for command results and for
//! Doxygen's relayed output, which Xcode shows in its build log.
//!
//! # Example
//!
//! ```rust,no_run
//! use xcode_pages_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Starting documentation build");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "xcode_pages=debug,xcode_pages_cli=debug";

/// Filter used with `--quiet`.
const QUIET_FILTER: &str = "xcode_pages=error,xcode_pages_cli=error";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "xcode_pages=info,xcode_pages_cli=info";

/// Pick the log filter for the given flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for xcode-pages crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. INFO for xcode-pages crates
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them even when stderr is
/// not a terminal (Xcode's build log is not).
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
