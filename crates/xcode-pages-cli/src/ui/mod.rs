//! Terminal status output.
//!
//! Short human-readable lines on stderr, next to the tracing logs. Colors are
//! decided once at startup by [`init_colors`].

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Enable colors unless `--no-color` was given or the terminal can't show them.
///
/// # Examples
///
/// ```no_run
/// use xcode_pages_cli::ui;
///
/// ui::init_colors(false);
/// ui::info("Generating documentation...");
/// ```
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && crate::logger::should_use_colors(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
