#![deny(missing_docs)]
//! Shared logging utilities for the nimbus workspace.
//!
//! This crate provides the `cloud_*` logging macros used across the
//! codebase, a pipeline-stage scope that prefixes every message with the
//! active stage, and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    static STAGE: Cell<Option<&'static str>> = const { Cell::new(None) };
}

/// Pipeline-stage scope. While alive, `cloud_*` messages on this thread
/// carry a `[stage]` prefix; dropping it restores the enclosing stage.
pub struct StageScope {
    previous: Option<&'static str>,
}

impl StageScope {
    /// Enters `name` as the active stage for the current thread.
    pub fn enter(name: &'static str) -> Self {
        let previous = STAGE.with(|stage| stage.replace(Some(name)));
        Self { previous }
    }
}

impl Drop for StageScope {
    fn drop(&mut self) {
        STAGE.with(|stage| stage.set(self.previous));
    }
}

/// Prefix for the active stage, or the empty string outside any stage.
/// Called by the `cloud_*` macros; rarely useful directly.
pub fn stage_prefix() -> String {
    STAGE.with(|stage| match stage.get() {
        Some(name) => format!("[{name}] "),
        None => String::new(),
    })
}

/// Logs a trace-level message, prefixed with the active pipeline stage.
#[macro_export]
macro_rules! cloud_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::stage_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, prefixed with the active pipeline stage.
#[macro_export]
macro_rules! cloud_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::stage_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, prefixed with the active pipeline stage.
#[macro_export]
macro_rules! cloud_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::stage_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, prefixed with the active pipeline stage.
#[macro_export]
macro_rules! cloud_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::stage_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, prefixed with the active pipeline stage.
#[macro_export]
macro_rules! cloud_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::stage_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
