#![deny(missing_docs)]
//! Logging macros for the signup watch workspace.
//!
//! Every `watch_*` macro goes through the `log` facade and prefixes the line
//! with the poll cycle running on the current thread, so the entries written
//! during one page check can be told apart in `bot.log`.

use std::cell::Cell;
use std::fmt;

thread_local! {
    static POLL_CYCLE: Cell<u64> = const { Cell::new(0) };
}

/// Marks the start of poll cycle `cycle` on this thread.
pub fn set_poll_cycle(cycle: u64) {
    POLL_CYCLE.with(|v| v.set(cycle));
}

/// Poll cycle running on this thread, 0 before the first one.
pub fn poll_cycle() -> u64 {
    POLL_CYCLE.with(|v| v.get())
}

/// Line prefix naming the current poll cycle; empty outside of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTag(pub u64);

impl CycleTag {
    /// Tag for the cycle running on this thread.
    pub fn current() -> Self {
        CycleTag(poll_cycle())
    }
}

impl fmt::Display for CycleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            cycle => write!(f, "[cycle {cycle}] "),
        }
    }
}

/// Logs a trace-level message tagged with the poll cycle.
#[macro_export]
macro_rules! watch_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::CycleTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the poll cycle.
#[macro_export]
macro_rules! watch_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::CycleTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the poll cycle.
#[macro_export]
macro_rules! watch_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::CycleTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the poll cycle.
#[macro_export]
macro_rules! watch_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::CycleTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the poll cycle.
#[macro_export]
macro_rules! watch_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::CycleTag::current(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
