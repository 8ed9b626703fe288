// Conditional logging macros - only active in debug builds

use env_logger::{Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log records go. The full-screen interface owns the terminal, so it
/// can only log to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogDestination<'a> {
    pub fn select(log_file: Option<&'a Path>, terminal_is_free: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if terminal_is_free => Self::Stderr,
            None => Self::Disabled,
        }
    }
}

/// Install `env_logger` for the given destination. `RUST_LOG` overrides the
/// default filter.
pub fn init_logging(destination: LogDestination) -> io::Result<()> {
    let (target, default_filter) = match destination {
        LogDestination::Disabled => return Ok(()),
        LogDestination::Stderr => (Target::Stderr, "warn"),
        LogDestination::File(path) => (Target::Pipe(Box::new(File::create(path)?)), "info"),
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(target)
        .try_init()
        .map_err(io::Error::other)
}
