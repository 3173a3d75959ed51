//! Minimal internal logging layer.
//!
//! A severity enum plus a `log!` macro that writes to stderr when the
//! message's level is at or above `RD_SANDBOX_LOG` (default `Warn`). All
//! supervisor diagnostics (bad syscalls, limit breaches, exec failures,
//! unexpected signals) go through this rather than raw `eprintln!`.

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum LogLevel {
    LogDebug = 0,
    LogWarn = 1,
    LogError = 2,
}

use LogLevel::*;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogWarn as u8);

fn level_from_env() -> LogLevel {
    match env::var("RD_SANDBOX_LOG").as_deref() {
        Ok("debug") => LogDebug,
        Ok("error") => LogError,
        _ => LogWarn,
    }
}

/// Must be called at most once, before the first `log!`; harmless to skip
/// (the default is `Warn`).
pub fn init() {
    MIN_LEVEL.store(level_from_env() as u8, Ordering::Relaxed);
}

pub fn enabled(level: LogLevel) -> bool {
    level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        if $crate::log::enabled($level) {
            eprintln!("[sandbox] {}", format!($($arg)*));
        }
    };
}
