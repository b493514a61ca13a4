//! Clock port - millisecond wall-clock readings
//!
//! The generator takes the clock as a capability so tests can script
//! regressions and frozen milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time with millisecond resolution
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
