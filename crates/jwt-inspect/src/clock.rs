//! Time sources

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in Unix epoch milliseconds
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch (1970-01-01T00:00:00Z)
    fn now_millis(&self) -> i64;
}

/// Wall clock
///
/// A system clock set before the epoch reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
