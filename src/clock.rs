//! Time source abstraction
//!
//! All freshness decay, campaign windows, and cache expiry take the
//! current time from an injected clock so tests can pin it.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Milliseconds in one UTC day
pub const MS_PER_DAY: i64 = 86_400_000;

/// A source of "now" in UTC epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time
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

/// A clock pinned to a settable instant, for tests
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Mutex<i64>,
}

impl FixedClock {
    /// Create a clock frozen at the given epoch millisecond
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: Mutex::new(now_ms),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, now_ms: i64) {
        *self.now.lock() = now_ms;
    }

    /// Advance the clock by a delta
    pub fn advance(&self, delta_ms: i64) {
        *self.now.lock() += delta_ms;
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        *self.now.lock()
    }
}

/// Shared clock handle used throughout the services
pub type SharedClock = Arc<dyn Clock>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
        clock.set(42);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // Sanity: after 2020-01-01 in millis
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
