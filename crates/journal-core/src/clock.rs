//! Time provider abstraction
//!
//! Creation and update timestamps come from a [`Clock`], so production
//! code can use real system time while tests use a controllable clock.

use std::fmt::Debug;
#[cfg(any(test, feature = "testing"))]
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// A time provider for book timestamps.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock using real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock with auto-advancing time.
///
/// Available in tests and with the `testing` feature.
///
/// Each `now()` call returns the current instant and then moves the clock
/// forward by `step_millis`, so consecutive timestamps are strictly
/// increasing. A step of zero freezes the clock.
///
/// ```
/// use journal_core::{Clock, FixedClock};
///
/// let clock = FixedClock::default();
/// let t1 = clock.now();
/// let t2 = clock.now();
/// assert!(t2 > t1);
/// ```
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
    step_millis: i64,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Start at `start`, advancing one second per reading.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_step(start, 1_000)
    }

    pub fn with_step(start: DateTime<Utc>, step_millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
            step_millis,
        }
    }

    /// Move the clock to a specific instant.
    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: i64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// The instant the next `now()` will return.
    pub fn peek(&self) -> DateTime<Utc> {
        from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(from_millis(1_704_067_200_000))
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        from_millis(self.millis.fetch_add(self.step_millis, Ordering::SeqCst))
    }
}

#[cfg(any(test, feature = "testing"))]
fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
