//! Wall clock abstraction and elapsed time formatting.
//!
//! The session timer is wall-clock based: it records a `SystemTime` on the
//! first click and reports the difference to "now" on every tick. Hosts
//! normally use `SystemClock`; `ManualClock` lets a host (or a test) drive
//! time explicitly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> SystemTime;
}

/// The operating system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a host can keep one handle and give
/// another to the engine.
///
/// ```
/// use std::time::Duration;
/// use memory_pairs::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let before = clock.now();
///
/// handle.advance(Duration::from_secs(65));
/// assert_eq!(clock.now().duration_since(before).unwrap().as_secs(), 65);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis_since_epoch: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock stopped at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock stopped at `time`.
    ///
    /// Times before the epoch clamp to the epoch.
    #[must_use]
    pub fn starting_at(time: SystemTime) -> Self {
        let clock = Self::new();
        clock.set(time);
        clock
    }

    /// Move the clock forward, saturating at `u64::MAX` milliseconds.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        // Closure always returns Some, so the update cannot fail.
        let _ = self
            .millis_since_epoch
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(by))
            });
    }

    /// Jump the clock to `time`, forwards or backwards.
    pub fn set(&self, time: SystemTime) {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        self.millis_since_epoch.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.millis_since_epoch.load(Ordering::SeqCst))
    }
}

/// Time elapsed from `start` to `now`.
///
/// A clock stepped backwards past `start` reports zero rather than failing.
#[must_use]
pub fn elapsed_between(start: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(start).unwrap_or(Duration::ZERO)
}

/// Render a duration as `MM:SS`.
///
/// Minutes are total minutes, so an hour-long game shows `60:00` rather than
/// wrapping back to `00:00`. Sub-second remainders are truncated.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
