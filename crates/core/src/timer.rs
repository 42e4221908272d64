//! Wall-clock timing in whole milliseconds.

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed time truncated to whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Wrap a millisecond count.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Truncate a [`Duration`] to whole milliseconds.
    ///
    /// Durations longer than `u64::MAX` milliseconds saturate.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    /// Get the raw millisecond count.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Run `work` exactly once on a monotonic clock and return how long it took.
///
/// # Examples
///
/// ```
/// use ctbench_core::time_millis;
///
/// let mut total = 0_u64;
/// let elapsed = time_millis(|| total = (1..=1_000).sum());
/// assert_eq!(total, 500_500);
/// assert!(elapsed.as_u64() < 60_000);
/// ```
pub fn time_millis<F>(work: F) -> Millis
where
    F: FnOnce(),
{
    let start = Instant::now();
    work();
    Millis::from_duration(start.elapsed())
}
