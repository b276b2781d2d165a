use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
///
/// Elapsed-time arithmetic always uses the monotonic `Instant`; the wall-clock
/// reading is only used for labels such as "started at".
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed {
        instant: Instant,
        wall: DateTime<Utc>,
    },
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given instant and wall-clock timestamp.
    #[must_use]
    pub fn fixed(instant: Instant, wall: DateTime<Utc>) -> Self {
        Self::Fixed { instant, wall }
    }

    /// Returns the current monotonic instant according to the clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        match self {
            Clock::Default => Instant::now(),
            Clock::Fixed { instant, .. } => *instant,
        }
    }

    /// Returns the current wall-clock time according to the clock.
    #[must_use]
    pub fn wall_now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed { wall, .. } => *wall,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed { instant, wall } = self {
            *instant += delta;
            if let Ok(delta) = chrono::Duration::from_std(delta) {
                *wall += delta;
            }
        }
    }
}

/// Time between `start` and `now`, clamped to zero when `now` is earlier.
#[must_use]
pub fn elapsed_between(start: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(start)
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` frozen at the current instant and the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(Instant::now(), fixed_now())
}
