use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("session limit must be between 1 second and 24 hours")]
    InvalidSessionLimit,

    #[error("countdown interval must be between 1 millisecond and 60 seconds")]
    InvalidCountdownInterval,

    #[error("answer refresh interval must be between 1 millisecond and 60 seconds")]
    InvalidAnswerRefreshInterval,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Timing configuration for an interview session.
///
/// Controls the overall time limit and how often the two live readouts refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    session_limit: Duration,
    countdown_interval: Duration,
    answer_refresh_interval: Duration,
}

impl SessionSettings {
    pub const DEFAULT_SESSION_LIMIT: Duration = Duration::from_secs(600);
    pub const DEFAULT_COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
    pub const DEFAULT_ANSWER_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

    const MAX_SESSION_LIMIT: Duration = Duration::from_secs(24 * 60 * 60);
    const MAX_INTERVAL: Duration = Duration::from_secs(60);

    /// # Errors
    ///
    /// Returns `SettingsError` if any value is out of range.
    pub fn new(
        session_limit: Duration,
        countdown_interval: Duration,
        answer_refresh_interval: Duration,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            session_limit,
            countdown_interval,
            answer_refresh_interval,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Replace the session limit, keeping the refresh intervals.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSessionLimit` if the limit is zero or above 24 hours.
    pub fn with_session_limit(self, session_limit: Duration) -> Result<Self, SettingsError> {
        Self::new(
            session_limit,
            self.countdown_interval,
            self.answer_refresh_interval,
        )
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.session_limit.is_zero() || self.session_limit > Self::MAX_SESSION_LIMIT {
            return Err(SettingsError::InvalidSessionLimit);
        }
        if self.countdown_interval.is_zero() || self.countdown_interval > Self::MAX_INTERVAL {
            return Err(SettingsError::InvalidCountdownInterval);
        }
        if self.answer_refresh_interval.is_zero()
            || self.answer_refresh_interval > Self::MAX_INTERVAL
        {
            return Err(SettingsError::InvalidAnswerRefreshInterval);
        }
        Ok(())
    }

    #[must_use]
    pub fn session_limit(&self) -> Duration {
        self.session_limit
    }

    #[must_use]
    pub fn countdown_interval(&self) -> Duration {
        self.countdown_interval
    }

    #[must_use]
    pub fn answer_refresh_interval(&self) -> Duration {
        self.answer_refresh_interval
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            session_limit: Self::DEFAULT_SESSION_LIMIT,
            countdown_interval: Self::DEFAULT_COUNTDOWN_INTERVAL,
            answer_refresh_interval: Self::DEFAULT_ANSWER_REFRESH_INTERVAL,
        }
    }
}
