//! Source of "today" for temporal entry checks.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use periodic_shared::{AppError, AppResult};
use periodic_shared::config::ValidationConfig;

/// Provides the current date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock evaluated in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock for the given timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Creates a clock from the validation configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the timezone is not a known IANA name.
    pub fn from_config(config: &ValidationConfig) -> AppResult<Self> {
        let tz = config.timezone.parse::<Tz>().map_err(|e| {
            AppError::Configuration(format!("invalid timezone '{}': {e}", config.timezone))
        })?;
        Ok(Self::new(tz))
    }

    /// Returns the configured timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
