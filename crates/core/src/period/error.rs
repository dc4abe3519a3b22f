//! Period error types for validation and lifecycle errors.
//!
//! Every variant is a rejection reason surfaced to the record-management
//! layer; none of them is a fatal process error.

use chrono::NaiveDate;
use periodic_shared::AppError;
use periodic_shared::types::{EntryId, PeriodId};
use thiserror::Error;

use super::types::PeriodStatus;

/// Errors that can occur while validating periods and attributing entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    // ========== Period Structure Errors ==========
    /// Period dates are reversed or fall outside the general period.
    #[error(
        "Period {period_id} is invalid: {start} to {end} must be ordered and within the general period {parent_start} to {parent_end}"
    )]
    InvalidBounds {
        /// The rejected period.
        period_id: PeriodId,
        /// Start date of the period.
        start: NaiveDate,
        /// End date of the period.
        end: NaiveDate,
        /// Start date of the general period.
        parent_start: NaiveDate,
        /// End date of the general period.
        parent_end: NaiveDate,
    },

    /// Period overlaps an existing period of the same organization.
    #[error("Period {period_id} overlaps existing period {other_id}")]
    OverlapDetected {
        /// The rejected period.
        period_id: PeriodId,
        /// The existing period it overlaps.
        other_id: PeriodId,
    },

    // ========== Lifecycle Errors ==========
    /// Dates of a closed period cannot change.
    #[error("Period {0} is closed, its dates cannot be modified")]
    PeriodDatesLocked(PeriodId),

    /// Invalid status transition.
    #[error("Invalid period status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: PeriodStatus,
        /// Target status.
        to: PeriodStatus,
    },

    // ========== Attribution Errors ==========
    /// Entry attributed to a closed period.
    #[error("Period {0} is closed, no entry can be passed or updated in it")]
    ClosedPeriodWrite(PeriodId),

    /// Actual entry resolved into a period that starts after today.
    #[error("Entry {entry_id} is an actual entry in future period {period_id}")]
    FutureActualEntry {
        /// The rejected entry.
        entry_id: EntryId,
        /// Its analysis period.
        period_id: PeriodId,
    },

    /// Forecast entry resolved into a period that started before today.
    #[error("Entry {entry_id} is a forecast entry in past period {period_id}")]
    PastForecastEntry {
        /// The rejected entry.
        entry_id: EntryId,
        /// Its analysis period.
        period_id: PeriodId,
    },

    /// No period contains the date.
    #[error("No analytic period found for date {0}")]
    NoPeriodForDate(NaiveDate),

    /// Referenced period is not among the supplied periods.
    #[error("Period not found: {0}")]
    UnknownPeriod(PeriodId),
}

impl PeriodError {
    /// Returns the error code for callers that persist rejection reasons.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBounds { .. } => "INVALID_BOUNDS",
            Self::OverlapDetected { .. } => "OVERLAP_DETECTED",
            Self::PeriodDatesLocked(_) => "PERIOD_DATES_LOCKED",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::ClosedPeriodWrite(_) => "CLOSED_PERIOD_WRITE",
            Self::FutureActualEntry { .. } => "FUTURE_ACTUAL_ENTRY",
            Self::PastForecastEntry { .. } => "PAST_FORECAST_ENTRY",
            Self::NoPeriodForDate(_) => "NO_PERIOD_FOR_DATE",
            Self::UnknownPeriod(_) => "UNKNOWN_PERIOD",
        }
    }

    /// Returns true if the error only means "no period matched".
    ///
    /// Callers treat this as an absent attribution rather than a rejection.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::NoPeriodForDate(_))
    }
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        let message = err.to_string();
        match err {
            PeriodError::InvalidBounds { .. }
            | PeriodError::FutureActualEntry { .. }
            | PeriodError::PastForecastEntry { .. } => Self::Validation(message),
            PeriodError::OverlapDetected { .. } => Self::Conflict(message),
            PeriodError::PeriodDatesLocked(_)
            | PeriodError::InvalidStatusTransition { .. }
            | PeriodError::ClosedPeriodWrite(_) => Self::BusinessRule(message),
            PeriodError::NoPeriodForDate(_) | PeriodError::UnknownPeriod(_) => {
                Self::NotFound(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PeriodError::ClosedPeriodWrite(PeriodId::new()).error_code(),
            "CLOSED_PERIOD_WRITE"
        );
        assert_eq!(
            PeriodError::NoPeriodForDate(date(2024, 7, 1)).error_code(),
            "NO_PERIOD_FOR_DATE"
        );
        assert_eq!(
            PeriodError::OverlapDetected {
                period_id: PeriodId::new(),
                other_id: PeriodId::new(),
            }
            .error_code(),
            "OVERLAP_DETECTED"
        );
    }

    #[test]
    fn test_only_missing_period_is_absent() {
        assert!(PeriodError::NoPeriodForDate(date(2024, 7, 1)).is_absent());
        assert!(!PeriodError::ClosedPeriodWrite(PeriodId::new()).is_absent());
        assert!(!PeriodError::UnknownPeriod(PeriodId::new()).is_absent());
    }

    #[test]
    fn test_error_display() {
        let err = PeriodError::NoPeriodForDate(date(2024, 7, 1));
        assert_eq!(err.to_string(), "No analytic period found for date 2024-07-01");

        let err = PeriodError::InvalidStatusTransition {
            from: PeriodStatus::Closed,
            to: PeriodStatus::Open,
        };
        assert_eq!(
            err.to_string(),
            "Invalid period status transition from closed to open"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let overlap = PeriodError::OverlapDetected {
            period_id: PeriodId::new(),
            other_id: PeriodId::new(),
        };
        assert!(matches!(AppError::from(overlap), AppError::Conflict(_)));

        let closed = PeriodError::ClosedPeriodWrite(PeriodId::new());
        assert!(matches!(AppError::from(closed), AppError::BusinessRule(_)));

        let future = PeriodError::FutureActualEntry {
            entry_id: EntryId::new(),
            period_id: PeriodId::new(),
        };
        assert!(matches!(AppError::from(future), AppError::Validation(_)));

        let missing = PeriodError::UnknownPeriod(PeriodId::new());
        let app: AppError = missing.clone().into();
        assert_eq!(app.to_string(), format!("Not found: {missing}"));
    }
}
