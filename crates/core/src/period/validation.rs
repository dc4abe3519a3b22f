//! Structural and non-overlap validation for analytic periods.

use tracing::warn;

use super::error::PeriodError;
use super::types::Period;

/// Returns true if the period is ordered and contained in its general period.
///
/// `start <= end`, `start >= general.start` and `end <= general.end`.
#[must_use]
pub fn validate_bounds(period: &Period) -> bool {
    let range = period.range();
    range.is_ordered() && period.general_period.range().contains_range(&range)
}

/// Validates the bounds of a period.
///
/// # Errors
///
/// Returns `PeriodError::InvalidBounds` if [`validate_bounds`] fails.
pub fn check_bounds(period: &Period) -> Result<(), PeriodError> {
    if validate_bounds(period) {
        return Ok(());
    }

    let err = PeriodError::InvalidBounds {
        period_id: period.id,
        start: period.start_date,
        end: period.end_date,
        parent_start: period.general_period.start_date,
        parent_end: period.general_period.end_date,
    };
    warn!(period_id = %period.id, error_code = err.error_code(), "Rejected period bounds");
    Err(err)
}

/// Finds the first existing period that overlaps the candidate.
///
/// The candidate itself (same id) and periods of other organizations are
/// ignored.
#[must_use]
pub fn find_overlap<'a>(candidate: &Period, existing: &'a [Period]) -> Option<&'a Period> {
    let range = candidate.range();
    existing.iter().find(|other| {
        other.id != candidate.id
            && other.organization_id == candidate.organization_id
            && range.overlaps(&other.range())
    })
}

/// Returns true if the candidate overlaps no other period of its organization.
#[must_use]
pub fn validate_no_overlap(candidate: &Period, existing: &[Period]) -> bool {
    find_overlap(candidate, existing).is_none()
}

/// Validates that a period does not overlap existing periods.
///
/// # Errors
///
/// Returns `PeriodError::OverlapDetected` naming the first overlapping period.
pub fn check_no_overlap(candidate: &Period, existing: &[Period]) -> Result<(), PeriodError> {
    match find_overlap(candidate, existing) {
        None => Ok(()),
        Some(other) => {
            warn!(
                period_id = %candidate.id,
                other_id = %other.id,
                error_code = "OVERLAP_DETECTED",
                "Rejected overlapping period"
            );
            Err(PeriodError::OverlapDetected {
                period_id: candidate.id,
                other_id: other.id,
            })
        }
    }
}
