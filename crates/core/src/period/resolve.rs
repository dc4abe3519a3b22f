//! Date to period resolution.
//!
//! Resolution is scoped to one organization, the same partition the overlap
//! check uses, so at most one open period can match a date.

use chrono::NaiveDate;
use periodic_shared::types::{OrganizationId, PeriodId};
use tracing::{debug, warn};

use super::error::PeriodError;
use super::types::Period;

/// Lists the periods of an organization by ascending start date.
///
/// The sort is stable: periods starting on the same day keep the order of `periods`.
#[must_use]
pub fn periods_in_order(organization_id: OrganizationId, periods: &[Period]) -> Vec<&Period> {
    let mut listed: Vec<&Period> = periods
        .iter()
        .filter(|period| period.organization_id == organization_id)
        .collect();
    listed.sort_by_key(|period| period.start_date);
    listed
}

/// Finds the organization's period containing `date`, ignoring its status.
///
/// The first match in [`periods_in_order`] wins.
#[must_use]
pub fn find_period_for_date(
    organization_id: OrganizationId,
    date: NaiveDate,
    periods: &[Period],
) -> Option<&Period> {
    periods_in_order(organization_id, periods)
        .into_iter()
        .find(|period| period.contains_date(date))
}

/// Resolves the period an entry of `organization_id` dated `date` is attributed to.
///
/// # Errors
///
/// - `PeriodError::NoPeriodForDate` if no period of the organization contains the date
/// - `PeriodError::ClosedPeriodWrite` if the matching period is closed
pub fn resolve_period_for_date(
    organization_id: OrganizationId,
    date: NaiveDate,
    periods: &[Period],
) -> Result<&Period, PeriodError> {
    let period = find_period_for_date(organization_id, date, periods)
        .ok_or(PeriodError::NoPeriodForDate(date))?;

    if period.is_closed() {
        warn!(
            period_id = %period.id,
            %date,
            error_code = "CLOSED_PERIOD_WRITE",
            "Date resolves to a closed period"
        );
        return Err(PeriodError::ClosedPeriodWrite(period.id));
    }

    debug!(period_id = %period.id, %date, "Resolved period for date");
    Ok(period)
}

/// Like [`resolve_period_for_date`], but a missing period is an absent
/// attribution instead of an error.
///
/// # Errors
///
/// Returns `PeriodError::ClosedPeriodWrite` if the matching period is closed.
pub fn attribute_date(
    organization_id: OrganizationId,
    date: NaiveDate,
    periods: &[Period],
) -> Result<Option<&Period>, PeriodError> {
    match resolve_period_for_date(organization_id, date, periods) {
        Ok(period) => Ok(Some(period)),
        Err(err) if err.is_absent() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Looks up a period of the organization by id.
///
/// # Errors
///
/// Returns `PeriodError::UnknownPeriod` if the organization has no period with this id.
pub fn period_by_id(
    organization_id: OrganizationId,
    id: PeriodId,
    periods: &[Period],
) -> Result<&Period, PeriodError> {
    periods
        .iter()
        .find(|period| period.id == id && period.organization_id == organization_id)
        .ok_or(PeriodError::UnknownPeriod(id))
}
