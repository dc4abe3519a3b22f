//! Entry attribution: default posting period and analysis period.

use chrono::NaiveDate;
use periodic_shared::types::{OrganizationId, PeriodId};
use tracing::debug;

use super::types::{Entry, EntryType};
use crate::clock::Clock;
use crate::period::{Period, PeriodError, attribute_date};

/// Recomputes the analysis period of an entry from its date.
///
/// Must be called whenever `entry.date` changes. Only periods of the entry's
/// organization are candidates. A date outside all of them clears the
/// analysis period.
///
/// # Errors
///
/// Returns `PeriodError::ClosedPeriodWrite` if the date falls in a closed period.
/// The entry is left unchanged in that case.
pub fn recompute_analysis_period(entry: &mut Entry, periods: &[Period]) -> Result<(), PeriodError> {
    let analysis =
        attribute_date(entry.organization_id, entry.date, periods)?.map(|period| period.id);
    if analysis != entry.analysis_period_id {
        debug!(
            entry_id = %entry.id,
            date = %entry.date,
            analysis_period_id = ?analysis,
            "Analysis period changed"
        );
    }
    entry.analysis_period_id = analysis;
    Ok(())
}

/// Returns the default posting period for a new entry of `organization_id`:
/// the organization's period containing `today`.
///
/// # Errors
///
/// Returns `PeriodError::ClosedPeriodWrite` if today falls in a closed period.
pub fn default_posting_period(
    organization_id: OrganizationId,
    today: NaiveDate,
    periods: &[Period],
) -> Result<Option<PeriodId>, PeriodError> {
    Ok(attribute_date(organization_id, today, periods)?.map(|period| period.id))
}

/// Builds entries with their periods attributed.
#[derive(Debug, Clone)]
pub struct EntryService<C> {
    clock: C,
}

impl<C: Clock> EntryService<C> {
    /// Creates a service reading today's date from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Creates an entry with its default posting period and analysis period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::ClosedPeriodWrite` if today or `date` falls in a
    /// closed period.
    pub fn new_entry(
        &self,
        organization_id: OrganizationId,
        date: NaiveDate,
        entry_type: EntryType,
        periods: &[Period],
    ) -> Result<Entry, PeriodError> {
        let mut entry = Entry::new(organization_id, date, entry_type);
        entry.period_id = default_posting_period(organization_id, self.clock.today(), periods)?;
        recompute_analysis_period(&mut entry, periods)?;
        Ok(entry)
    }

    /// Moves an entry to a new date and recomputes its analysis period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::ClosedPeriodWrite` if `date` falls in a closed
    /// period; the entry keeps its previous date.
    pub fn reschedule(
        &self,
        entry: &mut Entry,
        date: NaiveDate,
        periods: &[Period],
    ) -> Result<(), PeriodError> {
        let mut updated = entry.clone();
        updated.date = date;
        recompute_analysis_period(&mut updated, periods)?;
        *entry = updated;
        Ok(())
    }
}
