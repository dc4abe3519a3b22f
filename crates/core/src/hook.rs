//! Save-time validation hooks.
//!
//! The record-management layer calls a hook before it persists a record and
//! turns any error into a rejected save.

use tracing::debug;

use crate::clock::Clock;
use crate::entry::{Entry, check_entry_period};
use crate::period::{
    Period, PeriodError, check_bounds, check_no_overlap, period_by_id, validate_status_transition,
};

/// Validation invoked by the persistence layer before a record is saved.
pub trait ValidationHook {
    /// Record being saved.
    type Record;
    /// Records the check runs against.
    type Context: ?Sized;

    /// Validates a record about to be created.
    fn on_create(&self, record: &Self::Record, ctx: &Self::Context) -> Result<(), PeriodError>;

    /// Validates a change from `current` to `proposed`.
    fn on_update(
        &self,
        current: &Self::Record,
        proposed: &Self::Record,
        ctx: &Self::Context,
    ) -> Result<(), PeriodError>;
}

/// Bounds, overlap and lifecycle checks for analytic periods.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodValidator;

impl ValidationHook for PeriodValidator {
    type Record = Period;
    type Context = [Period];

    fn on_create(&self, record: &Period, existing: &[Period]) -> Result<(), PeriodError> {
        check_bounds(record)?;
        check_no_overlap(record, existing)?;
        debug!(period_id = %record.id, "Period accepted");
        Ok(())
    }

    fn on_update(
        &self,
        current: &Period,
        proposed: &Period,
        existing: &[Period],
    ) -> Result<(), PeriodError> {
        if current.is_closed() && current.dates_differ(proposed) {
            return Err(PeriodError::PeriodDatesLocked(current.id));
        }
        validate_status_transition(current.status, proposed.status)?;
        self.on_create(proposed, existing)
    }
}

/// Closed-period and temporal checks for analytic entries.
#[derive(Debug, Clone)]
pub struct EntryValidator<C> {
    clock: C,
}

impl<C: Clock> EntryValidator<C> {
    /// Creates a validator reading today's date from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> ValidationHook for EntryValidator<C> {
    type Record = Entry;
    type Context = [Period];

    fn on_create(&self, record: &Entry, periods: &[Period]) -> Result<(), PeriodError> {
        check_entry_period(record, periods, self.clock.today())
    }

    fn on_update(
        &self,
        current: &Entry,
        proposed: &Entry,
        periods: &[Period],
    ) -> Result<(), PeriodError> {
        if let Some(period_id) = current.period_id {
            let period = period_by_id(current.organization_id, period_id, periods)?;
            if period.is_closed() {
                return Err(PeriodError::ClosedPeriodWrite(period.id));
            }
        }
        self.on_create(proposed, periods)
    }
}
