//! Analytic period types.

use chrono::NaiveDate;
use periodic_shared::types::{FiscalYearId, GeneralPeriodId, OrganizationId, PeriodId};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// A closed date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without checking its ordering.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if `start <= end`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if `other` lies entirely within this range.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Checks if two ranges share at least one day.
    ///
    /// Two ranges [a_start, a_end] and [b_start, b_end] overlap unless
    /// one ends before the other starts. Touching endpoints overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

/// The general accounting period an analytic period is nested in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralPeriod {
    /// Unique identifier.
    pub id: GeneralPeriodId,
    /// Fiscal year the general period belongs to.
    pub fiscal_year_id: FiscalYearId,
    /// Period name (e.g., "Q1 2024").
    pub name: String,
    /// Start date of the general period.
    pub start_date: NaiveDate,
    /// End date of the general period.
    pub end_date: NaiveDate,
}

impl GeneralPeriod {
    /// Returns the bounds of the general period.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Status of an analytic period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Period accepts entries and date changes.
    #[default]
    Open,
    /// Period is closed: dates are frozen and no entry may be attributed to it.
    Closed,
}

impl std::fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// An analytic period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique identifier.
    pub id: PeriodId,
    /// Organization the period belongs to. Overlap is only checked within one organization.
    pub organization_id: OrganizationId,
    /// Period name (e.g., "January 2024").
    pub name: String,
    /// Start date of the period.
    pub start_date: NaiveDate,
    /// End date of the period.
    pub end_date: NaiveDate,
    /// Current status.
    #[serde(default)]
    pub status: PeriodStatus,
    /// Enclosing general period.
    pub general_period: GeneralPeriod,
}

impl Period {
    /// Creates a new open period.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        general_period: GeneralPeriod,
    ) -> Self {
        Self {
            id: PeriodId::new(),
            organization_id,
            name: name.into(),
            start_date,
            end_date,
            status: PeriodStatus::Open,
            general_period,
        }
    }

    /// Returns the date range of the period.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns true if entries can be attributed to this period.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == PeriodStatus::Open
    }

    /// Returns true if the period is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == PeriodStatus::Closed
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }

    /// Returns true if `other` has different start or end dates.
    #[must_use]
    pub fn dates_differ(&self, other: &Self) -> bool {
        self.start_date != other.start_date || self.end_date != other.end_date
    }

    /// Moves the period to `to`.
    ///
    /// Open → Closed is allowed, and a transition to the current status is a
    /// no-op. Closed is terminal.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidStatusTransition` when reopening.
    pub fn transition(&mut self, to: PeriodStatus) -> Result<(), PeriodError> {
        validate_status_transition(self.status, to)?;
        self.status = to;
        Ok(())
    }

    /// Closes the period.
    ///
    /// # Errors
    ///
    /// Never fails for an open or already closed period; see [`Period::transition`].
    pub fn close(&mut self) -> Result<(), PeriodError> {
        self.transition(PeriodStatus::Closed)
    }
}

/// Validates period status transitions.
///
/// # Errors
///
/// Returns `PeriodError::InvalidStatusTransition` for Closed → Open.
pub fn validate_status_transition(from: PeriodStatus, to: PeriodStatus) -> Result<(), PeriodError> {
    match (from, to) {
        _ if from == to => Ok(()),
        (PeriodStatus::Open, PeriodStatus::Closed) => Ok(()),
        _ => Err(PeriodError::InvalidStatusTransition { from, to }),
    }
}
