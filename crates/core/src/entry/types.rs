//! Analytic entry types.

use chrono::NaiveDate;
use periodic_shared::types::{EntryId, OrganizationId, PeriodId};
use serde::{Deserialize, Serialize};

/// Whether an entry records what happened or what is planned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Realized amount; must not fall in a future period.
    #[default]
    Actual,
    /// Planned amount; must not fall in a past period.
    Forecast,
}

/// A dated analytic line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier.
    pub id: EntryId,
    /// Organization the entry belongs to. Only its periods can be attributed.
    pub organization_id: OrganizationId,
    /// Date of the entry.
    pub date: NaiveDate,
    /// Actual or forecast.
    #[serde(default)]
    pub entry_type: EntryType,
    /// Posting period.
    #[serde(default)]
    pub period_id: Option<PeriodId>,
    /// Period the entry date falls in, kept in sync by
    /// [`recompute_analysis_period`](super::service::recompute_analysis_period).
    #[serde(default)]
    pub analysis_period_id: Option<PeriodId>,
}

impl Entry {
    /// Creates an entry with no period attributed yet.
    #[must_use]
    pub fn new(organization_id: OrganizationId, date: NaiveDate, entry_type: EntryType) -> Self {
        Self {
            id: EntryId::new(),
            organization_id,
            date,
            entry_type,
            period_id: None,
            analysis_period_id: None,
        }
    }
}
