//! Closed-period and temporal-consistency checks for entries.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::types::{Entry, EntryType};
use crate::period::{Period, PeriodError, period_by_id};

/// Validates an entry against its posting and analysis periods.
///
/// Rules, in order:
/// 1. the posting period must not be closed
/// 2. an actual entry's analysis period must not start after `today`
/// 3. a forecast entry's analysis period must not start before `today`
///
/// An entry without an analysis period skips rules 2 and 3.
///
/// # Errors
///
/// - `PeriodError::UnknownPeriod` if a referenced period is not one of the
///   entry organization's `periods`
/// - `PeriodError::ClosedPeriodWrite` for rule 1
/// - `PeriodError::FutureActualEntry` for rule 2
/// - `PeriodError::PastForecastEntry` for rule 3
pub fn check_entry_period(
    entry: &Entry,
    periods: &[Period],
    today: NaiveDate,
) -> Result<(), PeriodError> {
    let result = check_rules(entry, periods, today);
    match &result {
        Ok(()) => debug!(entry_id = %entry.id, "Entry period accepted"),
        Err(err) => warn!(
            entry_id = %entry.id,
            error_code = err.error_code(),
            "Rejected entry period"
        ),
    }
    result
}

fn check_rules(entry: &Entry, periods: &[Period], today: NaiveDate) -> Result<(), PeriodError> {
    if let Some(period_id) = entry.period_id {
        let period = period_by_id(entry.organization_id, period_id, periods)?;
        if period.is_closed() {
            return Err(PeriodError::ClosedPeriodWrite(period.id));
        }
    }

    let Some(analysis_id) = entry.analysis_period_id else {
        return Ok(());
    };
    let analysis = period_by_id(entry.organization_id, analysis_id, periods)?;

    match entry.entry_type {
        EntryType::Actual if analysis.start_date > today => Err(PeriodError::FutureActualEntry {
            entry_id: entry.id,
            period_id: analysis.id,
        }),
        EntryType::Forecast if analysis.start_date < today => Err(PeriodError::PastForecastEntry {
            entry_id: entry.id,
            period_id: analysis.id,
        }),
        _ => Ok(()),
    }
}

/// Returns true if [`check_entry_period`] accepts the entry.
#[must_use]
pub fn validate_entry_period(entry: &Entry, periods: &[Period], today: NaiveDate) -> bool {
    check_entry_period(entry, periods, today).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::GeneralPeriod;
    use periodic_shared::types::{FiscalYearId, GeneralPeriodId, OrganizationId, PeriodId};
    use rstest::{fixture, rstest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Q1 and Q2 2024 of one organization.
    #[fixture]
    fn quarters() -> Vec<Period> {
        let org = OrganizationId::new();
        let parent = GeneralPeriod {
            id: GeneralPeriodId::new(),
            fiscal_year_id: FiscalYearId::new(),
            name: "FY2024".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
        };
        vec![
            Period::new(org, "Q1", date(2024, 1, 1), date(2024, 3, 31), parent.clone()),
            Period::new(org, "Q2", date(2024, 4, 1), date(2024, 6, 30), parent),
        ]
    }

    fn entry_in(period: &Period, date: NaiveDate, entry_type: EntryType) -> Entry {
        Entry {
            period_id: Some(period.id),
            analysis_period_id: Some(period.id),
            ..Entry::new(period.organization_id, date, entry_type)
        }
    }

    #[rstest]
    #[case::actual_in_past(EntryType::Actual, date(2024, 5, 1), true)]
    #[case::actual_on_start(EntryType::Actual, date(2024, 1, 1), true)]
    #[case::actual_in_future(EntryType::Actual, date(2023, 12, 31), false)]
    #[case::forecast_in_future(EntryType::Forecast, date(2023, 12, 31), true)]
    #[case::forecast_on_start(EntryType::Forecast, date(2024, 1, 1), true)]
    #[case::forecast_in_past(EntryType::Forecast, date(2024, 1, 2), false)]
    fn test_temporal_consistency(
        quarters: Vec<Period>,
        #[case] entry_type: EntryType,
        #[case] today: NaiveDate,
        #[case] valid: bool,
    ) {
        let entry = entry_in(&quarters[0], date(2024, 2, 15), entry_type);
        assert_eq!(validate_entry_period(&entry, &quarters, today), valid);
    }

    #[rstest]
    fn test_future_actual_error(quarters: Vec<Period>) {
        let entry = entry_in(&quarters[1], date(2024, 5, 1), EntryType::Actual);
        assert_eq!(
            check_entry_period(&entry, &quarters, date(2024, 2, 15)),
            Err(PeriodError::FutureActualEntry {
                entry_id: entry.id,
                period_id: quarters[1].id,
            })
        );
    }

    #[rstest]
    fn test_past_forecast_error(quarters: Vec<Period>) {
        let entry = entry_in(&quarters[0], date(2024, 2, 1), EntryType::Forecast);
        assert_eq!(
            check_entry_period(&entry, &quarters, date(2024, 5, 1)),
            Err(PeriodError::PastForecastEntry {
                entry_id: entry.id,
                period_id: quarters[0].id,
            })
        );
    }

    #[rstest]
    fn test_closed_posting_period_rejected(mut quarters: Vec<Period>) {
        quarters[0].close().unwrap();
        let entry = entry_in(&quarters[0], date(2024, 2, 15), EntryType::Actual);
        assert_eq!(
            check_entry_period(&entry, &quarters, date(2024, 5, 1)),
            Err(PeriodError::ClosedPeriodWrite(quarters[0].id))
        );
    }

    #[rstest]
    fn test_missing_analysis_period_skips_temporal_checks(quarters: Vec<Period>) {
        let entry = Entry {
            period_id: Some(quarters[1].id),
            ..Entry::new(quarters[1].organization_id, date(2024, 7, 15), EntryType::Actual)
        };
        assert!(validate_entry_period(&entry, &quarters, date(2024, 1, 1)));
    }

    #[rstest]
    fn test_unknown_period_rejected(quarters: Vec<Period>) {
        let missing = PeriodId::new();
        let entry = Entry {
            period_id: Some(missing),
            ..Entry::new(quarters[0].organization_id, date(2024, 2, 15), EntryType::Actual)
        };
        assert_eq!(
            check_entry_period(&entry, &quarters, date(2024, 5, 1)),
            Err(PeriodError::UnknownPeriod(missing))
        );
    }

    #[rstest]
    fn test_period_of_another_organization_is_unknown(quarters: Vec<Period>) {
        let entry = Entry {
            period_id: Some(quarters[0].id),
            ..Entry::new(OrganizationId::new(), date(2024, 2, 15), EntryType::Actual)
        };
        assert_eq!(
            check_entry_period(&entry, &quarters, date(2024, 5, 1)),
            Err(PeriodError::UnknownPeriod(quarters[0].id))
        );
    }
}
