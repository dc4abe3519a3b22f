//! Property-based tests for period validation and resolution.

use chrono::{Duration, NaiveDate};
use periodic_shared::types::{FiscalYearId, GeneralPeriodId, OrganizationId};
use proptest::prelude::*;

use super::resolve::{find_period_for_date, resolve_period_for_date};
use super::types::{GeneralPeriod, Period};
use super::validation::{validate_bounds, validate_no_overlap};

/// Strategy to generate dates from 2020-01-01 to 2030-12-28.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// Strategy to generate an ordered date range of 0 to 120 days.
fn range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..=120).prop_map(|(start, days)| (start, start + Duration::days(days)))
}

fn general(start: NaiveDate, end: NaiveDate) -> GeneralPeriod {
    GeneralPeriod {
        id: GeneralPeriodId::new(),
        fiscal_year_id: FiscalYearId::new(),
        name: "General".to_string(),
        start_date: start,
        end_date: end,
    }
}

/// Builds a period whose general period spans 2019-2031.
fn make_period(org: OrganizationId, start: NaiveDate, end: NaiveDate) -> Period {
    let parent = general(
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2031, 12, 31).unwrap(),
    );
    Period::new(org, "P", start, end, parent)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Bounds are valid iff the range is ordered and inside the parent.
    #[test]
    fn prop_bounds_match_definition(
        start in date_strategy(),
        end in date_strategy(),
        (parent_start, parent_end) in range_strategy(),
    ) {
        let period = Period::new(
            OrganizationId::new(),
            "P",
            start,
            end,
            general(parent_start, parent_end),
        );
        let expected = start <= end && start >= parent_start && end <= parent_end;
        prop_assert_eq!(validate_bounds(&period), expected);
    }

    /// Intersecting periods of one organization reject each other.
    #[test]
    fn prop_intersecting_periods_rejected(
        (a_start, a_end) in range_strategy(),
        (b_start, b_end) in range_strategy(),
    ) {
        let org = OrganizationId::new();
        let a = make_period(org, a_start, a_end);
        let b = make_period(org, b_start, b_end);
        let intersect = a_start <= b_end && b_start <= a_end;

        let a_ok = validate_no_overlap(&a, std::slice::from_ref(&b));
        let b_ok = validate_no_overlap(&b, std::slice::from_ref(&a));

        prop_assert_eq!(a_ok, b_ok, "Overlap check should be symmetric");
        prop_assert_eq!(a_ok, !intersect);
    }

    /// A period starting the day after another ends does not overlap it.
    #[test]
    fn prop_adjacent_periods_accepted(
        (a_start, a_end) in range_strategy(),
        days in 0i64..=60,
    ) {
        let org = OrganizationId::new();
        let b_start = a_end + Duration::days(1);
        let a = make_period(org, a_start, a_end);
        let b = make_period(org, b_start, b_start + Duration::days(days));

        prop_assert!(validate_no_overlap(&b, &[a]));
    }

    /// Resolution returns a period containing the date and is repeatable.
    #[test]
    fn prop_resolution_is_idempotent(
        ranges in prop::collection::vec(range_strategy(), 0..6),
        date in date_strategy(),
    ) {
        let org = OrganizationId::new();
        let periods: Vec<Period> = ranges
            .into_iter()
            .map(|(start, end)| make_period(org, start, end))
            .collect();

        let first = resolve_period_for_date(org, date, &periods);
        let second = resolve_period_for_date(org, date, &periods);
        prop_assert_eq!(&first, &second);

        match first {
            Ok(period) => {
                prop_assert!(period.contains_date(date));
                let earliest = periods
                    .iter()
                    .filter(|p| p.contains_date(date))
                    .map(|p| p.start_date)
                    .min();
                prop_assert_eq!(Some(period.start_date), earliest);
            }
            Err(err) => {
                prop_assert!(err.is_absent());
                prop_assert!(find_period_for_date(org, date, &periods).is_none());
            }
        }
    }
}
