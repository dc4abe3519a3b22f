//! Analytic period management.
//!
//! This module implements the period validator:
//! - Period, general period and date range types
//! - Bounds validation against the enclosing general period
//! - Non-overlap validation within an organization
//! - Date to period resolution for entry attribution
//! - Period lifecycle (Open → Closed)

pub mod error;
pub mod resolve;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::PeriodError;
pub use resolve::{
    attribute_date, find_period_for_date, period_by_id, periods_in_order, resolve_period_for_date,
};
pub use types::{DateRange, GeneralPeriod, Period, PeriodStatus, validate_status_transition};
pub use validation::{
    check_bounds, check_no_overlap, find_overlap, validate_bounds, validate_no_overlap,
};
