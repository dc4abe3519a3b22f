//! Core period validation logic for Periodic.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! The record-management layer supplies periods and entries and calls the
//! validation hooks at save time.
//!
//! # Modules
//!
//! - `period` - Analytic periods: bounds, overlap, resolution and lifecycle
//! - `entry` - Analytic entries: period attribution and temporal checks
//! - `hook` - Save-time validation hooks
//! - `clock` - Source of "today"

pub mod clock;
pub mod entry;
pub mod hook;
pub mod period;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{Entry, EntryService, EntryType};
pub use hook::{EntryValidator, PeriodValidator, ValidationHook};
pub use period::{GeneralPeriod, Period, PeriodError, PeriodStatus};
