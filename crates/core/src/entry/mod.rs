//! Analytic entries and their attribution to periods.

pub mod service;
pub mod types;
pub mod validation;

pub use service::{EntryService, default_posting_period, recompute_analysis_period};
pub use types::{Entry, EntryType};
pub use validation::{check_entry_period, validate_entry_period};
