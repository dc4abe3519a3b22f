//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing an `EntryId` where a `PeriodId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(OrganizationId, "Unique identifier for an organization (the overlap scope).");
typed_id!(FiscalYearId, "Unique identifier for a fiscal year.");
typed_id!(
    GeneralPeriodId,
    "Unique identifier for a general accounting period."
);
typed_id!(PeriodId, "Unique identifier for an analytic period.");
typed_id!(EntryId, "Unique identifier for an analytic entry.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
