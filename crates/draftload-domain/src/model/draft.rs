//! Draft load field definitions

use serde::{Deserialize, Serialize};

/// Number of positional lines a draft load consumes
pub const DRAFT_FIELD_COUNT: usize = 6;

/// The six values of a draft load, in entry order.
///
/// Every field is kept as the raw (trimmed) text the user typed. Numeric
/// interpretation happens only when metrics are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    /// Line 1
    pub driver_name: String,
    /// Line 2
    pub carrier_name: String,
    /// Line 3, e.g. "$1,500"
    pub driver_rate: String,
    /// Line 4
    pub broker_rate: String,
    /// Line 5
    pub empty_miles: String,
    /// Line 6
    pub loaded_miles: String,
}

impl DraftFields {
    /// True when no line has been entered yet
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| v.is_empty())
    }

    /// Field values in entry order
    pub fn values(&self) -> [&str; DRAFT_FIELD_COUNT] {
        [
            &self.driver_name,
            &self.carrier_name,
            &self.driver_rate,
            &self.broker_rate,
            &self.empty_miles,
            &self.loaded_miles,
        ]
    }
}
