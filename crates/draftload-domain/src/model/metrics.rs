//! Display metrics derived from a draft load

use serde::{Deserialize, Serialize};

/// Broker-over-driver margin, preformatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    /// Currency string, e.g. "$150.00" or "-$50.00"
    pub amount: String,
    /// One decimal place plus "%", or the literal "0%" when not computable
    pub percentage: String,
}

impl Margin {
    /// Margin shown when either rate is missing or zero.
    ///
    /// The percentage intentionally has no decimal place.
    pub fn zero() -> Self {
        Self {
            amount: "$0.00".to_string(),
            percentage: "0%".to_string(),
        }
    }
}

/// All derived values for one draft load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub driver_rate_formatted: String,
    pub broker_rate_formatted: String,
    pub margin: Margin,
    /// "$X.XX/mi"
    pub rate_per_mile: String,
}
