//! Margin and rate-per-mile calculations
//!
//! Every function here is total: malformed or missing numbers fall back to the
//! zero-valued display strings instead of failing.

use crate::model::{DerivedMetrics, DraftFields, Margin};

use super::money::{coerce_number, format_currency, format_usd, to_fixed};

/// Rate-per-mile string shown when it cannot be computed
pub const ZERO_RATE_PER_MILE: &str = "$0.00/mi";

/// Margin of the broker rate over the driver rate.
///
/// Computed only when both rates coerce to non-zero amounts; otherwise
/// [`Margin::zero`] (note its `"0%"` has no decimal place).
pub fn calculate_margin(driver_rate: &str, broker_rate: &str) -> Margin {
    let driver_amount = coerce_number(driver_rate);
    let broker_amount = coerce_number(broker_rate);

    if driver_amount == 0.0 || broker_amount == 0.0 {
        return Margin::zero();
    }

    let difference = broker_amount - driver_amount;
    let percentage = (difference / broker_amount) * 100.0;
    Margin {
        amount: format_usd(difference),
        percentage: format!("{}%", to_fixed(percentage, 1)),
    }
}

/// Driver pay divided by total (empty + loaded) miles, as `"$X.XX/mi"`.
pub fn calculate_rate_per_mile(driver_rate: &str, empty_miles: &str, loaded_miles: &str) -> String {
    let driver_amount = coerce_number(driver_rate);
    let total_miles = coerce_number(empty_miles) + coerce_number(loaded_miles);

    if driver_amount == 0.0 || total_miles == 0.0 {
        return ZERO_RATE_PER_MILE.to_string();
    }

    format!("${}/mi", to_fixed(driver_amount / total_miles, 2))
}

/// Derive every display metric for a draft
pub fn derive_metrics(fields: &DraftFields) -> DerivedMetrics {
    DerivedMetrics {
        driver_rate_formatted: format_currency(&fields.driver_rate),
        broker_rate_formatted: format_currency(&fields.broker_rate),
        margin: calculate_margin(&fields.driver_rate, &fields.broker_rate),
        rate_per_mile: calculate_rate_per_mile(
            &fields.driver_rate,
            &fields.empty_miles,
            &fields.loaded_miles,
        ),
    }
}
