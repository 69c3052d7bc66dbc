//! Read-only summary of a draft load

use serde::{Deserialize, Serialize};

use crate::model::{DerivedMetrics, DraftFields, Margin};

use super::metrics_calculator::derive_metrics;

/// What the dashboard card shows for a draft: echoed fields with placeholders,
/// plus the derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSummary {
    /// "[name]" or "[Insert value 1st line]"
    pub driver_name: String,
    /// "[carrier]" or "[Insert value 2nd line]"
    pub carrier_name: String,
    pub driver_rate: String,
    pub broker_rate: String,
    pub margin: Margin,
    pub rate_per_mile: String,
    /// "50 mi", or "0 mi" when empty
    pub empty_miles: String,
    pub loaded_miles: String,
}

impl DraftSummary {
    pub fn from_fields(fields: &DraftFields) -> Self {
        let DerivedMetrics {
            driver_rate_formatted,
            broker_rate_formatted,
            margin,
            rate_per_mile,
        } = derive_metrics(fields);

        Self {
            driver_name: bracketed(&fields.driver_name, "Insert value 1st line"),
            carrier_name: bracketed(&fields.carrier_name, "Insert value 2nd line"),
            driver_rate: driver_rate_formatted,
            broker_rate: broker_rate_formatted,
            margin,
            rate_per_mile,
            empty_miles: miles(&fields.empty_miles),
            loaded_miles: miles(&fields.loaded_miles),
        }
    }
}

fn bracketed(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("[{}]", placeholder)
    } else {
        format!("[{}]", value)
    }
}

fn miles(value: &str) -> String {
    if value.is_empty() {
        "0 mi".to_string()
    } else {
        format!("{} mi", value)
    }
}

/// Plain-text card for terminal output
pub fn generate_summary_report(summary: &DraftSummary) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Draft Load Summary                \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Driver name:    {}\n", summary.driver_name));
    report.push_str(&format!("  Carrier:        {}\n", summary.carrier_name));
    report.push('\n');
    report.push_str(&format!("  PU empty:       {}\n", summary.empty_miles));
    report.push_str(&format!("  DL loaded:      {}\n", summary.loaded_miles));
    report.push_str(&format!("  Rate per mile:  {}\n", summary.rate_per_mile));
    report.push('\n');
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:>14} {:>14} {:>20}\n",
        "DRIVER RATE", "BROKER RATE", "MARGIN"
    ));
    report.push_str(&format!(
        "{:>14} {:>14} {:>20}\n",
        summary.driver_rate,
        summary.broker_rate,
        format!("{} ({})", summary.margin.amount, summary.margin.percentage)
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str("==================================================\n");
    report
}
