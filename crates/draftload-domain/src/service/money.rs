//! Numeric coercion and en-US currency formatting
//!
//! Coercion rule: strip everything except ASCII digits and `.`, then take the
//! longest leading prefix that is a valid decimal (at most one `.`). No digits,
//! or a non-finite result, coerces to `0.0`. Since `-` is stripped, coerced
//! values are never negative.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency string for zero
pub const ZERO_CURRENCY: &str = "$0.00";

/// Keep only ASCII digits and `.`, in order.
pub fn extract_numeric(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Lenient text → number conversion used for rates and miles.
///
/// `"$1,250.50"` → 1250.5, `"12.34.56"` → 12.34, `"abc"` → 0.0
pub fn coerce_number(text: &str) -> f64 {
    let numeric = extract_numeric(text);
    leading_decimal(&numeric)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Cut at the second `.`
fn leading_decimal(numeric: &str) -> &str {
    let mut seen_dot = false;
    let end = numeric
        .char_indices()
        .find(|&(_, c)| {
            if c != '.' {
                return false;
            }
            if seen_dot {
                return true;
            }
            seen_dot = true;
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(numeric.len());
    &numeric[..end]
}

/// Format free text as USD, e.g. `"650"` → `"$650.00"`, `"abc"` → `"$0.00"`.
pub fn format_currency(text: &str) -> String {
    format_usd(coerce_number(text))
}

/// Format an amount as en-US currency: `-$1,234.50`.
///
/// Rounds the shortest decimal form of `amount` (what the number prints as)
/// to the cent, ties away from zero, so `1.005` shows as `$1.01`. Non-finite
/// amounts render as `$0.00`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return ZERO_CURRENCY.to_string();
    }

    let shortest = amount.abs().to_string();
    let (dollars, cents) = match Decimal::from_str(&shortest) {
        Ok(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let text = format!("{:.2}", rounded);
            match text.split_once('.') {
                Some((dollars, cents)) => (dollars.to_string(), cents.to_string()),
                None => (text, "00".to_string()),
            }
        }
        // Out of Decimal range: either far below a cent or a whole number
        Err(_) if amount.abs() < 1.0 => ("0".to_string(), "00".to_string()),
        Err(_) => {
            let whole = shortest.split('.').next().unwrap_or("0");
            (whole.to_string(), "00".to_string())
        }
    };
    // "-$0.00" is never shown
    let negative = amount < 0.0 && dollars.bytes().chain(cents.bytes()).any(|b| b != b'0');

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(&dollars),
        cents
    )
}

/// Fixed-point rendering with `Number.prototype.toFixed` semantics.
///
/// Rounds the exact binary value (so `0.585` → `"0.58"`), ties away from zero,
/// keeps the sign of negative inputs, and switches to exponent form such as
/// `"1e+21"` at 1e21 and above.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return format!("{:.*}", digits as usize, 0.0);
    }
    if value.abs() >= 1e21 {
        return exponent_form(value);
    }

    let exact = Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO);
    let rounded = exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, digits as usize, rounded.abs())
}

fn exponent_form(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
