// src/application/dto/display.rs
//! Display formatting for stored catalog values.

use crate::domain::money::PriceCents;
use crate::domain::product::AgeYears;

pub const CURRENCY_SYMBOL: &str = "$";

/// `2900` -> `"$29.00"`.
pub fn format_price(price: PriceCents) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(price.value()))
}

/// Value to refill a price input with: `"29.00"`, or empty when absent.
pub fn price_input_value(price: Option<PriceCents>) -> String {
    price
        .map(|price| format_amount(price.value()))
        .unwrap_or_default()
}

fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// `"Ages 8–12"`, `"Ages 8"`, `"Ages ?–12"`, or `None` when neither bound is
/// set.
pub fn age_range_label(min: Option<AgeYears>, max: Option<AgeYears>) -> Option<String> {
    if min.is_none() && max.is_none() {
        return None;
    }
    let lower = min
        .map(|age| age.value().to_string())
        .unwrap_or_else(|| "?".to_string());
    Some(match max {
        Some(upper) => format!("Ages {lower}–{}", upper.value()),
        None => format!("Ages {lower}"),
    })
}

/// `"PENDING_REVIEW"` -> `"Pending Review"`.
pub fn humanize_label(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
