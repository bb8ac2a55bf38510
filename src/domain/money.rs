// src/domain/money.rs
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::str::FromStr;

/// A strictly positive amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceCents(i64);

impl PriceCents {
    pub fn new(cents: i64) -> DomainResult<Self> {
        if cents <= 0 {
            return Err(DomainError::validation("price must be positive"));
        }
        Ok(Self(cents))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<PriceCents> for i64 {
    fn from(value: PriceCents) -> Self {
        value.0
    }
}

/// Plain decimal grammar: optional sign, digits with at most one `.`, and an
/// optional `e`/`E` exponent. Digit separators are not numbers.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok =
        !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction);

    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

/// Convert a decimal currency string such as `"29.00"` into cents.
///
/// Rounds half away from zero at the cent, in exact decimal arithmetic, so
/// `"19.995"` becomes `2000` and `"19.994"` becomes `1999`.
pub fn normalize_price(text: &str) -> DomainResult<PriceCents> {
    let text = text.trim();
    if !is_decimal_literal(text) {
        return Err(DomainError::validation("price is not a number"));
    }

    let value = match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(value) => value,
        // Well-formed but outside what `Decimal` holds.
        Err(_) => return Err(out_of_range(text)),
    };
    if value <= Decimal::ZERO {
        return Err(DomainError::validation("price must be positive"));
    }

    let cents = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or_else(|| DomainError::validation("price is too large"))?;

    PriceCents::new(cents)
}

fn out_of_range(text: &str) -> DomainError {
    match text.parse::<f64>() {
        Ok(value) if value >= 1.0 => {
            DomainError::validation("price is too large")
        }
        // Negative, or so small it rounds to zero cents.
        _ => DomainError::validation("price must be positive"),
    }
}

/// Lenient counterpart used for sale prices: blank, unparsable and
/// non-positive input all mean "no sale price".
pub fn normalize_optional_price(text: Option<&str>) -> Option<PriceCents> {
    text.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| normalize_price(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(text: &str) -> i64 {
        normalize_price(text).unwrap().value()
    }

    #[test]
    fn converts_dollars_to_cents() {
        assert_eq!(cents("29.00"), 2900);
        assert_eq!(cents("29"), 2900);
        assert_eq!(cents("0.01"), 1);
        assert_eq!(cents(" 49.5 "), 4950);
        assert_eq!(cents("1e2"), 10000);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(cents("19.999"), 2000);
        assert_eq!(cents("19.994"), 1999);
        assert_eq!(cents("19.995"), 2000);
        assert_eq!(cents("1.005"), 101);
    }

    #[test]
    fn rejects_non_numbers_and_non_positive() {
        let err = normalize_price("abc").unwrap_err();
        assert!(err.to_string().contains("not a number"));
        let err = normalize_price("0").unwrap_err();
        assert!(err.to_string().contains("positive"));
        assert!(normalize_price("-3.50").is_err());
        assert!(normalize_price("").is_err());
        assert!(normalize_price("0.001").is_err());
        for text in ["1_000", "1__0", "5_", "1,5", "1.2.3", "e5", "1e", "."] {
            let err = normalize_price(text).unwrap_err();
            assert!(err.to_string().contains("not a number"), "{text}");
        }
    }

    #[test]
    fn huge_amounts_are_too_large() {
        for text in ["99999999999999999999999999999", "1e30", "100000000000000000"] {
            let err = normalize_price(text).unwrap_err();
            assert!(err.to_string().contains("too large"), "{text}");
        }
        let err = normalize_price("-1e30").unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn optional_price_is_permissive() {
        assert_eq!(normalize_optional_price(None), None);
        assert_eq!(normalize_optional_price(Some("  ")), None);
        assert_eq!(normalize_optional_price(Some("cheap")), None);
        assert_eq!(normalize_optional_price(Some("-1")), None);
        assert_eq!(normalize_optional_price(Some("1_000")), None);
        assert_eq!(
            normalize_optional_price(Some("19.99")).map(PriceCents::value),
            Some(1999)
        );
    }
}
