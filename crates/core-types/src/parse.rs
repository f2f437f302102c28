use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses user-entered numeric text into a non-negative `Decimal`.
///
/// Parsing never fails: blank text, anything that is not a plain or
/// scientific-notation number, and values outside the `Decimal` range all
/// become zero. Negative values are clamped to zero.
pub fn parse_decimal(raw: &str) -> Decimal {
    let text = raw.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    // `Decimal::from_str` tolerates digit separators, which a form field does not.
    if text.contains('_') {
        tracing::debug!(input = raw, "Non-numeric input treated as zero.");
        return Decimal::ZERO;
    }

    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str(text).ok()
    };

    match parsed {
        Some(value) if value.is_sign_negative() && !value.is_zero() => {
            tracing::debug!(input = raw, "Negative input clamped to zero.");
            Decimal::ZERO
        }
        Some(value) => value.normalize(),
        None => {
            tracing::debug!(input = raw, "Non-numeric input treated as zero.");
            Decimal::ZERO
        }
    }
}
