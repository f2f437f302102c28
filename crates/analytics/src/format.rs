//! Display formatting for calculation results.
//!
//! Formatting only touches presentation; the values held by `InvestmentSummary`
//! and `CapTable` are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

const AMOUNT_MAX_FRACTION_DIGITS: u32 = 3;
const PERCENT_FRACTION_DIGITS: u32 = 2;

/// Formats a money amount with grouping separators and at most three
/// fraction digits, e.g. `$1,234,567.5`.
pub fn format_amount(value: Decimal, currency_symbol: &str) -> String {
    let rounded = value
        .round_dp_with_strategy(AMOUNT_MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let (negative, digits) = group_digits(rounded);
    if negative {
        format!("-{currency_symbol}{digits}")
    } else {
        format!("{currency_symbol}{digits}")
    }
}

/// Formats an ownership percentage with exactly two decimals, e.g. `33.33%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value
        .round_dp_with_strategy(PERCENT_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    rounded.rescale(PERCENT_FRACTION_DIGITS);
    let (negative, digits) = group_digits(rounded);
    if negative {
        format!("-{digits}%")
    } else {
        format!("{digits}%")
    }
}

/// Rounds a share count to the nearest whole share, e.g. `333,333`.
pub fn format_shares(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let (negative, digits) = group_digits(rounded);
    if negative {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Returns the sign and the absolute value with `,` between thousands.
fn group_digits(value: Decimal) -> (bool, String) {
    let negative = value.is_sign_negative() && !value.is_zero();
    let text = value.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    (negative, grouped)
}
