//! Cent rounding and dollar formatting shared by every calculator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole cents, half away from zero.
///
/// Every figure that leaves a calculator passes through here, so the
/// rounding rule is applied the same way everywhere.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Australian dollars, e.g. `$1,234.56`.
pub fn format_aud(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a fractional rate as a percentage, e.g. `0.095` as `9.50%`.
pub fn format_pct(rate: Decimal) -> String {
    format!("{:.2}%", rate * Decimal::ONE_HUNDRED)
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
