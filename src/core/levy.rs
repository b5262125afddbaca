//! Medicare levy with the low income phase-in.

use super::money::round_cents;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// No levy is payable at or below this taxable income
pub const LEVY_LOWER_THRESHOLD: Decimal = dec!(27222.00);
/// Full levy applies from this taxable income upwards
pub const LEVY_UPPER_THRESHOLD: Decimal = dec!(34027.00);
/// Rate on income above the lower threshold while phasing in
pub const LEVY_PHASE_IN_RATE: Decimal = dec!(0.10);
/// Full levy rate on the whole taxable income
pub const LEVY_RATE: Decimal = dec!(0.02);

/// Levy before rounding.
///
/// The full rate branch applies exactly at the upper threshold. The phase-in
/// formula is kept as published, so it does not meet the full rate exactly
/// just below the threshold.
pub fn levy_unrounded(taxable_income: Decimal) -> Decimal {
    if taxable_income <= LEVY_LOWER_THRESHOLD {
        Decimal::ZERO
    } else if taxable_income < LEVY_UPPER_THRESHOLD {
        LEVY_PHASE_IN_RATE * (taxable_income - LEVY_LOWER_THRESHOLD)
    } else {
        LEVY_RATE * taxable_income
    }
}

/// Medicare levy on a taxable income, rounded to cents.
pub fn levy(taxable_income: Decimal) -> Decimal {
    round_cents(levy_unrounded(taxable_income))
}
