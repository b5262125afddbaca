//! HECS/HELP compulsory repayment.
//!
//! Unlike income tax this is not marginal: the band an income falls in picks
//! one rate, and that rate applies to the whole income.

use super::money::round_cents;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Below this income no repayment is due
pub const REPAYMENT_THRESHOLD: Decimal = dec!(54435);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepaymentBand {
    pub lower: Decimal,
    /// `None` for the top band
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

const fn band(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> RepaymentBand {
    RepaymentBand { lower, upper, rate }
}

/// Ordered from the highest lower bound down.
pub static REPAYMENT_BANDS: [RepaymentBand; 19] = [
    band(dec!(159664), None, dec!(0.100)),
    band(dec!(150627), Some(dec!(159663)), dec!(0.095)),
    band(dec!(142101), Some(dec!(150626)), dec!(0.090)),
    band(dec!(134057), Some(dec!(142100)), dec!(0.085)),
    band(dec!(126468), Some(dec!(134056)), dec!(0.080)),
    band(dec!(119310), Some(dec!(126467)), dec!(0.075)),
    band(dec!(112557), Some(dec!(119309)), dec!(0.070)),
    band(dec!(106186), Some(dec!(112556)), dec!(0.065)),
    band(dec!(100175), Some(dec!(106185)), dec!(0.060)),
    band(dec!(94504), Some(dec!(100174)), dec!(0.055)),
    band(dec!(89155), Some(dec!(94503)), dec!(0.050)),
    band(dec!(84108), Some(dec!(89154)), dec!(0.045)),
    band(dec!(79347), Some(dec!(84107)), dec!(0.040)),
    band(dec!(74856), Some(dec!(79346)), dec!(0.035)),
    band(dec!(70619), Some(dec!(74855)), dec!(0.030)),
    band(dec!(66621), Some(dec!(70618)), dec!(0.025)),
    band(dec!(62851), Some(dec!(66620)), dec!(0.020)),
    band(REPAYMENT_THRESHOLD, Some(dec!(62850)), dec!(0.010)),
    band(dec!(0), Some(dec!(54434)), dec!(0.000)),
];

/// The band that sets the repayment rate, or `None` below the threshold.
///
/// The first band (scanning down) whose lower bound is at or below the income
/// wins, so incomes between a band's upper bound and the next lower bound
/// (e.g. 62850.50) take the lower band's rate.
pub fn band_for(repayment_income: Decimal) -> Option<&'static RepaymentBand> {
    if repayment_income < REPAYMENT_THRESHOLD {
        return None;
    }
    REPAYMENT_BANDS
        .iter()
        .find(|band| band.lower <= repayment_income)
}

/// Repayment before rounding.
pub fn repayment_unrounded(repayment_income: Decimal) -> Decimal {
    match band_for(repayment_income) {
        Some(band) => {
            log::debug!(
                "Repayment income {} in band from {} at {}",
                repayment_income,
                band.lower,
                band.rate
            );
            repayment_income * band.rate
        }
        None => Decimal::ZERO,
    }
}

/// Compulsory repayment on a repayment income, rounded to cents.
pub fn repayment(repayment_income: Decimal) -> Decimal {
    round_cents(repayment_unrounded(repayment_income))
}
