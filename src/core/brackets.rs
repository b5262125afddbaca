//! Resident income tax brackets (2024/25 rates).
//!
//! Tax is marginal: each bracket carries the tax owed on all income below it
//! as `base_tax`, so the tax for an income is `base_tax + rate * (income - lower)`
//! using the single bracket the income falls in.

use super::money::round_cents;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Income tax free threshold
pub const TAX_FREE_THRESHOLD: Decimal = dec!(18200);

/// One marginal bracket. The lower bound is exclusive and the upper bound
/// inclusive, except for the first bracket which starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub lower: Decimal,
    /// `None` for the top bracket
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    /// Tax owed on income up to `lower`
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Unrounded tax on `income`, using this bracket's formula.
    pub fn tax_at(&self, income: Decimal) -> Decimal {
        self.base_tax + self.rate * (income - self.lower)
    }

    pub fn contains(&self, income: Decimal) -> bool {
        self.upper.is_none_or(|upper| income <= upper)
    }
}

pub static INCOME_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        lower: dec!(0),
        upper: Some(TAX_FREE_THRESHOLD),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxBracket {
        lower: TAX_FREE_THRESHOLD,
        upper: Some(dec!(45000)),
        rate: dec!(0.16),
        base_tax: dec!(0),
    },
    TaxBracket {
        lower: dec!(45000),
        upper: Some(dec!(135000)),
        rate: dec!(0.30),
        base_tax: dec!(4288.00),
    },
    TaxBracket {
        lower: dec!(135000),
        upper: Some(dec!(190000)),
        rate: dec!(0.37),
        base_tax: dec!(31288.00),
    },
    TaxBracket {
        lower: dec!(190000),
        upper: None,
        rate: dec!(0.45),
        base_tax: dec!(51638.00),
    },
];

/// The bracket a taxable income falls in.
///
/// Incomes at or below the tax free threshold (including any negative value a
/// caller failed to reject) land in the first bracket.
pub fn bracket_for(taxable_income: Decimal) -> &'static TaxBracket {
    let top = &INCOME_TAX_BRACKETS[INCOME_TAX_BRACKETS.len() - 1];
    INCOME_TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.contains(taxable_income))
        .unwrap_or(top)
}

/// Income tax before rounding.
pub fn income_tax_unrounded(taxable_income: Decimal) -> Decimal {
    if taxable_income <= TAX_FREE_THRESHOLD {
        return Decimal::ZERO;
    }
    let bracket = bracket_for(taxable_income);
    log::debug!(
        "Income {} in bracket over {} at {}",
        taxable_income,
        bracket.lower,
        bracket.rate
    );
    bracket.tax_at(taxable_income)
}

/// Income tax owed on a non-negative taxable income, rounded to cents.
pub fn income_tax(taxable_income: Decimal) -> Decimal {
    round_cents(income_tax_unrounded(taxable_income))
}
