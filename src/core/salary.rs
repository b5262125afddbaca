//! Deriving the taxable base salary from a quoted salary and its
//! superannuation treatment.

use super::error::InputError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

/// Superannuation guarantee rate for 2024/25, in percent
pub const DEFAULT_SUPER_RATE_PERCENT: Decimal = dec!(11);
/// Highest super rate accepted, in percent
pub const MAX_SUPER_RATE_PERCENT: Decimal = dec!(100);

/// Whether a quoted salary already contains the employer's super contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SuperTreatment {
    /// Quoted as a total package, super included
    Inclusive,
    /// Quoted as base salary, super paid on top
    #[default]
    Exclusive,
}

/// An annual salary as quoted, with how super relates to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryPackage {
    pub annual: Decimal,
    pub treatment: SuperTreatment,
    /// Fraction, e.g. `0.11` for 11%
    pub super_rate: Decimal,
}

impl SalaryPackage {
    pub fn new(annual: Decimal, treatment: SuperTreatment, super_rate: Decimal) -> Self {
        Self {
            annual,
            treatment,
            super_rate,
        }
    }

    /// Salary subject to income tax. Unrounded.
    pub fn base_taxable_salary(&self) -> Decimal {
        match self.treatment {
            SuperTreatment::Inclusive => self.annual / (Decimal::ONE + self.super_rate),
            SuperTreatment::Exclusive => self.annual,
        }
    }

    /// Employer super contribution. Unrounded.
    pub fn super_component(&self) -> Decimal {
        match self.treatment {
            SuperTreatment::Inclusive => self.annual - self.base_taxable_salary(),
            SuperTreatment::Exclusive => self.annual * self.super_rate,
        }
    }
}

/// Parse a dollar amount typed by the user, accepting `$`, thousands
/// separators and scientific notation (`5e4`). Negative amounts are rejected.
pub fn parse_amount(field: &'static str, input: &str) -> Result<Decimal, InputError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: input.trim().to_string(),
        })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::NegativeAmount {
            field,
            value: input.trim().to_string(),
        });
    }
    Ok(amount)
}

/// Super rate as a fraction from a percentage typed by the user.
///
/// Blank, unparseable, negative or over 100% input falls back to the
/// default rate.
pub fn super_rate_from_percent(input: &str) -> Decimal {
    let input = input.trim().trim_end_matches('%').trim();
    let percent = if input.is_empty() {
        DEFAULT_SUPER_RATE_PERCENT
    } else {
        match parse_amount("super rate", input) {
            Ok(percent) if percent > MAX_SUPER_RATE_PERCENT => {
                log::warn!(
                    "super rate {percent}% is above {MAX_SUPER_RATE_PERCENT}%, \
                     using the standard {DEFAULT_SUPER_RATE_PERCENT}%"
                );
                DEFAULT_SUPER_RATE_PERCENT
            }
            Ok(percent) => percent,
            Err(e) => {
                log::warn!("{e}, using the standard {DEFAULT_SUPER_RATE_PERCENT}%");
                DEFAULT_SUPER_RATE_PERCENT
            }
        }
    };
    percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::round_cents;

    #[test]
    fn exclusive_salary_is_taxable_base() {
        let package = SalaryPackage::new(dec!(50000), SuperTreatment::Exclusive, dec!(0.11));
        assert_eq!(package.base_taxable_salary(), dec!(50000));
        assert_eq!(package.super_component(), dec!(5500.00));
    }

    #[test]
    fn inclusive_salary_removes_super() {
        let package = SalaryPackage::new(dec!(60000), SuperTreatment::Inclusive, dec!(0.11));
        assert_eq!(round_cents(package.base_taxable_salary()), dec!(54054.05));
        assert_eq!(round_cents(package.super_component()), dec!(5945.95));
    }

    #[test]
    fn inclusive_parts_add_back_to_package() {
        let package = SalaryPackage::new(dec!(123456.78), SuperTreatment::Inclusive, dec!(0.115));
        assert_eq!(
            round_cents(package.base_taxable_salary() + package.super_component()),
            dec!(123456.78)
        );
    }

    #[test]
    fn zero_super_rate() {
        let package = SalaryPackage::new(dec!(80000), SuperTreatment::Inclusive, dec!(0));
        assert_eq!(package.base_taxable_salary(), dec!(80000));
        assert_eq!(package.super_component(), dec!(0));
    }

    #[test]
    fn parses_plain_and_formatted_amounts() {
        assert_eq!(parse_amount("salary", "50000"), Ok(dec!(50000)));
        assert_eq!(parse_amount("salary", " 50000.50 \n"), Ok(dec!(50000.50)));
        assert_eq!(parse_amount("salary", "$85,000"), Ok(dec!(85000)));
        assert_eq!(parse_amount("salary", "0"), Ok(dec!(0)));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert_eq!(
            parse_amount("salary", "lots"),
            Err(InputError::InvalidNumber {
                field: "salary",
                value: "lots".to_string()
            })
        );
        assert!(parse_amount("salary", "").is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(
            parse_amount("salary", "-1"),
            Err(InputError::NegativeAmount {
                field: "salary",
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn super_rate_from_percentage() {
        assert_eq!(super_rate_from_percent("11"), dec!(0.11));
        assert_eq!(super_rate_from_percent("11.5"), dec!(0.115));
        assert_eq!(super_rate_from_percent("12%"), dec!(0.12));
    }

    #[test]
    fn super_rate_falls_back_to_default() {
        assert_eq!(super_rate_from_percent(""), dec!(0.11));
        assert_eq!(super_rate_from_percent("eleven"), dec!(0.11));
        assert_eq!(super_rate_from_percent("-5"), dec!(0.11));
    }

    #[test]
    fn super_rate_above_cap_falls_back_to_default() {
        assert_eq!(super_rate_from_percent("100"), dec!(1));
        assert_eq!(super_rate_from_percent("100.01"), dec!(0.11));
        assert_eq!(
            super_rate_from_percent("10000000000000000000000000000"),
            dec!(0.11)
        );
    }

    #[test]
    fn huge_super_rate_input_still_computes_super() {
        let rate = super_rate_from_percent("10000000000000000000000000000");
        let package = SalaryPackage::new(dec!(50000), SuperTreatment::Exclusive, rate);
        assert_eq!(package.super_component(), dec!(5500.00));

        let package = SalaryPackage::new(dec!(50000), SuperTreatment::Inclusive, rate);
        assert_eq!(round_cents(package.base_taxable_salary()), dec!(45045.05));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_amount("salary", "5e4"), Ok(dec!(50000)));
        assert_eq!(parse_amount("salary", "1.2E5"), Ok(dec!(120000)));
        assert_eq!(super_rate_from_percent("1.15e1"), dec!(0.115));
        assert!(matches!(
            parse_amount("salary", "-5e4"),
            Err(InputError::NegativeAmount { .. })
        ));
        assert!(matches!(
            parse_amount("salary", "5e"),
            Err(InputError::InvalidNumber { .. })
        ));
    }
}
