use super::brackets::{income_tax, income_tax_unrounded};
use super::levy::{levy, levy_unrounded};
use super::money::round_cents;
use super::repayment::{repayment, repayment_unrounded};
use rust_decimal::Decimal;
use serde::Serialize;

/// How the total deduction is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TotalRounding {
    /// Round each sub-amount, then round their sum
    #[default]
    Components,
    /// Round the sum of the unrounded sub-amounts
    Unrounded,
}

/// Annual deductions from a taxable salary. All amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub income_tax: Decimal,
    pub levy_amount: Decimal,
    /// Zero when no repayment was requested
    pub repayment_amount: Decimal,
    pub total_deduction: Decimal,
    /// Whether a study loan repayment was requested
    pub has_repayment: bool,
}

/// Income tax, Medicare levy and, if `has_repayment_debt`, the HECS/HELP
/// repayment on a taxable base salary.
pub fn calculate_annual_tax(
    base_taxable_salary: Decimal,
    has_repayment_debt: bool,
    rounding: TotalRounding,
) -> TaxResult {
    let income_tax = income_tax(base_taxable_salary);
    let levy_amount = levy(base_taxable_salary);
    let repayment_amount = if has_repayment_debt {
        repayment(base_taxable_salary)
    } else {
        Decimal::ZERO
    };

    let total_deduction = match rounding {
        TotalRounding::Components => round_cents(income_tax + levy_amount + repayment_amount),
        TotalRounding::Unrounded => {
            let repayment_raw = if has_repayment_debt {
                repayment_unrounded(base_taxable_salary)
            } else {
                Decimal::ZERO
            };
            round_cents(
                income_tax_unrounded(base_taxable_salary)
                    + levy_unrounded(base_taxable_salary)
                    + repayment_raw,
            )
        }
    };

    log::debug!(
        "Tax {} + levy {} + repayment {} = {} ({:?})",
        income_tax,
        levy_amount,
        repayment_amount,
        total_deduction,
        rounding
    );

    TaxResult {
        income_tax,
        levy_amount,
        repayment_amount,
        total_deduction,
        has_repayment: has_repayment_debt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn salary_without_debt() {
        let result = calculate_annual_tax(dec!(50000), false, TotalRounding::Components);
        assert_eq!(result.income_tax, dec!(5788.00));
        assert_eq!(result.levy_amount, dec!(1000.00));
        assert_eq!(result.repayment_amount, dec!(0));
        assert_eq!(result.total_deduction, dec!(6788.00));
        assert!(!result.has_repayment);
    }

    #[test]
    fn salary_inclusive_of_super() {
        let base = dec!(60000) / dec!(1.11);
        let result = calculate_annual_tax(base, false, TotalRounding::Components);
        assert_eq!(result.income_tax, dec!(7004.22));
        assert_eq!(result.levy_amount, dec!(1081.08));
        assert_eq!(result.total_deduction, dec!(8085.30));
    }

    #[test]
    fn salary_with_debt_in_top_band() {
        let result = calculate_annual_tax(dec!(160000), true, TotalRounding::Components);
        assert_eq!(result.income_tax, dec!(40538.00));
        assert_eq!(result.levy_amount, dec!(3200.00));
        assert_eq!(result.repayment_amount, dec!(16000.00));
        assert_eq!(result.total_deduction, dec!(59738.00));
        assert!(result.has_repayment);
    }

    #[test]
    fn debt_flag_off_ignores_repayment() {
        let result = calculate_annual_tax(dec!(160000), false, TotalRounding::Components);
        assert_eq!(result.repayment_amount, dec!(0));
        assert_eq!(result.total_deduction, dec!(43738.00));
    }

    #[test]
    fn debt_below_threshold_repays_nothing() {
        let result = calculate_annual_tax(dec!(40000), true, TotalRounding::Components);
        assert_eq!(result.repayment_amount, dec!(0));
        assert!(result.has_repayment);
    }

    #[test]
    fn rounding_modes_can_differ_by_a_cent() {
        // tax 1888.004, levy 277.8025
        let income = dec!(30000.025);
        let components = calculate_annual_tax(income, false, TotalRounding::Components);
        let unrounded = calculate_annual_tax(income, false, TotalRounding::Unrounded);

        assert_eq!(components.income_tax, dec!(1888.00));
        assert_eq!(components.levy_amount, dec!(277.80));
        assert_eq!(components.total_deduction, dec!(2165.80));
        assert_eq!(unrounded.total_deduction, dec!(2165.81));
        assert_eq!(unrounded.income_tax, components.income_tax);
    }

    #[test]
    fn rounding_modes_agree_on_whole_dollars() {
        for salary in [dec!(0), dec!(50000), dec!(160000), dec!(250000)] {
            let a = calculate_annual_tax(salary, true, TotalRounding::Components);
            let b = calculate_annual_tax(salary, true, TotalRounding::Unrounded);
            assert_eq!(a, b, "at {salary}");
        }
    }

    proptest! {
        #[test]
        fn total_is_sum_of_rounded_parts(cents in 0u64..50_000_000u64, debt: bool) {
            let income = Decimal::new(cents as i64, 2);
            let result = calculate_annual_tax(income, debt, TotalRounding::Components);
            prop_assert_eq!(
                result.total_deduction,
                round_cents(result.income_tax + result.levy_amount + result.repayment_amount)
            );
        }

        #[test]
        fn modes_stay_within_rounding_error(micros in 0u64..500_000_000_000u64, debt: bool) {
            let income = Decimal::new(micros as i64, 6);
            let a = calculate_annual_tax(income, debt, TotalRounding::Components);
            let b = calculate_annual_tax(income, debt, TotalRounding::Unrounded);
            // half a cent of drift per rounded part
            let bound = if debt { dec!(0.02) } else { dec!(0.01) };
            prop_assert!((a.total_deduction - b.total_deduction).abs() <= bound);
        }
    }
}
