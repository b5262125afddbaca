//! Annual figures split into pay periods.

use super::brackets::bracket_for;
use super::money::round_cents;
use super::salary::{SalaryPackage, SuperTreatment};
use super::tax::{calculate_annual_tax, TaxResult, TotalRounding};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayPeriod {
    Annual,
    Monthly,
    Fortnightly,
    Weekly,
    Daily,
    Hourly,
}

impl PayPeriod {
    pub const ALL: [PayPeriod; 6] = [
        PayPeriod::Annual,
        PayPeriod::Monthly,
        PayPeriod::Fortnightly,
        PayPeriod::Weekly,
        PayPeriod::Daily,
        PayPeriod::Hourly,
    ];

    /// Periods per year. Daily assumes 260 working days, hourly 8 hours a day.
    pub fn divisor(&self) -> Decimal {
        match self {
            PayPeriod::Annual => dec!(1),
            PayPeriod::Monthly => dec!(12),
            PayPeriod::Fortnightly => dec!(26),
            PayPeriod::Weekly => dec!(52),
            PayPeriod::Daily => dec!(260),
            PayPeriod::Hourly => dec!(2080),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayPeriod::Annual => "Annual",
            PayPeriod::Monthly => "Monthly",
            PayPeriod::Fortnightly => "Fortnightly",
            PayPeriod::Weekly => "Weekly",
            PayPeriod::Daily => "Daily",
            PayPeriod::Hourly => "Hourly",
        }
    }
}

/// Gross and take-home pay for one period, rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodPay {
    pub period: PayPeriod,
    pub gross: Decimal,
    pub net: Decimal,
}

/// Everything the report shows for one salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayBreakdown {
    pub base_taxable_salary: Decimal,
    pub super_treatment: SuperTreatment,
    pub super_rate: Decimal,
    pub super_component: Decimal,
    pub taxes: TaxResult,
    pub net_annual: Decimal,
}

impl PayBreakdown {
    pub fn new(package: &SalaryPackage, taxes: TaxResult) -> Self {
        let base_taxable_salary = package.base_taxable_salary();
        let net_annual = base_taxable_salary - taxes.total_deduction;
        PayBreakdown {
            base_taxable_salary,
            super_treatment: package.treatment,
            super_rate: package.super_rate,
            super_component: package.super_component(),
            taxes,
            net_annual,
        }
    }

    /// Unrounded gross pay for a period
    pub fn gross(&self, period: PayPeriod) -> Decimal {
        self.base_taxable_salary / period.divisor()
    }

    /// Unrounded take-home pay for a period
    pub fn net(&self, period: PayPeriod) -> Decimal {
        self.net_annual / period.divisor()
    }

    /// Income tax rate on the next dollar of taxable salary
    pub fn marginal_rate(&self) -> Decimal {
        bracket_for(self.base_taxable_salary).rate
    }

    pub fn periods(&self) -> Vec<PeriodPay> {
        PayPeriod::ALL
            .iter()
            .map(|&period| PeriodPay {
                period,
                gross: round_cents(self.gross(period)),
                net: round_cents(self.net(period)),
            })
            .collect()
    }
}

/// Runs the whole estimate for a salary package.
pub fn estimate(
    package: &SalaryPackage,
    has_repayment_debt: bool,
    rounding: TotalRounding,
) -> PayBreakdown {
    let taxes = calculate_annual_tax(package.base_taxable_salary(), has_repayment_debt, rounding);
    PayBreakdown::new(package, taxes)
}
