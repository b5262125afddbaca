//! Breakdown command - take-home pay estimate for one salary

use crate::cmd::prompt::Prompter;
use crate::core::{
    estimate, format_aud, format_pct, parse_amount, round_cents, super_rate_from_percent,
    PayBreakdown, PeriodPay, SalaryPackage, SuperTreatment, TotalRounding,
};
use crate::utils::write_csv;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BreakdownCommand {
    /// Annual salary in dollars. Prompted for if not given
    #[arg(short, long)]
    salary: Option<String>,

    /// The salary is a total package that includes super
    #[arg(long, conflicts_with = "exclusive")]
    inclusive: bool,

    /// Super is paid on top of the salary
    #[arg(long)]
    exclusive: bool,

    /// Superannuation rate in percent. Prompted for if not given
    #[arg(long)]
    super_rate: Option<String>,

    /// Include the HECS/HELP compulsory repayment
    #[arg(long, conflicts_with = "no_hecs")]
    hecs: bool,

    /// No HECS/HELP debt
    #[arg(long)]
    no_hecs: bool,

    /// How the total deduction is rounded
    #[arg(long, value_enum, default_value_t = RoundingArg::Components)]
    rounding: RoundingArg,

    /// Output as JSON instead of a formatted report
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output the pay periods as CSV
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RoundingArg {
    /// Round income tax, levy and repayment, then add them up
    #[default]
    Components,
    /// Add up the unrounded amounts, then round the total
    Unrounded,
}

impl From<RoundingArg> for TotalRounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Components => TotalRounding::Components,
            RoundingArg::Unrounded => TotalRounding::Unrounded,
        }
    }
}

/// Breakdown data for JSON output
#[derive(Debug, Serialize)]
struct BreakdownData {
    base_taxable_salary: String,
    super_treatment: SuperTreatment,
    super_rate_pct: String,
    super_component: String,
    deductions: DeductionsSummary,
    net_annual: String,
    periods: Vec<PeriodRecord>,
}

#[derive(Debug, Serialize)]
struct DeductionsSummary {
    income_tax: String,
    medicare_levy: String,
    hecs_repayment: String,
    has_hecs_debt: bool,
    total_deduction: String,
    marginal_tax_rate_pct: String,
    rounding: TotalRounding,
}

#[derive(Debug, Serialize)]
struct PeriodRecord {
    period: String,
    gross: String,
    net: String,
}

impl From<&PeriodPay> for PeriodRecord {
    fn from(pay: &PeriodPay) -> Self {
        PeriodRecord {
            period: pay.period.label().to_string(),
            gross: format!("{:.2}", pay.gross),
            net: format!("{:.2}", pay.net),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
struct PeriodRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl BreakdownCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        // keep stdout clean for machine readable output
        if self.json || self.csv {
            self.run(Prompter::new(stdin.lock(), io::stderr()))
        } else {
            self.run(Prompter::new(stdin.lock(), io::stdout()))
        }
    }

    fn run<R: BufRead, W: Write>(&self, mut prompter: Prompter<R, W>) -> anyhow::Result<()> {
        let (package, has_hecs_debt) = self.collect_inputs(&mut prompter)?;
        let rounding: TotalRounding = self.rounding.into();

        log::info!(
            "Estimating {} salary {} with super at {}",
            match package.treatment {
                SuperTreatment::Inclusive => "inclusive",
                SuperTreatment::Exclusive => "exclusive",
            },
            package.annual,
            format_pct(package.super_rate)
        );
        let breakdown = estimate(&package, has_hecs_debt, rounding);

        if self.json {
            self.print_json(&breakdown, rounding)
        } else if self.csv {
            let records: Vec<PeriodRecord> = breakdown.periods().iter().map(Into::into).collect();
            write_csv(records, io::stdout())
        } else {
            self.print_report(&breakdown);
            Ok(())
        }
    }

    /// Command line values first, then prompts for whatever is missing, in
    /// the order salary, super treatment, super rate, HECS/HELP debt.
    fn collect_inputs<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> anyhow::Result<(SalaryPackage, bool)> {
        let annual = match &self.salary {
            Some(salary) => parse_amount("salary", salary)?,
            None => prompter.salary()?,
        };
        let treatment = if self.inclusive {
            SuperTreatment::Inclusive
        } else if self.exclusive {
            SuperTreatment::Exclusive
        } else {
            prompter.super_treatment()?
        };
        let super_rate = match &self.super_rate {
            Some(rate) => super_rate_from_percent(rate),
            None => prompter.super_rate()?,
        };
        let has_hecs_debt = if self.hecs {
            true
        } else if self.no_hecs {
            false
        } else {
            prompter.has_repayment_debt()?
        };

        Ok((SalaryPackage::new(annual, treatment, super_rate), has_hecs_debt))
    }

    fn print_report(&self, breakdown: &PayBreakdown) {
        let taxes = &breakdown.taxes;
        let rule = "=".repeat(55);

        println!();
        println!("{rule}");
        println!(
            "** Taxable Base Salary: {} **",
            format_aud(breakdown.base_taxable_salary)
        );
        println!(
            "Superannuation Component ({}): {} (Employer Contribution)",
            format_pct(breakdown.super_rate),
            format_aud(breakdown.super_component)
        );
        println!("{rule}");
        println!();

        println!("--- ANNUAL DEDUCTIONS (Estimated) ---");
        println!("1. Income Tax (PAYG): {}", format_aud(taxes.income_tax));
        println!("2. Medicare Levy:     {}", format_aud(taxes.levy_amount));
        if taxes.has_repayment {
            println!("3. HECS/HELP Repay:   {}", format_aud(taxes.repayment_amount));
        }
        println!("Total Deduction:      {}", format_aud(taxes.total_deduction));
        println!("Marginal Tax Rate:    {}", format_pct(breakdown.marginal_rate()));
        println!();

        let periods = breakdown.periods();
        println!("--- NET PAY BREAKDOWN (Estimated Take-Home) ---");
        print_periods(periods.iter().map(|p| (p, p.net)));
        println!();

        println!("--- GROSS PAY BREAKDOWN (For Reference) ---");
        print_periods(periods.iter().map(|p| (p, p.gross)));
        println!();

        println!(
            "*NOTE: This is an ESTIMATE based on general assumptions (Australian resident, \
             claiming tax-free threshold). It excludes Medicare Levy Surcharge (MLS), \
             Low-Income Tax Offset (LITO), and other individual tax offsets."
        );
    }

    fn print_json(&self, breakdown: &PayBreakdown, rounding: TotalRounding) -> anyhow::Result<()> {
        let taxes = &breakdown.taxes;
        let data = BreakdownData {
            base_taxable_salary: format!("{:.2}", round_cents(breakdown.base_taxable_salary)),
            super_treatment: breakdown.super_treatment,
            super_rate_pct: format!("{:.2}", breakdown.super_rate * Decimal::ONE_HUNDRED),
            super_component: format!("{:.2}", round_cents(breakdown.super_component)),
            deductions: DeductionsSummary {
                income_tax: format!("{:.2}", taxes.income_tax),
                medicare_levy: format!("{:.2}", taxes.levy_amount),
                hecs_repayment: format!("{:.2}", taxes.repayment_amount),
                has_hecs_debt: taxes.has_repayment,
                total_deduction: format!("{:.2}", taxes.total_deduction),
                marginal_tax_rate_pct: format!(
                    "{:.2}",
                    breakdown.marginal_rate() * Decimal::ONE_HUNDRED
                ),
                rounding,
            },
            net_annual: format!("{:.2}", round_cents(breakdown.net_annual)),
            periods: breakdown.periods().iter().map(Into::into).collect(),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn print_periods<'a>(amounts: impl Iterator<Item = (&'a PeriodPay, Decimal)>) {
    let rows: Vec<PeriodRow> = amounts
        .map(|(pay, amount)| PeriodRow {
            period: pay.period.label().to_string(),
            amount: format_aud(amount),
        })
        .collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}
