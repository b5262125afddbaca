//! Rates command - the fixed tables every estimate is based on

use crate::core::{
    format_aud, format_pct, RepaymentBand, TaxBracket, INCOME_TAX_BRACKETS, LEVY_LOWER_THRESHOLD,
    LEVY_PHASE_IN_RATE, LEVY_RATE, LEVY_UPPER_THRESHOLD, REPAYMENT_BANDS,
};
use clap::{Args, ValueEnum};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Which table to show
    #[arg(value_enum, default_value = "all")]
    table: RatesTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RatesTable {
    /// Income tax brackets
    Tax,
    /// Medicare levy thresholds
    Levy,
    /// HECS/HELP repayment bands
    Hecs,
    All,
}

#[derive(Debug, Clone, Tabled)]
struct BracketRow {
    #[tabled(rename = "Taxable Income")]
    range: String,
    #[tabled(rename = "Tax on This Income")]
    formula: String,
}

#[derive(Debug, Clone, Tabled)]
struct LevyRow {
    #[tabled(rename = "Taxable Income")]
    range: String,
    #[tabled(rename = "Levy")]
    formula: String,
}

#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Repayment Income")]
    range: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let show = |table: RatesTable| self.table == table || self.table == RatesTable::All;

        if show(RatesTable::Tax) {
            print_table("INCOME TAX BRACKETS", INCOME_TAX_BRACKETS.iter().map(bracket_row));
        }
        if show(RatesTable::Levy) {
            print_table("MEDICARE LEVY", levy_rows());
        }
        if show(RatesTable::Hecs) {
            print_table("HECS/HELP REPAYMENT BANDS", REPAYMENT_BANDS.iter().map(band_row));
        }
        Ok(())
    }
}

fn print_table<T: Tabled>(title: &str, rows: impl IntoIterator<Item = T>) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!();
    println!("{}", title);
    println!("{}", table);
}

fn bracket_row(bracket: &TaxBracket) -> BracketRow {
    let range = match bracket.upper {
        Some(upper) if bracket.lower.is_zero() => {
            format!("{} - {}", format_aud(bracket.lower), format_aud(upper))
        }
        Some(upper) => format!("over {} - {}", format_aud(bracket.lower), format_aud(upper)),
        None => format!("over {}", format_aud(bracket.lower)),
    };
    let formula = if bracket.rate.is_zero() {
        "Nil".to_string()
    } else if bracket.base_tax.is_zero() {
        format!("{} of excess over {}", format_pct(bracket.rate), format_aud(bracket.lower))
    } else {
        format!(
            "{} plus {} of excess over {}",
            format_aud(bracket.base_tax),
            format_pct(bracket.rate),
            format_aud(bracket.lower)
        )
    };
    BracketRow { range, formula }
}

fn levy_rows() -> Vec<LevyRow> {
    vec![
        LevyRow {
            range: format!("{} or less", format_aud(LEVY_LOWER_THRESHOLD)),
            formula: "Nil".to_string(),
        },
        LevyRow {
            range: format!(
                "over {} - under {}",
                format_aud(LEVY_LOWER_THRESHOLD),
                format_aud(LEVY_UPPER_THRESHOLD)
            ),
            formula: format!(
                "{} of excess over {}",
                format_pct(LEVY_PHASE_IN_RATE),
                format_aud(LEVY_LOWER_THRESHOLD)
            ),
        },
        LevyRow {
            range: format!("{} and over", format_aud(LEVY_UPPER_THRESHOLD)),
            formula: format!("{} of taxable income", format_pct(LEVY_RATE)),
        },
    ]
}

fn band_row(band: &RepaymentBand) -> BandRow {
    let range = match band.upper {
        Some(upper) => format!("{} - {}", format_aud(band.lower), format_aud(upper)),
        None => format!("{} and over", format_aud(band.lower)),
    };
    BandRow {
        range,
        rate: format_pct(band.rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_free_bracket_row() {
        let row = bracket_row(&INCOME_TAX_BRACKETS[0]);
        assert_eq!(row.range, "$0.00 - $18,200.00");
        assert_eq!(row.formula, "Nil");
    }

    #[test]
    fn bracket_rows_show_base_tax() {
        let row = bracket_row(&INCOME_TAX_BRACKETS[2]);
        assert_eq!(row.range, "over $45,000.00 - $135,000.00");
        assert_eq!(row.formula, "$4,288.00 plus 30.00% of excess over $45,000.00");

        let top = bracket_row(&INCOME_TAX_BRACKETS[4]);
        assert_eq!(top.range, "over $190,000.00");
    }

    #[test]
    fn levy_rows_cover_three_ranges() {
        let rows = levy_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].formula, "2.00% of taxable income");
    }

    #[test]
    fn band_rows() {
        let top = band_row(&REPAYMENT_BANDS[0]);
        assert_eq!(top.range, "$159,664.00 and over");
        assert_eq!(top.rate, "10.00%");

        let lowest = band_row(&REPAYMENT_BANDS[18]);
        assert_eq!(lowest.range, "$0.00 - $54,434.00");
        assert_eq!(lowest.rate, "0.00%");
    }
}
