//! Interactive questions for values not given on the command line.

use crate::core::{parse_amount, super_rate_from_percent, SuperTreatment, DEFAULT_SUPER_RATE_PERCENT};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line. End of input reads as blank.
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask_yes_no(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(question)?;
        Ok(is_yes(&answer))
    }

    pub fn salary(&mut self) -> anyhow::Result<Decimal> {
        let answer = self.ask("Please enter the TOTAL annual salary: $")?;
        Ok(parse_amount("salary", &answer)?)
    }

    pub fn super_treatment(&mut self) -> anyhow::Result<SuperTreatment> {
        let inclusive = self.ask_yes_no(
            "Is the entered salary INCLUSIVE of superannuation (Total Package)? (yes/no): ",
        )?;
        Ok(if inclusive {
            SuperTreatment::Inclusive
        } else {
            SuperTreatment::Exclusive
        })
    }

    /// Super rate as a fraction; bad answers fall back to the standard rate.
    pub fn super_rate(&mut self) -> anyhow::Result<Decimal> {
        let answer = self.ask(&format!(
            "What is the superannuation percentage? (Enter '{0}' for the standard {0}%): ",
            DEFAULT_SUPER_RATE_PERCENT
        ))?;
        Ok(super_rate_from_percent(&answer))
    }

    pub fn has_repayment_debt(&mut self) -> anyhow::Result<bool> {
        self.ask_yes_no("Do you have a HECS/HELP debt? (yes/no): ")
    }
}

/// Only an explicit "yes" counts, in any case.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
