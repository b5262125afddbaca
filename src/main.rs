use clap::{Parser, Subcommand};

mod cmd;
mod core;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "paycalc",
    version,
    about = "Estimate Australian take-home pay from an annual salary"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate income tax, Medicare levy, HECS/HELP and take-home pay
    Breakdown(cmd::breakdown::BreakdownCommand),
    /// Show the tax brackets, levy thresholds and repayment bands
    Rates(cmd::rates::RatesCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Breakdown(breakdown) => breakdown.exec(),
        Command::Rates(rates) => rates.exec(),
    }
}
