use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use fintrack::config::Settings;
use fintrack::display::format_transaction_list;
use fintrack::reports::{CategoryAveragesReport, SummaryReport};
use fintrack::seed;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance ledger reporting tool",
    long_about = "fintrack holds a ledger of income and expense transactions and \
                  prints a console report: the full transaction listing, a \
                  financial summary, and the average expense per category."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let settings = Settings::default();
    let ledger = seed::sample_ledger()?;

    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    write!(
        stdout,
        "{}{}{}",
        format_transaction_list(ledger.transactions(), &settings),
        SummaryReport::generate(&ledger).format_terminal(&settings),
        CategoryAveragesReport::generate(&ledger).format_terminal(&settings)
    )?;
    stdout.flush()?;

    Ok(())
}
