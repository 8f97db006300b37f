use clap::Parser;
use log::{info, warn};
use miette::{IntoDiagnostic, Result};
use payoff::application::config::{DEFAULT_MAX_WEEKS, SimulatorConfig};
use payoff::application::simulator::PayoffSimulator;
use payoff::domain::money::Money;
use payoff::domain::ports::{ScheduleSink, ScheduleSinkBox};
use payoff::interfaces::csv::debt_reader::DebtReader;
use payoff::interfaces::csv::schedule_writer::{CurrencyFormat, ScheduleWriter, Sheet};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debts CSV file with columns name,balance,apr,min_payment
    debts: PathBuf,

    /// Weekly income
    #[arg(long)]
    income: Decimal,

    /// Weekly expenses
    #[arg(long)]
    expenses: Decimal,

    /// Give up if debt remains after this many weeks
    #[arg(long, default_value_t = DEFAULT_MAX_WEEKS)]
    max_weeks: u32,

    /// Sheet written to stdout when no output directory is given
    #[arg(long, value_enum, default_value_t = Sheet::Payments)]
    sheet: Sheet,

    /// How monetary cells are rendered
    #[arg(long, value_enum, default_value_t = CurrencyFormat::Plain)]
    currency: CurrencyFormat,

    /// Write every sheet into this directory instead of stdout
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = SimulatorConfig::new(cli.max_weeks).into_diagnostic()?;

    let file = File::open(&cli.debts).into_diagnostic()?;
    let mut debts = Vec::new();
    for (row, result) in DebtReader::new(file).debts().enumerate() {
        match result {
            Ok(debt) => debts.push(debt),
            Err(e) => warn!("Skipping debt row {}: {}", row + 1, e),
        }
    }

    let schedule = PayoffSimulator::new(config)
        .run(Money::new(cli.income), Money::new(cli.expenses), &debts)
        .into_diagnostic()?;

    match cli.output_dir {
        Some(dir) => {
            let mut sinks: Vec<ScheduleSinkBox> = Vec::new();
            for sheet in Sheet::ALL {
                let file = File::create(dir.join(sheet.file_name())).into_diagnostic()?;
                sinks.push(Box::new(ScheduleWriter::new(file, sheet, cli.currency)));
            }
            for sink in &mut sinks {
                sink.write_schedule(&schedule).into_diagnostic()?;
            }
            info!("Wrote {} sheets to {}", sinks.len(), dir.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = ScheduleWriter::new(stdout.lock(), cli.sheet, cli.currency);
            writer.write_schedule(&schedule).into_diagnostic()?;
        }
    }

    // Financial data: release it as soon as every sheet is written.
    drop(schedule);
    drop(debts);

    Ok(())
}
