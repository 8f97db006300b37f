use crate::domain::money::Money;
use crate::domain::ports::ScheduleSink;
use crate::domain::schedule::Schedule;
use crate::error::Result;
use clap::ValueEnum;
use rust_decimal::RoundingStrategy;
use std::io::Write;

/// Which view of the schedule to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sheet {
    /// Payment made to each debt per week.
    Payments,
    /// Balance of each debt after the week's payments.
    Balances,
    /// Total outstanding balance per week.
    Totals,
}

impl Sheet {
    pub const ALL: [Sheet; 3] = [Sheet::Payments, Sheet::Balances, Sheet::Totals];

    pub fn file_name(&self) -> &'static str {
        match self {
            Sheet::Payments => "payments.csv",
            Sheet::Balances => "balances.csv",
            Sheet::Totals => "totals.csv",
        }
    }

    fn header(&self, debt_names: &[String]) -> Vec<String> {
        let mut header = vec!["Week".to_string()];
        match self {
            Sheet::Payments => header.extend(debt_names.iter().map(|n| format!("{n} Payment"))),
            Sheet::Balances => header.extend(
                debt_names
                    .iter()
                    .map(|n| format!("{n} Balance After Payment")),
            ),
            Sheet::Totals => header.push("Total Balance".to_string()),
        }
        header
    }
}

/// How monetary cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CurrencyFormat {
    /// Full decimal precision, trailing zeros dropped.
    Exact,
    /// Rounded to cents, e.g. `1234.50`.
    #[default]
    Plain,
    /// Rounded to cents with a dollar sign and thousands separators,
    /// e.g. `$1,234.50`.
    Dollar,
}

impl CurrencyFormat {
    pub fn format(&self, amount: Money) -> String {
        let value = amount.value();
        match self {
            CurrencyFormat::Exact => value.normalize().to_string(),
            CurrencyFormat::Plain => {
                format!("{:.2}", value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            }
            CurrencyFormat::Dollar => {
                let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                let digits = format!("{:.2}", rounded.abs());
                let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
                let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
                    "-"
                } else {
                    ""
                };
                format!("{sign}${}.{cents}", group_thousands(whole))
            }
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Writes one sheet of a schedule as CSV.
pub struct ScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
    sheet: Sheet,
    currency: CurrencyFormat,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W, sheet: Sheet, currency: CurrencyFormat) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            sheet,
            currency,
        }
    }

    fn write_row(&mut self, week: u32, cells: impl IntoIterator<Item = Money>) -> Result<()> {
        let mut record = vec![week.to_string()];
        record.extend(cells.into_iter().map(|cell| self.currency.format(cell)));
        self.writer.write_record(&record)?;
        Ok(())
    }
}

impl<W: Write> ScheduleSink for ScheduleWriter<W> {
    fn write_schedule(&mut self, schedule: &Schedule) -> Result<()> {
        self.writer
            .write_record(self.sheet.header(schedule.debt_names()))?;

        for row in schedule.rows() {
            match self.sheet {
                Sheet::Payments => self.write_row(row.week, row.payments.iter().copied())?,
                Sheet::Balances => self.write_row(row.week, row.balances.iter().copied())?,
                Sheet::Totals => self.write_row(row.week, [row.total_balance()])?,
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
