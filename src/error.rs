use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("Income minus expenses must be greater than zero, and neither may be negative (income {income}, expenses {expenses})")]
    InvalidBudget { income: Money, expenses: Money },
    #[error("Please enter at least one valid debt")]
    NoValidDebts,
    #[error("Duplicate debt name: {0}")]
    DuplicateDebtName(String),
    #[error("Debts not paid off within {max_weeks} weeks ({remaining} still owed)")]
    IterationLimitExceeded { max_weeks: u32, remaining: Money },
    #[error("Balance overflow while accruing interest in week {week}")]
    Overflow { week: u32 },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
