use super::money::{Apr, Money};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A raw debt entry as collected from the user, before validation.
///
/// Numeric fields are optional so that blank cells can be coerced instead of
/// rejecting the whole row.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct DebtInput {
    pub name: String,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub apr: Option<Decimal>,
    #[serde(default)]
    pub min_payment: Option<Decimal>,
}

impl DebtInput {
    pub fn new(name: impl Into<String>, balance: Decimal, apr: Decimal, min_payment: Decimal) -> Self {
        Self {
            name: name.into(),
            balance: Some(balance),
            apr: Some(apr),
            min_payment: Some(min_payment),
        }
    }
}

/// A ledger entry mutated week by week during a run.
#[derive(Debug, PartialEq, Clone)]
pub struct Debt {
    pub name: String,
    pub balance: Money,
    pub apr: Apr,
    pub min_payment: Money,
}

impl Debt {
    /// Validates a raw entry.
    ///
    /// Returns `None` when the entry takes no part in the run: a blank name or
    /// a balance that is not strictly positive. A non-positive APR becomes 0%
    /// and a negative minimum payment becomes zero.
    pub fn from_input(input: &DebtInput) -> Option<Self> {
        let name = input.name.trim();
        let balance = Money::new(input.balance.unwrap_or_default());
        if name.is_empty() || !balance.is_positive() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            balance,
            apr: Apr::new(input.apr.unwrap_or_default()),
            min_payment: Money::new(input.min_payment.unwrap_or_default()).non_negative(),
        })
    }

    pub fn is_paid_off(&self) -> bool {
        !self.balance.is_positive()
    }

    /// Pays up to `offered`, capped at the outstanding balance. Returns the
    /// amount actually applied.
    pub fn pay(&mut self, offered: Money) -> Money {
        let paid = offered.non_negative().min(self.balance);
        self.balance -= paid;
        paid
    }

    /// Adds one period of interest to a positive balance.
    ///
    /// Returns `None` if the new balance no longer fits in a decimal.
    pub fn accrue(&mut self) -> Option<Money> {
        if self.apr.is_zero() || self.is_paid_off() {
            return Some(Money::ZERO);
        }
        let interest = self.balance.checked_scale(self.apr.accrual_rate())?;
        self.balance = self.balance.checked_add(interest)?;
        Some(interest)
    }
}
