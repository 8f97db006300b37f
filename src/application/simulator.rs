use super::config::SimulatorConfig;
use crate::domain::debt::{Debt, DebtInput};
use crate::domain::money::Money;
use crate::domain::schedule::{Schedule, WeekRow};
use crate::error::{PayoffError, Result};
use log::{debug, info};
use std::collections::HashSet;

/// Simulates paying down a set of debts from a fixed weekly budget.
///
/// Every week the disposable budget (income minus expenses) is spent in two
/// passes over the debts ordered by APR, highest first:
///
/// 1. each debt receives its minimum payment, while budget lasts;
/// 2. whatever is left goes to the highest-APR debts in turn until the
///    budget runs out.
///
/// Interest is then accrued on what remains and the loop repeats until every
/// balance is zero. The simulator holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoffSimulator {
    config: SimulatorConfig,
}

impl PayoffSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Runs the simulation to completion.
    ///
    /// # Errors
    ///
    /// * `InvalidBudget` if income or expenses is negative, or income does
    ///   not exceed expenses.
    /// * `NoValidDebts` if no entry has a name and a positive balance.
    /// * `DuplicateDebtName` if two retained entries share a name.
    /// * `IterationLimitExceeded` if debt remains after `max_weeks` weeks.
    /// * `Overflow` if a balance, the total owed or the total paid leaves
    ///   the decimal range.
    pub fn run(
        &self,
        weekly_income: Money,
        weekly_expenses: Money,
        debts: &[DebtInput],
    ) -> Result<Schedule> {
        let budget = weekly_income - weekly_expenses;
        if weekly_income < Money::ZERO || weekly_expenses < Money::ZERO || !budget.is_positive() {
            return Err(PayoffError::InvalidBudget {
                income: weekly_income,
                expenses: weekly_expenses,
            });
        }

        let mut ledger = Ledger::from_inputs(debts)?;
        let mut owed = ledger
            .total_balance()
            .ok_or(PayoffError::Overflow { week: 0 })?;
        let mut schedule = Schedule::new(ledger.names(), owed);
        let mut paid_to_date = Money::ZERO;
        let mut week = 0;

        while owed.is_positive() {
            if week == self.config.max_weeks {
                return Err(PayoffError::IterationLimitExceeded {
                    max_weeks: self.config.max_weeks,
                    remaining: owed,
                });
            }
            week += 1;

            let payments = ledger.allocate(budget);
            let paid: Money = payments.iter().sum();
            let balances = ledger.balances();
            ledger.accrue().ok_or(PayoffError::Overflow { week })?;
            owed = ledger.total_balance().ok_or(PayoffError::Overflow { week })?;
            paid_to_date = paid_to_date
                .checked_add(paid)
                .ok_or(PayoffError::Overflow { week })?;

            debug!("week {}: paid {}, owed {}", week, paid, owed);
            schedule.push(WeekRow {
                week,
                payments,
                balances,
                closing_balances: ledger.balances(),
            });
        }

        info!(
            "Paid off {} debts in {} weeks (total paid {}, interest {})",
            schedule.debt_names().len(),
            schedule.weeks(),
            paid_to_date,
            schedule.total_interest()
        );
        Ok(schedule)
    }
}

/// Runs a simulation with the default configuration.
pub fn run(weekly_income: Money, weekly_expenses: Money, debts: &[DebtInput]) -> Result<Schedule> {
    PayoffSimulator::default().run(weekly_income, weekly_expenses, debts)
}

/// The debts of a single run, in input order, with their payment priority.
struct Ledger {
    debts: Vec<Debt>,
    /// Indices into `debts` by descending APR; ties keep input order.
    priority: Vec<usize>,
}

impl Ledger {
    fn from_inputs(inputs: &[DebtInput]) -> Result<Self> {
        let debts: Vec<Debt> = inputs.iter().filter_map(Debt::from_input).collect();
        if debts.is_empty() {
            return Err(PayoffError::NoValidDebts);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = debts.iter().find(|debt| !seen.insert(debt.name.as_str())) {
            return Err(PayoffError::DuplicateDebtName(dup.name.clone()));
        }

        // APRs are fixed for the run, so the weekly ordering never changes.
        let mut priority: Vec<usize> = (0..debts.len()).collect();
        priority.sort_by(|&a, &b| debts[b].apr.cmp(&debts[a].apr));

        Ok(Self { debts, priority })
    }

    fn names(&self) -> Vec<String> {
        self.debts.iter().map(|debt| debt.name.clone()).collect()
    }

    fn balances(&self) -> Vec<Money> {
        self.debts.iter().map(|debt| debt.balance).collect()
    }

    /// Sum of all balances, or `None` once it no longer fits in a decimal.
    fn total_balance(&self) -> Option<Money> {
        self.debts
            .iter()
            .try_fold(Money::ZERO, |total, debt| total.checked_add(debt.balance))
    }

    /// Spends one week's budget and returns the payment made to each debt.
    fn allocate(&mut self, budget: Money) -> Vec<Money> {
        let mut payments = vec![Money::ZERO; self.debts.len()];
        let mut remaining = budget;

        // Minimum payments.
        for &i in &self.priority {
            if !remaining.is_positive() {
                break;
            }
            let debt = &mut self.debts[i];
            let paid = debt.pay(debt.min_payment.min(remaining));
            payments[i] += paid;
            remaining -= paid;
        }

        // Avalanche: a debt either absorbs the rest of the budget or is
        // cleared, so one sweep in priority order visits each candidate once.
        for &i in &self.priority {
            if !remaining.is_positive() {
                break;
            }
            let debt = &mut self.debts[i];
            if debt.is_paid_off() {
                continue;
            }
            let paid = debt.pay(remaining);
            payments[i] += paid;
            remaining -= paid;
        }

        payments
    }

    fn accrue(&mut self) -> Option<()> {
        for debt in &mut self.debts {
            debt.accrue()?;
        }
        Some(())
    }
}
