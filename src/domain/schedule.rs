use super::money::Money;

/// One simulated week: what was paid to each debt and what it owed afterwards.
///
/// All vectors are aligned to the debt order fixed at the start of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub week: u32,
    pub payments: Vec<Money>,
    /// Balances right after this week's payments.
    pub balances: Vec<Money>,
    /// Balances after this week's interest accrual, carried into next week.
    pub closing_balances: Vec<Money>,
}

impl WeekRow {
    pub fn total_paid(&self) -> Money {
        self.payments.iter().sum()
    }

    pub fn total_balance(&self) -> Money {
        self.balances.iter().sum()
    }
}

/// The append-only, week-indexed record produced by one payoff run.
///
/// The simulator checks the total owed and the total paid against the decimal
/// range every week, so the sums exposed here cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    debt_names: Vec<String>,
    starting_principal: Money,
    rows: Vec<WeekRow>,
}

impl Schedule {
    pub fn new(debt_names: Vec<String>, starting_principal: Money) -> Self {
        Self {
            debt_names,
            starting_principal,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: WeekRow) {
        debug_assert_eq!(row.payments.len(), self.debt_names.len());
        debug_assert_eq!(row.balances.len(), self.debt_names.len());
        debug_assert_eq!(row.closing_balances.len(), self.debt_names.len());
        self.rows.push(row);
    }

    pub fn debt_names(&self) -> &[String] {
        &self.debt_names
    }

    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Number of weeks until every debt reached zero.
    pub fn weeks(&self) -> u32 {
        self.rows.last().map_or(0, |row| row.week)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn starting_principal(&self) -> Money {
        self.starting_principal
    }

    /// Total outstanding balance per week, the series a balance chart plots.
    pub fn total_balances(&self) -> Vec<(u32, Money)> {
        self.rows
            .iter()
            .map(|row| (row.week, row.total_balance()))
            .collect()
    }

    pub fn total_paid(&self) -> Money {
        self.rows.iter().map(WeekRow::total_paid).sum()
    }

    /// Interest paid over the whole schedule. Every completed schedule ends at
    /// zero, so this is whatever was paid beyond the starting principal.
    pub fn total_interest(&self) -> Money {
        (self.total_paid() - self.starting_principal).non_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(values: &[rust_decimal::Decimal]) -> Vec<Money> {
        values.iter().copied().map(Money::new).collect()
    }

    #[test]
    fn test_schedule_totals() {
        let mut schedule = Schedule::new(
            vec!["Card".to_string(), "Loan".to_string()],
            Money::new(dec!(150)),
        );
        schedule.push(WeekRow {
            week: 1,
            payments: money(&[dec!(80), dec!(20)]),
            balances: money(&[dec!(20), dec!(30)]),
            closing_balances: money(&[dec!(22), dec!(30.5)]),
        });
        schedule.push(WeekRow {
            week: 2,
            payments: money(&[dec!(22), dec!(30.5)]),
            balances: money(&[dec!(0), dec!(0)]),
            closing_balances: money(&[dec!(0), dec!(0)]),
        });

        assert_eq!(schedule.weeks(), 2);
        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.total_balances(),
            vec![(1, Money::new(dec!(50))), (2, Money::ZERO)]
        );
        assert_eq!(schedule.total_paid(), Money::new(dec!(152.5)));
        assert_eq!(schedule.total_interest(), Money::new(dec!(2.5)));
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::new(vec![], Money::ZERO);
        assert!(schedule.is_empty());
        assert_eq!(schedule.weeks(), 0);
        assert_eq!(schedule.total_interest(), Money::ZERO);
    }
}
