use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount backed by `rust_decimal::Decimal`.
///
/// Balances, payments and budgets all flow through this type so that the
/// simulator never touches binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Clamps negative amounts to zero.
    pub fn non_negative(self) -> Self {
        self.max(Self::ZERO)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Multiplies by a plain rate, returning `None` on decimal overflow.
    pub fn checked_scale(self, rate: Decimal) -> Option<Self> {
        self.0.checked_mul(rate).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Annual percentage rate, stored as a percentage (24 means 24%).
///
/// Zero is a real rate, not "unset": such a debt simply never accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Apr(Decimal);

impl Apr {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Builds a rate, coercing anything at or below zero to `0%`.
    pub fn new(percent: Decimal) -> Self {
        if percent > Decimal::ZERO {
            Self(percent)
        } else {
            Self::ZERO
        }
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The rate applied at each simulated week: the *monthly* rate
    /// `apr / 12 / 100`. Weekly application of a monthly rate is the
    /// established behaviour of this payoff policy and is kept as-is.
    pub fn accrual_rate(&self) -> Decimal {
        self.0 / Decimal::from(12) / Decimal::ONE_HUNDRED
    }
}
