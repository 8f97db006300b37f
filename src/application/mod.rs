//! Application layer containing the payoff simulation.
//!
//! `PayoffSimulator` validates the caller's budget and debts, then runs the
//! weekly minimum-payment and highest-APR-first allocation until every debt
//! reaches zero.

pub mod config;
pub mod simulator;
