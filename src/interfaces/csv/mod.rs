//! CSV adapters: debts in, schedule sheets out.

pub mod debt_reader;
pub mod schedule_writer;
