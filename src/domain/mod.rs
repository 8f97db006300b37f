//! Domain layer: monetary value objects, the debt ledger and the schedule it
//! produces, plus the port through which output stages consume a schedule.

pub mod debt;
pub mod money;
pub mod ports;
pub mod schedule;
