use super::schedule::Schedule;
use crate::error::Result;

/// An output stage that consumes a finished payoff schedule.
///
/// Sinks only read the schedule; the caller keeps ownership and drops it once
/// every sink has run.
pub trait ScheduleSink {
    fn write_schedule(&mut self, schedule: &Schedule) -> Result<()>;
}

pub type ScheduleSinkBox = Box<dyn ScheduleSink>;
