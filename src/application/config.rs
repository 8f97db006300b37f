use crate::error::{PayoffError, Result};

/// 100 years of weekly payments.
pub const DEFAULT_MAX_WEEKS: u32 = 5200;

/// Tunables for a payoff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Weeks simulated before the run gives up with
    /// `PayoffError::IterationLimitExceeded`.
    pub max_weeks: u32,
}

impl SimulatorConfig {
    pub fn new(max_weeks: u32) -> Result<Self> {
        if max_weeks == 0 {
            return Err(PayoffError::Config(
                "max_weeks must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_weeks })
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_weeks: DEFAULT_MAX_WEEKS,
        }
    }
}
