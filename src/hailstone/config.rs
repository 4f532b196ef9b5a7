//! Hailstone run configuration
//!
//! Bundles the parameterisation with the iteration cap and the choice of
//! terminus (total stopping time vs. stopping time).

use crate::Parameterisation;

/// Default iteration cap for hailstone and stopping time runs
pub const DEFAULT_MAX_TOTAL_STOPPING_TIME: i64 = 1000;

/// Configuration for a single hailstone run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HailstoneConfig {
    /// Map to iterate
    pub params: Parameterisation,

    /// Iteration cap; non-positive values are treated as 1
    pub max_total_stopping_time: i64,

    /// Stop at 1 (true) or at the first value closer to zero than the start (false)
    pub total_stopping_time: bool,
}

impl HailstoneConfig {
    /// Classical map, cap 1000, stopping at the first value closer to zero.
    pub fn stopping_time() -> Self {
        Self {
            total_stopping_time: false,
            ..Self::default()
        }
    }

    /// Replace the parameterisation
    pub fn with_params(mut self, params: Parameterisation) -> Self {
        self.params = params;
        self
    }

    /// Replace the iteration cap
    pub fn with_max_total_stopping_time(mut self, max: i64) -> Self {
        self.max_total_stopping_time = max;
        self
    }

    /// Choose the terminus
    pub fn with_total_stopping_time(mut self, total: bool) -> Self {
        self.total_stopping_time = total;
        self
    }

    /// The cap actually used: `max(max_total_stopping_time, 1)`
    pub fn effective_cap(&self) -> i64 {
        self.max_total_stopping_time.max(1)
    }
}

impl Default for HailstoneConfig {
    /// Classical map, cap 1000, stopping at 1.
    fn default() -> Self {
        Self {
            params: Parameterisation::default(),
            max_total_stopping_time: DEFAULT_MAX_TOTAL_STOPPING_TIME,
            total_stopping_time: true,
        }
    }
}
