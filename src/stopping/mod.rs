//! Stopping time
//!
//! Collapses a hailstone run into one `f64`:
//!
//! | terminal condition       | value                   |
//! |--------------------------|-------------------------|
//! | STOPPING_TIME            | iterations              |
//! | TOTAL_STOPPING_TIME      | iterations              |
//! | ZERO_STOP                | minus the iterations    |
//! | CYCLE_LENGTH             | `f64::INFINITY`         |
//! | MAX_STOP_OUT_OF_BOUNDS   | `f64::NEG_INFINITY`     |
//!
//! Negative infinity only means "budget exhausted"; it is not a zero stop.

use num_bigint::BigInt;

use crate::hailstone::{HailstoneConfig, HailstoneSequence, TerminalCondition};
use crate::{CollatzError, Parameterisation};

/// Map a finished hailstone run onto its stopping time.
pub fn from_sequence(hail: &HailstoneSequence) -> f64 {
    match hail.terminal_condition() {
        TerminalCondition::StoppingTime
        | TerminalCondition::TotalStoppingTime
        | TerminalCondition::ZeroStop => hail.terminal_status() as f64,
        TerminalCondition::CycleLength => f64::INFINITY,
        TerminalCondition::MaxStopOutOfBounds => f64::NEG_INFINITY,
    }
}

/// Stopping time of `initial_value` under `params`.
///
/// With `total_stopping_time` this counts iterations to reach 1 instead of
/// iterations to reach a value closer to zero than the start.
pub fn stopping_time(
    initial_value: &BigInt,
    params: &Parameterisation,
    max_stopping_time: i64,
    total_stopping_time: bool,
) -> Result<f64, CollatzError> {
    let config = HailstoneConfig {
        params: params.clone(),
        max_total_stopping_time: max_stopping_time,
        total_stopping_time,
    };
    stopping_time_with(initial_value, &config)
}

/// Stopping time under an explicit [`HailstoneConfig`].
pub fn stopping_time_with(initial_value: &BigInt, config: &HailstoneConfig) -> Result<f64, CollatzError> {
    let hail = HailstoneSequence::compute(initial_value, config)?;
    Ok(from_sequence(&hail))
}

/// Stopping time under the classical map, cap 1000, non-total mode.
pub fn stopping_time_default(initial_value: &BigInt) -> f64 {
    from_sequence(&HailstoneSequence::run(initial_value, &HailstoneConfig::stopping_time()))
}
