//! Hailstone sequence engine
//!
//! Iterates the step function from an initial value and classifies how the
//! trajectory ends:
//! - **Terminus**: 1 (total mode) or the first value strictly between zero
//!   and the start (stopping-time mode, oriented by the sign of the start)
//! - **Cycle**: a value already on the trajectory reappears
//! - **Zero**: the trajectory reaches 0
//! - **Budget**: `max(cap, 1)` iterations pass without any of the above
//!
//! Checks run in that order on every new value.

mod condition;
mod config;

pub use condition::TerminalCondition;
pub use config::{HailstoneConfig, DEFAULT_MAX_TOTAL_STOPPING_TIME};

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::function;
use crate::{CollatzError, Parameterisation};

/// Completed hailstone run
///
/// `values[0]` is the initial value; the last value is the one that ended
/// the run (for cycles, the repeated value).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct HailstoneSequence {
    values: Vec<BigInt>,
    terminal_condition: TerminalCondition,
    terminal_status: i64,
}

/// Stopping test chosen once per run
#[derive(Debug, Clone, Copy)]
enum Terminus<'a> {
    /// value == 1
    One,
    /// 0 < value < start
    BelowPositive(&'a BigInt),
    /// start < value < 0
    AboveNegative(&'a BigInt),
}

impl<'a> Terminus<'a> {
    fn new(initial_value: &'a BigInt, total_stopping_time: bool) -> Self {
        if total_stopping_time {
            Terminus::One
        } else if initial_value.is_negative() {
            Terminus::AboveNegative(initial_value)
        } else {
            Terminus::BelowPositive(initial_value)
        }
    }

    fn reached(&self, value: &BigInt) -> bool {
        match self {
            Terminus::One => value.is_one(),
            Terminus::BelowPositive(start) => value < *start && value.is_positive(),
            Terminus::AboveNegative(start) => value > *start && value.is_negative(),
        }
    }
}

impl HailstoneSequence {
    /// Run the engine under `config`, validating the parameterisation first.
    pub fn compute(initial_value: &BigInt, config: &HailstoneConfig) -> Result<Self, CollatzError> {
        config.params.validate()?;
        Ok(Self::run(initial_value, config))
    }

    /// Engine body; `config.params` must already be valid.
    pub(crate) fn run(initial_value: &BigInt, config: &HailstoneConfig) -> Self {
        if initial_value.is_zero() {
            return Self::immediate(initial_value, TerminalCondition::ZeroStop);
        }
        if initial_value.is_one() {
            return Self::immediate(initial_value, TerminalCondition::TotalStoppingTime);
        }

        let params = &config.params;
        let terminus = Terminus::new(initial_value, config.total_stopping_time);
        let cap = config.effective_cap();

        let mut values = Vec::with_capacity(cap.min(1024) as usize + 1);
        values.push(initial_value.clone());
        // value -> index of its only occurrence
        let mut seen: HashMap<BigInt, usize> = HashMap::new();
        seen.insert(initial_value.clone(), 0);

        for k in 1..=cap {
            let next = function::apply(&values[values.len() - 1], params);
            trace!(k, value = %next, "hailstone step");

            if terminus.reached(&next) {
                let condition = if next.is_one() {
                    TerminalCondition::TotalStoppingTime
                } else {
                    TerminalCondition::StoppingTime
                };
                values.push(next);
                return Self::finish(values, condition, k);
            }

            if let Some(&first) = seen.get(&next) {
                let cycle_length = (values.len() - first) as i64;
                debug!(%initial_value, %next, cycle_length, "hailstone entered a cycle");
                values.push(next);
                return Self::finish(values, TerminalCondition::CycleLength, cycle_length);
            }

            if next.is_zero() {
                values.push(next);
                return Self::finish(values, TerminalCondition::ZeroStop, -k);
            }

            seen.insert(next.clone(), values.len());
            values.push(next);
        }

        debug!(%initial_value, cap, "hailstone exhausted its iteration budget");
        Self::finish(values, TerminalCondition::MaxStopOutOfBounds, cap)
    }

    fn immediate(value: &BigInt, condition: TerminalCondition) -> Self {
        Self {
            values: vec![value.clone()],
            terminal_condition: condition,
            terminal_status: 0,
        }
    }

    fn finish(values: Vec<BigInt>, condition: TerminalCondition, status: i64) -> Self {
        debug!(condition = %condition, status, length = values.len(), "hailstone finished");
        Self {
            values,
            terminal_condition: condition,
            terminal_status: status,
        }
    }

    /// Trajectory in visiting order
    pub fn values(&self) -> &[BigInt] {
        &self.values
    }

    /// Consume the run, keeping only the trajectory
    pub fn into_values(self) -> Vec<BigInt> {
        self.values
    }

    /// How the run ended
    pub fn terminal_condition(&self) -> TerminalCondition {
        self.terminal_condition
    }

    /// Iteration count, cycle length, negated zero-stop count or cap,
    /// depending on [`terminal_condition`](Self::terminal_condition)
    pub fn terminal_status(&self) -> i64 {
        self.terminal_status
    }

    /// Number of values on the trajectory
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a run holds at least its initial value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First value of the trajectory
    pub fn initial_value(&self) -> &BigInt {
        &self.values[0]
    }

    /// Value that ended the run
    pub fn last_value(&self) -> &BigInt {
        &self.values[self.values.len() - 1]
    }
}

/// Hailstone sequence of `initial_value` under `params`.
///
/// `max_total_stopping_time` below 1 is treated as 1. With
/// `total_stopping_time` the run stops at 1, otherwise at the first value
/// closer to zero than `initial_value`.
pub fn hailstone_sequence(
    initial_value: &BigInt,
    params: &Parameterisation,
    max_total_stopping_time: i64,
    total_stopping_time: bool,
) -> Result<HailstoneSequence, CollatzError> {
    let config = HailstoneConfig {
        params: params.clone(),
        max_total_stopping_time,
        total_stopping_time,
    };
    HailstoneSequence::compute(initial_value, &config)
}

/// Hailstone sequence under the classical map, stopping at 1.
pub fn hailstone_sequence_default(initial_value: &BigInt, max_total_stopping_time: i64) -> HailstoneSequence {
    let config = HailstoneConfig::default().with_max_total_stopping_time(max_total_stopping_time);
    HailstoneSequence::run(initial_value, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn bigs(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn test_terminus_orientation() {
        let start = big(-7);
        let terminus = Terminus::new(&start, false);
        assert!(terminus.reached(&big(-3)));
        assert!(!terminus.reached(&big(-9)));
        assert!(!terminus.reached(&big(0)));

        let start = big(7);
        let terminus = Terminus::new(&start, false);
        assert!(terminus.reached(&big(3)));
        assert!(!terminus.reached(&big(0)));
        assert!(!terminus.reached(&big(7)));
    }

    #[test]
    fn test_total_stopping_time_of_sixteen() {
        let hail = hailstone_sequence_default(&big(16), 1000);
        assert_eq!(hail.values(), bigs(&[16, 8, 4, 2, 1]).as_slice());
        assert_eq!(hail.terminal_condition(), TerminalCondition::TotalStoppingTime);
        assert_eq!(hail.terminal_status(), 4);
        assert_eq!(hail.last_value(), &big(1));
    }

    #[test]
    fn test_cycle_status_counts_from_first_occurrence() {
        // 3 -> -3 -> 3 under P = -1
        let params = Parameterisation::new(-1, 3, 1);
        let hail = hailstone_sequence(&big(3), &params, 100, true).unwrap();
        assert_eq!(hail.values(), bigs(&[3, -3, 3]).as_slice());
        assert_eq!(hail.terminal_condition(), TerminalCondition::CycleLength);
        assert_eq!(hail.terminal_status(), 2);
    }

    #[test]
    fn test_budget_exhausted() {
        let hail = hailstone_sequence_default(&big(27), 10);
        assert_eq!(hail.terminal_condition(), TerminalCondition::MaxStopOutOfBounds);
        assert_eq!(hail.terminal_status(), 10);
        assert_eq!(hail.len(), 11);
    }
}
