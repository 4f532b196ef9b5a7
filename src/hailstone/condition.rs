//! Terminal conditions of a hailstone run

use std::fmt;

/// How a hailstone sequence ended
///
/// The meaning of the accompanying status depends on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum TerminalCondition {
    /// Reached a value closer to zero than the start (status: iterations)
    StoppingTime,

    /// Reached 1 (status: iterations)
    TotalStoppingTime,

    /// Revisited a value (status: cycle length)
    CycleLength,

    /// Reached 0 (status: minus the iterations, or 0 for a zero start)
    ZeroStop,

    /// Ran out of iterations (status: the clamped cap)
    MaxStopOutOfBounds,
}

impl TerminalCondition {
    /// Canonical upper-snake label
    pub fn label(&self) -> &'static str {
        match self {
            TerminalCondition::StoppingTime => "STOPPING_TIME",
            TerminalCondition::TotalStoppingTime => "TOTAL_STOPPING_TIME",
            TerminalCondition::CycleLength => "CYCLE_LENGTH",
            TerminalCondition::ZeroStop => "ZERO_STOP",
            TerminalCondition::MaxStopOutOfBounds => "MAX_STOP_OUT_OF_BOUNDS",
        }
    }

    /// Whether the run reached a natural stop rather than cycling or running out
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            TerminalCondition::StoppingTime
                | TerminalCondition::TotalStoppingTime
                | TerminalCondition::ZeroStop
        )
    }
}

impl fmt::Display for TerminalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
