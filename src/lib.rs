//! # Generalised Collatz Functions
//!
//! This library explores the Collatz conjecture under Conway's
//! generalisation: for a parameterisation (P, a, b),
//!
//! ```text
//! f(n) = n / P      if n ≡ 0 (mod P)
//! f(n) = a·n + b    otherwise
//! ```
//!
//! The classical map is (P, a, b) = (2, 3, 1).
//!
//! ## Components
//!
//! 1. **Step function**: forward `f(n)` and its reverse (one or two pre-images)
//! 2. **Hailstone engine**: iterate `f` until a stopping time, a cycle, zero,
//!    or the iteration budget is reached
//! 3. **Stopping time**: collapse a hailstone run into a single `f64`
//! 4. **Tree graph**: bounded reverse exploration with cycle marking
//!
//! All values are arbitrary precision; nothing wraps or saturates.
//!
//! ## Usage Example
//!
//! ```
//! use collatz::{hailstone, stopping, TerminalCondition};
//! use num_bigint::BigInt;
//!
//! let hail = hailstone::hailstone_sequence_default(&BigInt::from(27), 1000);
//! assert_eq!(hail.terminal_condition(), TerminalCondition::TotalStoppingTime);
//! assert_eq!(hail.terminal_status(), 111);
//!
//! assert_eq!(stopping::stopping_time_default(&BigInt::from(5)), 3.0);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod params;     // (P, a, b) parameterisation and validation
pub mod function;   // Forward and reverse step
pub mod hailstone;  // Hailstone sequence engine
pub mod stopping;   // Stopping time adapter
pub mod tree;       // Reverse tree graph
pub mod constants;  // Known cycles and verified range

// Re-exports for convenience
pub use params::{ParameterError, Parameterisation};
pub use function::{reverse_step, step, ReversePreimages};
pub use hailstone::{HailstoneConfig, HailstoneSequence, TerminalCondition};
pub use stopping::stopping_time;
pub use tree::{NodeId, NodeState, TreeGraph, TreeGraphNode};

use thiserror::Error;

/// Errors raised by any computation over a parameterisation.
///
/// Non-termination, cycles and exhausted budgets are not errors; they are
/// reported through [`TerminalCondition`] and [`NodeState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollatzError {
    /// The (P, a, b) triple failed validation.
    #[error("invalid parameterisation: {0}")]
    InvalidParameterisation(#[from] ParameterError),
}
