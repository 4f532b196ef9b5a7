//! Conway parameterisation (P, a, b)
//!
//! - P: modulus; n is divided by P iff n ≡ 0 (mod P)
//! - a: multiplicand applied otherwise
//! - b: addend applied after the multiplication
//!
//! P = 0 makes the modulus test meaningless and a = 0 destroys reversibility,
//! so both are rejected. b is unconstrained.

use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

use crate::CollatzError;

/// Default modulus P of the classical map.
pub const DEFAULT_P: i64 = 2;

/// Default multiplicand a of the classical map.
pub const DEFAULT_A: i64 = 3;

/// Default addend b of the classical map.
pub const DEFAULT_B: i64 = 1;

/// Reason a parameterisation was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterError {
    /// P was zero.
    #[error("'P' should not be 0 ~ violates modulo being non-zero.")]
    ModulusIsZero,

    /// a was zero.
    #[error("'a' should not be 0 ~ violates the reversability.")]
    MultiplicandIsZero,
}

/// Immutable (P, a, b) triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Parameterisation {
    /// Modulus P
    pub p: BigInt,

    /// Multiplicand a
    pub a: BigInt,

    /// Addend b
    pub b: BigInt,
}

impl Parameterisation {
    /// Create without validating. Every operation validates before use.
    pub fn new(p: impl Into<BigInt>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        Self {
            p: p.into(),
            a: a.into(),
            b: b.into(),
        }
    }

    /// Create and validate in one go.
    pub fn validated(
        p: impl Into<BigInt>,
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
    ) -> Result<Self, CollatzError> {
        let params = Self::new(p, a, b);
        params.validate()?;
        Ok(params)
    }

    /// Check P ≠ 0, then a ≠ 0. Only the first violation is reported.
    pub fn validate(&self) -> Result<(), CollatzError> {
        if self.p.is_zero() {
            return Err(ParameterError::ModulusIsZero.into());
        }
        if self.a.is_zero() {
            return Err(ParameterError::MultiplicandIsZero.into());
        }
        Ok(())
    }

    /// Whether this is the classical (2, 3, 1) map
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Parameterisation {
    fn default() -> Self {
        Self::new(DEFAULT_P, DEFAULT_A, DEFAULT_B)
    }
}

impl std::fmt::Display for Parameterisation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(P={}, a={}, b={})", self.p, self.a, self.b)
    }
}
