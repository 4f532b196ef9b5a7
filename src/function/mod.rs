//! Forward and reverse step of a generalised Collatz map
//!
//! Forward: f(n) = n/P if P | n, else a·n + b
//! Reverse: every n has the pre-image P·n; it has a second pre-image
//! (n − b)/a when that quotient is exact and is not itself divisible by P,
//! i.e. when a | (n − b) and P·a ∤ (n − b).
//!
//! Divisibility is tested by remainder == 0, which is the same under
//! truncating, flooring or Euclidean conventions, so negative P, a, b
//! behave uniformly. Quotients are only taken when exact.

use num_bigint::BigInt;
use num_integer::Integer;

use crate::{CollatzError, Parameterisation};

/// Pre-images of a value under the reverse map
///
/// The division pre-image `P·n` always exists; the multiplicative pre-image
/// `(n − b)/a` only when it maps forward onto `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ReversePreimages {
    /// `P·n`, reached forward via the division branch
    pub pre_n_div_p: BigInt,

    /// `(n − b)/a`, reached forward via the `a·n + b` branch
    pub pre_an_plus_b: Option<BigInt>,
}

impl ReversePreimages {
    /// Number of pre-images (1 or 2)
    pub fn len(&self) -> usize {
        1 + usize::from(self.pre_an_plus_b.is_some())
    }

    /// Always false; there is at least one pre-image.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Division pre-image first, then the multiplicative one if present
    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        std::iter::once(&self.pre_n_div_p).chain(self.pre_an_plus_b.iter())
    }

    /// Owned copy in the same order as [`iter`](Self::iter)
    pub fn to_vec(&self) -> Vec<BigInt> {
        self.iter().cloned().collect()
    }
}

/// Forward step without validation. Callers must have validated `params`.
pub(crate) fn apply(n: &BigInt, params: &Parameterisation) -> BigInt {
    if n.is_multiple_of(&params.p) {
        n / &params.p
    } else {
        &params.a * n + &params.b
    }
}

/// Reverse step without validation. Callers must have validated `params`.
pub(crate) fn apply_reverse(n: &BigInt, params: &Parameterisation) -> ReversePreimages {
    let pre_n_div_p = &params.p * n;
    let n_sub_b = n - &params.b;
    let pa = &params.p * &params.a;
    let pre_an_plus_b = if n_sub_b.is_multiple_of(&params.a) && !n_sub_b.is_multiple_of(&pa) {
        Some(n_sub_b / &params.a)
    } else {
        None
    };
    ReversePreimages {
        pre_n_div_p,
        pre_an_plus_b,
    }
}

/// One application of the map f(n) under `params`.
pub fn step(n: &BigInt, params: &Parameterisation) -> Result<BigInt, CollatzError> {
    params.validate()?;
    Ok(apply(n, params))
}

/// One application of the classical map (2, 3, 1).
pub fn default_step(n: &BigInt) -> BigInt {
    apply(n, &Parameterisation::default())
}

/// Pre-images of `n` under `params`.
pub fn reverse_step(n: &BigInt, params: &Parameterisation) -> Result<ReversePreimages, CollatzError> {
    params.validate()?;
    Ok(apply_reverse(n, params))
}

/// Pre-images of `n` under the classical map (2, 3, 1).
pub fn default_reverse_step(n: &BigInt) -> ReversePreimages {
    apply_reverse(n, &Parameterisation::default())
}
