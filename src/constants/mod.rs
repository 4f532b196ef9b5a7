//! Reference data for the classical (2, 3, 1) map
//!
//! The four known cycles, and the range over which every start is known to
//! reach the 1 cycle.

use std::sync::LazyLock;

use num_bigint::BigInt;

/// Known cycles of the classical map, each listed from its entry point.
pub const KNOWN_CYCLE_VALUES: [&[i64]; 4] = [
    &[1, 4, 2],
    &[-1, -2],
    &[-5, -14, -7, -20, -10],
    &[
        -17, -50, -25, -74, -37, -110, -55, -164, -82, -41, -122, -61, -182, -91, -272, -136, -68,
        -34,
    ],
];

/// [`KNOWN_CYCLE_VALUES`] as arbitrary precision integers
pub static KNOWN_CYCLES: LazyLock<Vec<Vec<BigInt>>> = LazyLock::new(|| {
    KNOWN_CYCLE_VALUES
        .iter()
        .map(|cycle| cycle.iter().copied().map(BigInt::from).collect())
        .collect()
});

/// Largest value up to which the classical map has been verified (2^68).
pub const VERIFIED_MAXIMUM_VALUE: u128 = 295_147_905_179_352_825_856;

/// Smallest value down to which the classical map is taken as verified.
// TODO: -272 is the smallest member of the known cycles, not a published bound; source one.
pub const VERIFIED_MINIMUM_VALUE: i64 = -272;

/// [`VERIFIED_MAXIMUM_VALUE`] as a `BigInt`
pub static VERIFIED_MAXIMUM: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(VERIFIED_MAXIMUM_VALUE));

/// [`VERIFIED_MINIMUM_VALUE`] as a `BigInt`
pub static VERIFIED_MINIMUM: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(VERIFIED_MINIMUM_VALUE));

/// Whether `n` lies within `[VERIFIED_MINIMUM, VERIFIED_MAXIMUM]`.
///
/// Only meaningful for the classical parameterisation.
pub fn is_within_verified_range(n: &BigInt) -> bool {
    *n >= *VERIFIED_MINIMUM && *n <= *VERIFIED_MAXIMUM
}

/// The known cycle containing `n`, if any
pub fn known_cycle_containing(n: &BigInt) -> Option<&'static [BigInt]> {
    KNOWN_CYCLES
        .iter()
        .find(|cycle| cycle.contains(n))
        .map(Vec::as_slice)
}
