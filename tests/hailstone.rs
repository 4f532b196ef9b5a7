//! Hailstone sequence engine

mod common;

use collatz::constants::KNOWN_CYCLES;
use collatz::function::default_step;
use collatz::hailstone::{hailstone_sequence, hailstone_sequence_default, HailstoneConfig, HailstoneSequence};
use collatz::{CollatzError, ParameterError, TerminalCondition};
use common::*;
use num_bigint::BigInt;
use proptest::prelude::*;

fn assert_hailstone(hail: &HailstoneSequence, values: &[BigInt], condition: TerminalCondition, status: i64) {
    assert_eq!(hail.values(), values, "values");
    assert_eq!(hail.terminal_condition(), condition, "terminal condition");
    assert_eq!(hail.terminal_status(), status, "terminal status");
}

#[test]
fn zero_trap() {
    let hail = hailstone_sequence_default(&big(0), 1000);
    assert_hailstone(&hail, &bigs(&[0]), TerminalCondition::ZeroStop, 0);
}

#[test]
fn ones_cycle_only_yields_a_total_stop() {
    let hail = hailstone_sequence_default(&big(1), 1000);
    assert_hailstone(&hail, &bigs(&[1]), TerminalCondition::TotalStoppingTime, 0);

    let hail = hailstone_sequence_default(&big(4), 1000);
    assert_hailstone(&hail, &bigs(&[4, 2, 1]), TerminalCondition::TotalStoppingTime, 2);

    let hail = hailstone_sequence_default(&big(16), 1000);
    assert_hailstone(&hail, &bigs(&[16, 8, 4, 2, 1]), TerminalCondition::TotalStoppingTime, 4);
}

#[test]
fn known_cycles() {
    // [1, 4, 2] ends on a total stop instead
    for cycle in KNOWN_CYCLES.iter().skip(1) {
        let mut expected = cycle.clone();
        expected.push(cycle[0].clone());
        let hail = hailstone_sequence_default(&cycle[0], 1000);
        assert_hailstone(&hail, &expected, TerminalCondition::CycleLength, cycle.len() as i64);
    }
}

/// Lead-in of `4·c[1], 2·c[1]` followed by the cycle from `c[1]`, wrapping
/// round to `c[1]` again.
fn lead_in(cycle: &[BigInt]) -> Vec<BigInt> {
    let mut expected = vec![&cycle[1] * 4u32, &cycle[1] * 2u32];
    expected.extend(cycle[1..].iter().cloned());
    expected.extend(cycle[..2].iter().cloned());
    expected
}

#[test]
fn minus_fifty_six_enters_the_minus_five_cycle() {
    let cycle = &KNOWN_CYCLES[2];
    let hail = hailstone_sequence_default(&big(-56), 1000);
    assert_hailstone(&hail, &lead_in(cycle), TerminalCondition::CycleLength, cycle.len() as i64);
}

#[test]
fn minus_two_hundred_enters_the_minus_seventeen_cycle() {
    let cycle = &KNOWN_CYCLES[3];
    let hail = hailstone_sequence_default(&big(-200), 1000);
    assert_hailstone(&hail, &lead_in(cycle), TerminalCondition::CycleLength, cycle.len() as i64);
}

#[test]
fn regular_stopping_time() {
    let classical = params(2, 3, 1);
    let hail = hailstone_sequence(&big(4), &classical, 1000, false).unwrap();
    assert_hailstone(&hail, &bigs(&[4, 2]), TerminalCondition::StoppingTime, 1);

    let hail = hailstone_sequence(&big(5), &classical, 1000, false).unwrap();
    assert_hailstone(&hail, &bigs(&[5, 16, 8, 4]), TerminalCondition::StoppingTime, 3);
}

#[test]
fn negative_start_stops_closer_to_zero() {
    // -7 -> -20 -> -10 -> -5
    let hail = hailstone_sequence(&big(-7), &params(2, 3, 1), 1000, false).unwrap();
    assert_hailstone(&hail, &bigs(&[-7, -20, -10, -5]), TerminalCondition::StoppingTime, 3);
}

#[test]
fn negative_max_total_stopping_time() {
    let hail = hailstone_sequence(&big(4), &params(2, 3, 1), -100, true).unwrap();
    assert_hailstone(&hail, &bigs(&[4, 2]), TerminalCondition::MaxStopOutOfBounds, 1);
}

#[test]
fn zero_stop_mid_hail() {
    let hail = hailstone_sequence(&big(3), &params(2, 3, -9), 100, true).unwrap();
    assert_hailstone(&hail, &bigs(&[3, 0]), TerminalCondition::ZeroStop, -1);
}

#[test]
fn unitary_p_causes_almost_immediate_cycles() {
    let hail = hailstone_sequence(&big(3), &params(1, 3, 1), 100, true).unwrap();
    assert_hailstone(&hail, &bigs(&[3, 3]), TerminalCondition::CycleLength, 1);

    let hail = hailstone_sequence(&big(3), &params(-1, 3, 1), 100, true).unwrap();
    assert_hailstone(&hail, &bigs(&[3, -3, 3]), TerminalCondition::CycleLength, 2);
}

#[test]
fn total_stopping_time_of_twenty_seven() {
    let hail = hailstone_sequence_default(&big(27), 1000);
    assert_eq!(hail.terminal_condition(), TerminalCondition::TotalStoppingTime);
    assert_eq!(hail.terminal_status(), 111);
    assert_eq!(hail.len(), 112);
    assert_eq!(hail.values().iter().max(), Some(&big(9232)));
}

#[test]
fn config_matches_free_function() {
    let config = HailstoneConfig::default()
        .with_params(params(5, 2, 3))
        .with_max_total_stopping_time(50)
        .with_total_stopping_time(false);
    let via_config = HailstoneSequence::compute(&big(7), &config).unwrap();
    let via_fn = hailstone_sequence(&big(7), &params(5, 2, 3), 50, false).unwrap();
    assert_eq!(via_config, via_fn);
}

#[test]
fn assert_sane_parameterisation() {
    let err = hailstone_sequence(&big(1), &params(0, 2, 3), 1000, true).unwrap_err();
    assert_eq!(err, CollatzError::InvalidParameterisation(ParameterError::ModulusIsZero));
    let err = hailstone_sequence(&big(1), &params(0, 0, 3), 1000, true).unwrap_err();
    assert_eq!(err, CollatzError::InvalidParameterisation(ParameterError::ModulusIsZero));
    let err = hailstone_sequence(&big(1), &params(1, 0, 3), 1000, true).unwrap_err();
    assert_eq!(err, CollatzError::InvalidParameterisation(ParameterError::MultiplicandIsZero));
}

#[test]
fn validation_precedes_immediate_stops() {
    let err = hailstone_sequence(&big(0), &params(0, 3, 1), 1000, true).unwrap_err();
    assert_eq!(err, CollatzError::InvalidParameterisation(ParameterError::ModulusIsZero));
}

proptest! {
    #[test]
    fn trajectory_follows_the_step_function(n in 2i64..5_000) {
        let hail = hailstone_sequence_default(&big(n), 1000);
        prop_assert_eq!(hail.terminal_condition(), TerminalCondition::TotalStoppingTime);
        prop_assert_eq!(hail.terminal_status(), hail.len() as i64 - 1);
        for pair in hail.values().windows(2) {
            prop_assert_eq!(&default_step(&pair[0]), &pair[1]);
        }
    }
}
