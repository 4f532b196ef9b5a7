//! Shared helpers for building values, parameterisations and expected trees

#![allow(dead_code)]

use collatz::{NodeState, Parameterisation, TreeGraph};
use num_bigint::BigInt;

pub fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

pub fn bigs(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

pub fn params(p: i64, a: i64, b: i64) -> Parameterisation {
    Parameterisation::new(p, a, b)
}

/// Leaf cut off by the orbit distance
pub fn terminal(n: i64) -> TreeGraph {
    TreeGraph::leaf(n, NodeState::MaxStopOutOfBounds)
}

/// Leaf that repeats an earlier value
pub fn cyclic_terminal(n: i64) -> TreeGraph {
    TreeGraph::leaf(n, NodeState::CycleLength)
}

/// Interior node whose value is repeated further down
pub fn cyclic_start(n: i64, pre_n_div_p: TreeGraph, pre_an_plus_b: Option<TreeGraph>) -> TreeGraph {
    TreeGraph::branch(n, NodeState::CycleInit, pre_n_div_p, pre_an_plus_b)
}

/// Plain interior node
pub fn generic(n: i64, pre_n_div_p: TreeGraph, pre_an_plus_b: Option<TreeGraph>) -> TreeGraph {
    TreeGraph::branch(n, NodeState::NoState, pre_n_div_p, pre_an_plus_b)
}
