//! Tree graph nodes
//!
//! Nodes live in the owning [`TreeGraph`](super::TreeGraph)'s arena and refer
//! to their children by [`NodeId`]. Each child id is referenced by exactly
//! one parent.

use std::fmt;

use num_bigint::BigInt;

/// Index of a node within its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Terminal state of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum NodeState {
    /// Interior node with children
    #[default]
    NoState,

    /// Orbit distance exhausted; no children
    MaxStopOutOfBounds,

    /// First occurrence of a value that is reached again later
    CycleInit,

    /// Repeat of a value already in the tree; no children
    CycleLength,
}

impl NodeState {
    /// Canonical upper-snake label
    pub fn label(&self) -> &'static str {
        match self {
            NodeState::NoState => "NO_STATE",
            NodeState::MaxStopOutOfBounds => "MAX_STOP_OUT_OF_BOUNDS",
            NodeState::CycleInit => "CYCLE_INIT",
            NodeState::CycleLength => "CYCLE_LENGTH",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value in a tree graph together with its pre-image children
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeGraphNode {
    pub(crate) value: BigInt,
    pub(crate) state: NodeState,
    pub(crate) pre_n_div_p: Option<NodeId>,
    pub(crate) pre_an_plus_b: Option<NodeId>,
}

impl TreeGraphNode {
    pub(crate) fn leaf(value: BigInt, state: NodeState) -> Self {
        Self {
            value,
            state,
            pre_n_div_p: None,
            pre_an_plus_b: None,
        }
    }

    /// Value held by this node
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Terminal state
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Child for the `P·n` pre-image; present on every interior node
    pub fn pre_n_div_p(&self) -> Option<NodeId> {
        self.pre_n_div_p
    }

    /// Child for the `(n − b)/a` pre-image, when it exists
    pub fn pre_an_plus_b(&self) -> Option<NodeId> {
        self.pre_an_plus_b
    }

    /// Children in pre-image order
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.pre_n_div_p.into_iter().chain(self.pre_an_plus_b)
    }

    /// Whether this node was cut off (orbit limit or repeated value)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            NodeState::MaxStopOutOfBounds | NodeState::CycleLength
        )
    }
}
