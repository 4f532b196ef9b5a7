//! Reverse exploration with cycle detection
//!
//! Depth-first: the `P·n` subtree is completed before the `(n − b)/a`
//! subtree, so "first occurrence" follows that order.
//!
//! One value -> node map is shared by the whole construction. A value that
//! is already mapped becomes a childless CYCLE_LENGTH leaf and the mapped
//! node is re-tagged CYCLE_INIT in place. That re-tag is the only mutation
//! of a node after it is pushed.

use std::collections::HashMap;

use num_bigint::BigInt;
use tracing::{debug, trace};

use super::{NodeId, NodeState, TreeGraphNode};
use crate::function;
use crate::Parameterisation;

/// Arena under construction plus the shared cycle map
#[derive(Debug)]
pub(crate) struct TreeBuilder<'p> {
    params: &'p Parameterisation,
    nodes: Vec<TreeGraphNode>,
    cycle_check: HashMap<BigInt, NodeId>,
}

impl<'p> TreeBuilder<'p> {
    /// `params` must already be valid.
    pub(crate) fn new(params: &'p Parameterisation) -> Self {
        Self {
            params,
            nodes: Vec::new(),
            cycle_check: HashMap::new(),
        }
    }

    /// Hand back the arena; the cycle map is dropped here.
    pub(crate) fn finish(self) -> Vec<TreeGraphNode> {
        self.nodes
    }

    fn push(&mut self, node: TreeGraphNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Build the subtree rooted at `value` with `max_orbit_distance` levels
    /// of reversal remaining.
    pub(crate) fn build(&mut self, value: BigInt, max_orbit_distance: i64) -> NodeId {
        if let Some(&earlier) = self.cycle_check.get(&value) {
            debug!(%value, earlier = earlier.index(), "tree graph revisited a value");
            self.nodes[earlier.0].state = NodeState::CycleInit;
            return self.push(TreeGraphNode::leaf(value, NodeState::CycleLength));
        }

        if max_orbit_distance <= 0 {
            trace!(%value, "orbit distance exhausted");
            return self.push(TreeGraphNode::leaf(value, NodeState::MaxStopOutOfBounds));
        }

        let reverses = function::apply_reverse(&value, self.params);
        let id = self.push(TreeGraphNode::leaf(value.clone(), NodeState::NoState));
        self.cycle_check.insert(value, id);

        let pre_n_div_p = self.build(reverses.pre_n_div_p, max_orbit_distance - 1);
        let pre_an_plus_b = reverses
            .pre_an_plus_b
            .map(|pre| self.build(pre, max_orbit_distance - 1));

        let node = &mut self.nodes[id.0];
        node.pre_n_div_p = Some(pre_n_div_p);
        node.pre_an_plus_b = pre_an_plus_b;
        id
    }
}
