//! Reverse tree graph
//!
//! Starting from a root value, repeatedly applies the reverse map to grow
//! the tree of every value that reaches the root within
//! `max_orbit_distance` forward steps.
//!
//! Explicit arena: nodes are stored in a `Vec` and addressed by
//! [`NodeId`], so the cycle map can re-tag an earlier node without shared
//! ownership.
//!
//! Equality is structural (values and states, recursively), independent of
//! arena layout.

mod builder;
mod node;

pub use node::{NodeId, NodeState, TreeGraphNode};

use std::fmt;

use num_bigint::BigInt;
use tracing::debug;

use crate::{CollatzError, Parameterisation};
use builder::TreeBuilder;

/// Tree of reverse pre-images rooted at a single value
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeGraph {
    nodes: Vec<TreeGraphNode>,
    root: NodeId,
}

impl TreeGraph {
    /// Build the tree for `initial_value`, validating `params` first.
    ///
    /// A non-positive `max_orbit_distance` yields a single
    /// MAX_STOP_OUT_OF_BOUNDS leaf.
    pub fn compute(
        initial_value: &BigInt,
        max_orbit_distance: i64,
        params: &Parameterisation,
    ) -> Result<Self, CollatzError> {
        params.validate()?;
        Ok(Self::build(initial_value, max_orbit_distance, params))
    }

    fn build(initial_value: &BigInt, max_orbit_distance: i64, params: &Parameterisation) -> Self {
        let mut builder = TreeBuilder::new(params);
        let root = builder.build(initial_value.clone(), max_orbit_distance);
        let nodes = builder.finish();
        debug!(%initial_value, max_orbit_distance, nodes = nodes.len(), "tree graph built");
        Self { nodes, root }
    }

    /// Single-node tree, for assembling expected trees by hand.
    pub fn leaf(value: impl Into<BigInt>, state: NodeState) -> Self {
        Self {
            nodes: vec![TreeGraphNode::leaf(value.into(), state)],
            root: NodeId(0),
        }
    }

    /// Tree with the given root and child subtrees, for assembling expected
    /// trees by hand.
    pub fn branch(
        value: impl Into<BigInt>,
        state: NodeState,
        pre_n_div_p: TreeGraph,
        pre_an_plus_b: Option<TreeGraph>,
    ) -> Self {
        let mut tree = Self::leaf(value, state);
        let div_id = tree.graft(pre_n_div_p);
        let mul_id = pre_an_plus_b.map(|subtree| tree.graft(subtree));
        let root = &mut tree.nodes[tree.root.0];
        root.pre_n_div_p = Some(div_id);
        root.pre_an_plus_b = mul_id;
        tree
    }

    /// Append another tree's arena, returning the id of its root here.
    fn graft(&mut self, other: TreeGraph) -> NodeId {
        let offset = self.nodes.len();
        let shift = |id: NodeId| NodeId(id.0 + offset);
        self.nodes.extend(other.nodes.into_iter().map(|mut node| {
            node.pre_n_div_p = node.pre_n_div_p.map(shift);
            node.pre_an_plus_b = node.pre_an_plus_b.map(shift);
            node
        }));
        shift(other.root)
    }

    /// Root node
    pub fn root(&self) -> &TreeGraphNode {
        &self.nodes[self.root.0]
    }

    /// Id of the root node
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Node by id
    ///
    /// # Panics
    ///
    /// If `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &TreeGraphNode {
        &self.nodes[id.0]
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> impl Iterator<Item = &TreeGraphNode> {
        self.nodes.iter()
    }

    /// Nodes carrying `state`
    pub fn nodes_with_state(&self, state: NodeState) -> impl Iterator<Item = &TreeGraphNode> {
        self.nodes.iter().filter(move |node| node.state == state)
    }

    fn subtree_eq(&self, id: NodeId, other: &TreeGraph, other_id: NodeId) -> bool {
        let (lhs, rhs) = (self.node(id), other.node(other_id));
        lhs.value == rhs.value
            && lhs.state == rhs.state
            && self.child_eq(lhs.pre_n_div_p, other, rhs.pre_n_div_p)
            && self.child_eq(lhs.pre_an_plus_b, other, rhs.pre_an_plus_b)
    }

    fn child_eq(&self, lhs: Option<NodeId>, other: &TreeGraph, rhs: Option<NodeId>) -> bool {
        match (lhs, rhs) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => self.subtree_eq(lhs, other, rhs),
            _ => false,
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = self.node(id);
        write!(f, "{:indent$}{}", "", node.value, indent = depth * 2)?;
        if node.state != NodeState::NoState {
            write!(f, " [{}]", node.state)?;
        }
        writeln!(f)?;
        for child in node.children() {
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl PartialEq for TreeGraph {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }
}

impl Eq for TreeGraph {}

impl fmt::Display for TreeGraph {
    /// One node per line, children indented two spaces under their parent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root, 0)
    }
}

/// Tree graph of `initial_value` under `params`.
pub fn tree_graph(
    initial_value: &BigInt,
    max_orbit_distance: i64,
    params: &Parameterisation,
) -> Result<TreeGraph, CollatzError> {
    TreeGraph::compute(initial_value, max_orbit_distance, params)
}

/// Tree graph of `initial_value` under the classical map.
pub fn tree_graph_default(initial_value: &BigInt, max_orbit_distance: i64) -> TreeGraph {
    TreeGraph::build(initial_value, max_orbit_distance, &Parameterisation::default())
}
