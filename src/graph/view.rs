//! Read-only graph interface shared by the digraph and its wrappers

use super::node::NodeId;
use super::store::Digraph;

/// The queries sorting and traversal are written against
///
/// [`Digraph`] and [`Dag`](super::Dag) both implement it, so every
/// extension built on top works on either.
pub trait GraphView {
    /// All node ids in insertion order
    fn get_nodes(&self) -> Vec<NodeId>;

    /// Successors of `node`; empty for an unknown node
    fn successors(&self, node: &str) -> Vec<NodeId>;
}

impl GraphView for Digraph {
    fn get_nodes(&self) -> Vec<NodeId> {
        Digraph::get_nodes(self)
    }

    fn successors(&self, node: &str) -> Vec<NodeId> {
        Digraph::successors(self, node)
    }
}
