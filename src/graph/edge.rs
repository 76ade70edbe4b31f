//! Edge records and insertion options

use super::node::{NodeId, Number};
use serde::Serialize;

/// Payload stored for the edge between one ordered (start, end) pair
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EdgeData {
    /// Name, unique among the start node's outgoing edges
    pub(crate) name: String,
    /// Non-negative weight
    pub(crate) weight: Number,
}

/// Borrowed view of one edge, as yielded by [`Digraph::edges`](super::Digraph::edges)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRef<'a> {
    pub start: &'a NodeId,
    pub end: &'a NodeId,
    pub name: &'a str,
    pub weight: Number,
}

/// Optional parameters for edge insertion
///
/// ```
/// use strata::{Digraph, EdgeOptions};
///
/// let mut graph = Digraph::new();
/// graph
///     .add_edge("a", "b", EdgeOptions::new().named("a-to-b").weight(3))
///     .unwrap();
/// assert_eq!(graph.successor_on_edge("a", "a-to-b").unwrap(), "b");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeOptions {
    /// Edge name; `"start->end"` when unset
    pub name: Option<String>,
    /// Edge weight (default 0)
    pub weight: Number,
    /// Value for the start node if it has to be created
    pub start_value: Number,
    /// Value for the end node if it has to be created
    pub end_value: Number,
}

impl EdgeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the edge weight
    pub fn weight(mut self, weight: impl Into<Number>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Set the value given to the start node when it is auto-created
    pub fn start_value(mut self, value: impl Into<Number>) -> Self {
        self.start_value = value.into();
        self
    }

    /// Set the value given to the end node when it is auto-created
    pub fn end_value(mut self, value: impl Into<Number>) -> Self {
        self.end_value = value.into();
        self
    }

    /// Resolve the edge name for the given endpoints
    pub(crate) fn name_for(&self, start: &NodeId, end: &NodeId) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => default_edge_name(start, end),
        }
    }
}

/// Name given to an edge inserted without an explicit one
pub fn default_edge_name(start: &NodeId, end: &NodeId) -> String {
    format!("{}->{}", start, end)
}
