//! Digraph: node and edge storage with a per-node edge-name index

use super::edge::{EdgeData, EdgeOptions, EdgeRef};
use super::error::{GraphError, GraphResult};
use super::node::{NodeId, Number};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// A directed graph with numeric node values and named, weighted edges
///
/// Nodes, successors and edge names all iterate in insertion order. At most
/// one edge exists per ordered (start, end) pair, and edge names are unique
/// among the outgoing edges of a start node.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    /// Node id -> value
    nodes: IndexMap<NodeId, Number>,
    /// Start -> end -> edge payload
    edges: IndexMap<NodeId, IndexMap<NodeId, EdgeData>>,
    /// Start -> edge name -> end; mirrors `edges`
    edge_names: IndexMap<NodeId, IndexMap<String, NodeId>>,
}

impl Digraph {
    /// Create an empty digraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or overwrite the value of an existing one
    ///
    /// An existing node keeps its position in [`get_nodes`](Self::get_nodes).
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        value: impl Into<Number>,
    ) -> GraphResult<()> {
        let id = id.into();
        let value = value.into().validate("node value")?;
        debug!(node = %id, %value, "add node");
        self.nodes.insert(id, value);
        Ok(())
    }

    /// Add an edge from `start` to `end`
    ///
    /// Every check runs before the graph is touched, so a failed call leaves
    /// nodes, edges and the name index exactly as they were. Missing endpoints
    /// are created with `options.start_value` / `options.end_value`.
    ///
    /// If an edge already joins `start` to `end` it is replaced, provided the
    /// new name is not already in use at `start`.
    pub fn add_edge(
        &mut self,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        options: EdgeOptions,
    ) -> GraphResult<()> {
        let start = start.into();
        let end = end.into();

        let weight = options.weight.validate("edge weight")?;
        if weight.is_negative() {
            return Err(GraphError::NegativeWeight { weight });
        }
        let start_value = options.start_value.validate("node value")?;
        let end_value = options.end_value.validate("node value")?;

        let name = options.name_for(&start, &end);
        if self
            .edge_names
            .get(&start)
            .is_some_and(|names| names.contains_key(&name))
        {
            return Err(GraphError::DuplicateEdgeName { start, name });
        }

        let replaced = self.edges.entry(start.clone()).or_default().insert(
            end.clone(),
            EdgeData {
                name: name.clone(),
                weight,
            },
        );
        let names = self.edge_names.entry(start.clone()).or_default();
        if let Some(old) = replaced {
            debug!(%start, %end, old_name = %old.name, "replacing edge");
            names.shift_remove(&old.name);
        }
        debug!(%start, %end, %name, %weight, "add edge");
        names.insert(name, end.clone());

        if !self.nodes.contains_key(&start) {
            self.nodes.insert(start, start_value);
        }
        if !self.nodes.contains_key(&end) {
            self.nodes.insert(end, end_value);
        }
        Ok(())
    }

    /// All node ids in insertion order
    pub fn get_nodes(&self) -> Vec<NodeId> {
        self.nodes.keys().cloned().collect()
    }

    /// Iterate over (id, value) pairs in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, Number)> {
        self.nodes.iter().map(|(id, value)| (id, *value))
    }

    /// Iterate over every edge, grouped by start node
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.edges.iter().flat_map(|(start, ends)| {
            ends.iter().map(move |(end, data)| EdgeRef {
                start,
                end,
                name: &data.name,
                weight: data.weight,
            })
        })
    }

    pub fn contains_node(&self, id: impl AsRef<str>) -> bool {
        self.nodes.contains_key(id.as_ref())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_node_value(&self, id: impl AsRef<str>) -> GraphResult<Number> {
        let id = id.as_ref();
        self.nodes
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(id.into()))
    }

    pub fn get_edge_weight(
        &self,
        start: impl AsRef<str>,
        end: impl AsRef<str>,
    ) -> GraphResult<Number> {
        self.edge(start.as_ref(), end.as_ref()).map(|data| data.weight)
    }

    pub fn get_edge_name(&self, start: impl AsRef<str>, end: impl AsRef<str>) -> GraphResult<&str> {
        self.edge(start.as_ref(), end.as_ref())
            .map(|data| data.name.as_str())
    }

    fn edge(&self, start: &str, end: &str) -> GraphResult<&EdgeData> {
        self.edges
            .get(start)
            .and_then(|ends| ends.get(end))
            .ok_or_else(|| GraphError::EdgeNotFound {
                start: start.into(),
                end: end.into(),
            })
    }

    /// Nodes with an edge into `node`
    ///
    /// Scans every edge; there is no reverse index.
    pub fn predecessors(&self, node: impl AsRef<str>) -> GraphResult<Vec<NodeId>> {
        let node = self.require(node.as_ref())?;
        Ok(self
            .edges
            .iter()
            .filter(|(_, ends)| ends.contains_key(node))
            .map(|(start, _)| start.clone())
            .collect())
    }

    /// Nodes reached by an edge out of `node`, in insertion order
    ///
    /// Unlike [`predecessors`](Self::predecessors), an unknown node is not an
    /// error: it simply has no successors.
    pub fn successors(&self, node: impl AsRef<str>) -> Vec<NodeId> {
        self.edges
            .get(node.as_ref())
            .map(|ends| ends.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// End node of the edge named `edge_name` leaving `node`
    pub fn successor_on_edge(
        &self,
        node: impl AsRef<str>,
        edge_name: &str,
    ) -> GraphResult<&NodeId> {
        let node = node.as_ref();
        self.edge_names
            .get(node)
            .and_then(|names| names.get(edge_name))
            .ok_or_else(|| GraphError::EdgeNameNotFound {
                node: node.into(),
                name: edge_name.to_string(),
            })
    }

    /// Number of edges ending at `node`
    pub fn in_degree(&self, node: impl AsRef<str>) -> GraphResult<usize> {
        let node = self.require(node.as_ref())?;
        Ok(self
            .edges
            .values()
            .filter(|ends| ends.contains_key(node))
            .count())
    }

    /// Number of edges leaving `node`
    pub fn out_degree(&self, node: impl AsRef<str>) -> GraphResult<usize> {
        let node = self.require(node.as_ref())?;
        Ok(self.edges.get(node).map_or(0, IndexMap::len))
    }

    /// Print a sentence per node and per outgoing edge to stdout
    pub fn print_graph(&self) {
        print!("{}", self);
    }

    fn require<'a>(&self, node: &'a str) -> GraphResult<&'a str> {
        if self.nodes.contains_key(node) {
            Ok(node)
        } else {
            Err(GraphError::NodeNotFound(node.into()))
        }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return writeln!(f, "There is not any node in this graph.");
        }
        for (id, value) in &self.nodes {
            writeln!(f, "Node {} with value {}.", id, value)?;
            let Some(ends) = self.edges.get(id) else {
                continue;
            };
            for (end, data) in ends {
                writeln!(
                    f,
                    "Edge from {} to {} with weight {} and name {}.",
                    id, end, data.weight, data.name
                )?;
            }
        }
        Ok(())
    }
}
