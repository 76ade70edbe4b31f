//! Dag: a digraph that refuses edges which would close a cycle

use super::edge::EdgeOptions;
use super::error::{GraphError, GraphResult};
use super::node::{NodeId, Number};
use super::store::Digraph;
use super::view::GraphView;
use crate::query::{TopologicalSort, Traversal};
use std::ops::Deref;
use tracing::debug;

/// A directed acyclic graph
///
/// Wraps a [`Digraph`] and checks every new edge for cycles. Reads go straight
/// to the inner digraph through `Deref`; only mutation is guarded.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    graph: Digraph,
}

impl Dag {
    /// Create an empty DAG
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or overwrite the value of an existing one
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        value: impl Into<Number>,
    ) -> GraphResult<()> {
        self.graph.add_node(id, value)
    }

    /// Add an edge unless it would create a cycle
    ///
    /// The edge closes a cycle exactly when `start` is already reachable from
    /// `end` (or the edge is a self-loop). In that case nothing is mutated.
    pub fn add_edge(
        &mut self,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        options: EdgeOptions,
    ) -> GraphResult<()> {
        let start = start.into();
        let end = end.into();
        if start == end || self.graph.dfs(end.as_str()).any(|n| n == start) {
            debug!(%start, %end, "rejected edge: would create a cycle");
            return Err(GraphError::WouldCreateCycle { start, end });
        }
        self.graph.add_edge(start, end, options)
    }

    /// Borrow the underlying digraph
    pub fn as_digraph(&self) -> &Digraph {
        &self.graph
    }

    /// Give up the acyclicity guard and return the digraph
    pub fn into_inner(self) -> Digraph {
        self.graph
    }
}

impl Deref for Dag {
    type Target = Digraph;

    fn deref(&self) -> &Digraph {
        &self.graph
    }
}

impl GraphView for Dag {
    fn get_nodes(&self) -> Vec<NodeId> {
        self.graph.get_nodes()
    }

    fn successors(&self, node: &str) -> Vec<NodeId> {
        self.graph.successors(node)
    }
}

impl TryFrom<Digraph> for Dag {
    type Error = GraphError;

    /// Adopt an existing digraph, failing with
    /// [`GraphError::CycleDetected`] if it has a cycle
    fn try_from(graph: Digraph) -> GraphResult<Self> {
        graph.top_sort_checked()?;
        Ok(Self { graph })
    }
}

impl std::fmt::Display for Dag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.graph, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ErrorKind;

    fn abc() -> Dag {
        let mut dag = Dag::new();
        dag.add_edge("A", "B", EdgeOptions::new().weight(1)).unwrap();
        dag.add_edge("B", "C", EdgeOptions::new().weight(2)).unwrap();
        dag
    }

    #[test]
    fn test_accepts_forward_edges() {
        let mut dag = abc();
        dag.add_edge("A", "C", EdgeOptions::new()).unwrap();
        assert_eq!(dag.successors("A"), vec!["B", "C"]);
        assert_eq!(dag.edge_count(), 3);
    }

    #[test]
    fn test_rejects_back_edge() {
        let mut dag = abc();
        let err = dag.add_edge("C", "A", EdgeOptions::new()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Cycle);
        assert!(dag.successors("C").is_empty());
        assert_eq!(dag.edge_count(), 2);
    }

    #[test]
    fn test_rejects_two_cycle() {
        let mut dag = Dag::new();
        dag.add_edge("x", "y", EdgeOptions::new()).unwrap();
        let err = dag.add_edge("y", "x", EdgeOptions::new()).unwrap_err();
        assert_eq!(
            err,
            GraphError::WouldCreateCycle {
                start: "y".into(),
                end: "x".into()
            }
        );
    }

    #[test]
    fn test_rejects_self_loop() {
        let mut dag = Dag::new();
        let err = dag.add_edge("n", "n", EdgeOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cycle);
        assert!(dag.is_empty());
    }

    #[test]
    fn test_rejected_edge_does_not_create_nodes() {
        let mut dag = abc();
        let before = dag.get_nodes();
        dag.add_edge("C", "A", EdgeOptions::new().start_value(5))
            .unwrap_err();
        assert_eq!(dag.get_nodes(), before);
    }

    #[test]
    fn test_store_errors_pass_through() {
        let mut dag = abc();
        let err = dag
            .add_edge("A", "D", EdgeOptions::new().weight(-3))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = dag
            .add_edge("A", "D", EdgeOptions::new().named("A->B"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn test_supports_digraph_queries_and_extensions() {
        let dag = abc();
        assert_eq!(dag.get_edge_weight("B", "C").unwrap(), Number::Int(2));
        assert_eq!(dag.predecessors("C").unwrap(), vec!["B"]);
        assert_eq!(dag.top_sort(), vec!["A", "B", "C"]);
        assert_eq!(dag.dfs("A").collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(dag.bfs("A").collect::<Vec<_>>(), vec!["B", "C"]);
    }

    #[test]
    fn test_try_from_digraph() {
        let mut g = Digraph::new();
        g.add_edge("a", "b", EdgeOptions::new()).unwrap();
        let dag = Dag::try_from(g.clone()).unwrap();
        assert_eq!(dag.as_digraph().edge_count(), 1);

        g.add_edge("b", "a", EdgeOptions::new()).unwrap();
        let err = Dag::try_from(g).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cycle);
    }

    #[test]
    fn test_into_inner_drops_guard() {
        let mut g = abc().into_inner();
        g.add_edge("C", "A", EdgeOptions::new()).unwrap();
        assert_eq!(g.edge_count(), 3);
    }
}
