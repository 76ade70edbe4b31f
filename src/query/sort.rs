//! Topological sorting (Kahn's algorithm)

use crate::graph::{GraphError, GraphResult, GraphView, NodeId};
use std::collections::HashMap;
use tracing::warn;

/// Topological ordering for any [`GraphView`]
pub trait TopologicalSort: GraphView {
    /// Order the nodes so that every edge points forward
    ///
    /// Among nodes that are ready at the same time, the most recently readied
    /// one is emitted first. Nodes on a cycle never become ready and are left
    /// out of the result without an error; use
    /// [`top_sort_checked`](Self::top_sort_checked) to detect that.
    fn top_sort(&self) -> Vec<NodeId> {
        kahn(self).sorted
    }

    /// Like [`top_sort`](Self::top_sort), but fails with
    /// [`GraphError::CycleDetected`] instead of dropping nodes
    fn top_sort_checked(&self) -> GraphResult<Vec<NodeId>> {
        let order = kahn(self);
        if order.unsorted.is_empty() {
            Ok(order.sorted)
        } else {
            Err(GraphError::CycleDetected {
                unsorted: order.unsorted,
            })
        }
    }
}

impl<G: GraphView + ?Sized> TopologicalSort for G {}

struct KahnOrder {
    sorted: Vec<NodeId>,
    /// Nodes that never reached in-degree zero, in node order
    unsorted: Vec<NodeId>,
}

fn kahn<G: GraphView + ?Sized>(graph: &G) -> KahnOrder {
    let nodes = graph.get_nodes();

    let mut count: HashMap<NodeId, usize> = nodes.iter().map(|u| (u.clone(), 0)).collect();
    for u in &nodes {
        for v in graph.successors(u.as_str()) {
            *count.entry(v).or_insert(0) += 1;
        }
    }

    let mut ready: Vec<NodeId> = nodes
        .iter()
        .filter(|u| count.get(u.as_str()) == Some(&0))
        .cloned()
        .collect();
    let mut sorted = Vec::with_capacity(nodes.len());

    while let Some(u) = ready.pop() {
        for v in graph.successors(u.as_str()) {
            if let Some(c) = count.get_mut(v.as_str()) {
                *c -= 1;
                if *c == 0 {
                    ready.push(v);
                }
            }
        }
        sorted.push(u);
    }

    let unsorted: Vec<NodeId> = nodes
        .into_iter()
        .filter(|u| count.get(u.as_str()).is_some_and(|c| *c > 0))
        .collect();
    if !unsorted.is_empty() {
        warn!(
            omitted = unsorted.len(),
            "topological sort skipped nodes on a cycle"
        );
    }

    KahnOrder { sorted, unsorted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, EdgeOptions, ErrorKind};

    fn graph(edges: &[(&str, &str)]) -> Digraph {
        let mut g = Digraph::new();
        for (a, b) in edges {
            g.add_edge(*a, *b, EdgeOptions::new()).unwrap();
        }
        g
    }

    fn assert_topological(g: &Digraph, order: &[NodeId]) {
        assert_eq!(order.len(), g.node_count());
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        for e in g.edges() {
            assert!(
                position[e.start.as_str()] < position[e.end.as_str()],
                "{} should precede {}",
                e.start,
                e.end
            );
        }
    }

    #[test]
    fn test_linear_chain() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        assert_eq!(g.top_sort(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ready_nodes_pop_last_first() {
        // Both roots are ready at the start; the later one is emitted first.
        let mut g = Digraph::new();
        g.add_node("r1", 0).unwrap();
        g.add_node("r2", 0).unwrap();
        assert_eq!(g.top_sort(), vec!["r2", "r1"]);

        // Successors readied by the same node: the last one readied goes first.
        let g = graph(&[("a", "b"), ("a", "c")]);
        assert_eq!(g.top_sort(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_diamond_is_topological() {
        let g = graph(&[("s", "l"), ("s", "r"), ("l", "t"), ("r", "t"), ("x", "t")]);
        let order = g.top_sort();
        assert_topological(&g, &order);
    }

    #[test]
    fn test_cycle_members_are_omitted() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "b"), ("c", "d")]);
        assert_eq!(g.top_sort(), vec!["a"]);
    }

    #[test]
    fn test_checked_reports_cycle() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "b"), ("c", "d")]);
        let err = g.top_sort_checked().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cycle);
        assert_eq!(
            err,
            GraphError::CycleDetected {
                unsorted: vec!["b".into(), "c".into(), "d".into()]
            }
        );
    }

    #[test]
    fn test_checked_passes_acyclic() {
        let g = graph(&[("a", "b"), ("a", "c"), ("b", "c")]);
        let order = g.top_sort_checked().unwrap();
        assert_topological(&g, &order);
    }

    #[test]
    fn test_empty_graph() {
        let g = Digraph::new();
        assert!(g.top_sort().is_empty());
        assert!(g.top_sort_checked().unwrap().is_empty());
    }
}
