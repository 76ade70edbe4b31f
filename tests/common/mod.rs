//! Shared helpers for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strata::{Digraph, NodeId, Traversal};
use std::collections::HashMap;

/// A random edge (start, end, weight) over `node_count` nodes named n0, n1, ...
pub fn random_edges(seed: u64, node_count: usize, edge_count: usize) -> Vec<(String, String, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| {
            let a = rng.gen_range(0..node_count);
            let b = rng.gen_range(0..node_count);
            (format!("n{}", a), format!("n{}", b), rng.gen_range(0..10))
        })
        .collect()
}

/// Whether any node can reach itself through one or more edges
pub fn has_cycle(graph: &Digraph) -> bool {
    // dfs never yields its root, so start from each successor instead
    graph.get_nodes().iter().any(|n| {
        graph
            .successors(n)
            .iter()
            .any(|s| s == n || graph.dfs(s.as_str()).any(|m| m == *n))
    })
}

/// Panic unless `order` lists every node once with all edges pointing forward
pub fn assert_topological(graph: &Digraph, order: &[NodeId]) {
    assert_eq!(order.len(), graph.node_count(), "order must cover every node");
    let position: HashMap<&NodeId, usize> = order.iter().enumerate().map(|(i, n)| (n, i)).collect();
    assert_eq!(position.len(), order.len(), "order must not repeat nodes");
    for e in graph.edges() {
        assert!(
            position[e.start] < position[e.end],
            "edge {} -> {} points backwards",
            e.start,
            e.end
        );
    }
}
