//! Algorithms layered on top of the graph store
//!
//! Sorting and traversal are extension traits implemented for every
//! [`GraphView`](crate::GraphView), so they work on both
//! [`Digraph`](crate::Digraph) and [`Dag`](crate::Dag).

mod sort;
mod traverse;

pub use sort::TopologicalSort;
pub use traverse::{Bfs, Dfs, Traversal};
