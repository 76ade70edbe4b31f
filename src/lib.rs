//! Strata: a layered in-memory directed graph
//!
//! Each layer adds one capability on top of the one below:
//!
//! - **Digraph**: nodes with numeric values, named weighted edges, degree and
//!   neighbour queries
//! - **Topological sort**: Kahn's algorithm over any graph view
//! - **Traversal**: lazy depth-first and breadth-first iterators
//! - **Dag**: a digraph that rejects edges which would close a cycle
//!
//! Rendering is optional and pluggable through [`render::Renderer`].
//!
//! # Example
//!
//! ```
//! use strata::{Dag, EdgeOptions, ErrorKind, TopologicalSort, Traversal};
//!
//! let mut dag = Dag::new();
//! dag.add_edge("A", "B", EdgeOptions::new().weight(1)).unwrap();
//! dag.add_edge("B", "C", EdgeOptions::new().weight(2)).unwrap();
//!
//! assert_eq!(dag.top_sort(), vec!["A", "B", "C"]);
//! assert_eq!(dag.dfs("A").collect::<Vec<_>>(), vec!["B", "C"]);
//!
//! let err = dag.add_edge("C", "A", EdgeOptions::new()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Cycle);
//! ```

mod graph;
pub mod query;
pub mod render;

pub use graph::{
    default_edge_name, Dag, Digraph, EdgeOptions, EdgeRef, ErrorKind, GraphError, GraphResult,
    GraphView, NodeId, Number,
};
pub use query::{Bfs, Dfs, TopologicalSort, Traversal};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
