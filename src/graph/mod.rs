//! Core graph data structures

mod dag;
mod edge;
mod error;
mod node;
mod store;
mod view;


pub use dag::Dag;
pub use edge::{default_edge_name, EdgeOptions, EdgeRef};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use node::{NodeId, Number};
pub use store::Digraph;
pub use view::GraphView;
