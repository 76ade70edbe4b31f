//! Graph error type

use super::node::{NodeId, Number};
use thiserror::Error;

/// Errors that can occur in graph operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("{what} must be numeric, got {found}")]
    NotNumeric { what: &'static str, found: String },

    #[error("edge weight must be non-negative, got {weight}")]
    NegativeWeight { weight: Number },

    #[error("there is already an edge {name} from {start}")]
    DuplicateEdgeName { start: NodeId, name: String },

    #[error("there is no node {0}")]
    NodeNotFound(NodeId),

    #[error("there is no edge from {start} to {end}")]
    EdgeNotFound { start: NodeId, end: NodeId },

    #[error("there is no edge named {name} from {node}")]
    EdgeNameNotFound { node: NodeId, name: String },

    #[error("edge {start} -> {end} would create a cycle at node {end}")]
    WouldCreateCycle { start: NodeId, end: NodeId },

    #[error("graph contains a cycle through {} node(s): {}", .unsorted.len(), join(.unsorted))]
    CycleDetected { unsorted: Vec<NodeId> },

    #[error("renderer '{backend}' cannot render {capability}")]
    RendererUnavailable {
        backend: String,
        capability: &'static str,
    },
}

/// Coarse classification of [`GraphError`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value or weight is not a usable number
    Type,
    /// A weight is numeric but out of range
    Value,
    /// An edge name is already used by the start node
    Duplicate,
    /// A node, edge, or edge name does not exist
    NotFound,
    /// The operation would create, or found, a cycle
    Cycle,
    /// The requested rendering backend is missing
    NotAvailable,
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NotNumeric { .. } => ErrorKind::Type,
            GraphError::NegativeWeight { .. } => ErrorKind::Value,
            GraphError::DuplicateEdgeName { .. } => ErrorKind::Duplicate,
            GraphError::NodeNotFound(_)
            | GraphError::EdgeNotFound { .. }
            | GraphError::EdgeNameNotFound { .. } => ErrorKind::NotFound,
            GraphError::WouldCreateCycle { .. } | GraphError::CycleDetected { .. } => {
                ErrorKind::Cycle
            }
            GraphError::RendererUnavailable { .. } => ErrorKind::NotAvailable,
        }
    }
}

fn join(ids: &[NodeId]) -> String {
    ids.iter().map(NodeId::as_str).collect::<Vec<_>>().join(", ")
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_ids() {
        let err = GraphError::EdgeNotFound {
            start: "a".into(),
            end: "b".into(),
        };
        assert_eq!(err.to_string(), "there is no edge from a to b");

        let err = GraphError::CycleDetected {
            unsorted: vec!["x".into(), "y".into()],
        };
        assert_eq!(
            err.to_string(),
            "graph contains a cycle through 2 node(s): x, y"
        );
    }

    #[test]
    fn kinds_group_variants() {
        let cycle = GraphError::WouldCreateCycle {
            start: "c".into(),
            end: "a".into(),
        };
        assert_eq!(cycle.kind(), ErrorKind::Cycle);
        assert_eq!(
            GraphError::NodeNotFound("z".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            GraphError::NegativeWeight { weight: Number::Int(-1) }.kind(),
            ErrorKind::Value
        );
    }
}
