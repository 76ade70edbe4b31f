//! Pluggable rendering of graphs
//!
//! A [`Renderer`] turns a [`Diagram`] or [`BarChart`] into text. Backends
//! implement only what they support; anything else fails with
//! [`GraphError::RendererUnavailable`], while the graph itself keeps working.

mod dot;
mod scene;
mod text;

pub use dot::DotRenderer;
pub use scene::{Bar, BarChart, Diagram, DiagramEdge, DiagramNode};
pub use text::TextRenderer;

use crate::graph::{Digraph, GraphError, GraphResult};
use tracing::debug;

/// A rendering backend
pub trait Renderer {
    /// Backend name used in error messages
    fn name(&self) -> &str;

    fn render_diagram(&self, _diagram: &Diagram) -> GraphResult<String> {
        Err(unavailable(self.name(), "a graph diagram"))
    }

    fn render_bar_chart(&self, _chart: &BarChart) -> GraphResult<String> {
        Err(unavailable(self.name(), "a bar chart"))
    }
}

/// Stand-in for a missing backend: every render call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRenderer;

impl Renderer for NoRenderer {
    fn name(&self) -> &str {
        "none"
    }
}

fn unavailable(backend: &str, capability: &'static str) -> GraphError {
    GraphError::RendererUnavailable {
        backend: backend.to_string(),
        capability,
    }
}

/// Render the node/edge diagram of `graph`
pub fn plot_graph(graph: &Digraph, renderer: &dyn Renderer) -> GraphResult<String> {
    debug!(backend = renderer.name(), nodes = graph.node_count(), "plot graph");
    renderer.render_diagram(&Diagram::from_graph(graph))
}

/// Render a bar chart of the edge weights of `graph`, lightest first
pub fn plot_edge_weights(
    graph: &Digraph,
    renderer: &dyn Renderer,
    title: &str,
) -> GraphResult<String> {
    debug!(backend = renderer.name(), edges = graph.edge_count(), "plot edge weights");
    renderer.render_bar_chart(&BarChart::from_graph(graph, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Dag, EdgeOptions, ErrorKind};

    #[test]
    fn test_missing_backend_is_not_available() {
        let mut g = Digraph::new();
        g.add_edge("a", "b", EdgeOptions::new()).unwrap();

        let err = plot_graph(&g, &NoRenderer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAvailable);
        let err = plot_edge_weights(&g, &NoRenderer, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAvailable);

        // The graph is unaffected
        assert_eq!(g.successors("a"), vec!["b"]);
    }

    #[test]
    fn test_partial_backends() {
        let g = Digraph::new();
        assert_eq!(
            plot_edge_weights(&g, &DotRenderer, "t").unwrap_err().kind(),
            ErrorKind::NotAvailable
        );
        assert_eq!(
            plot_graph(&g, &TextRenderer::default()).unwrap_err().kind(),
            ErrorKind::NotAvailable
        );
    }

    #[test]
    fn test_dag_renders_through_deref() {
        let mut dag = Dag::new();
        dag.add_edge("a", "b", EdgeOptions::new().weight(2)).unwrap();
        let out = plot_graph(&dag, &DotRenderer).unwrap();
        assert!(out.contains("\"a\" -> \"b\" [label=\"a->b:2\"];"));
    }
}
