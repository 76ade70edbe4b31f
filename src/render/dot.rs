//! Graphviz DOT output

use super::{Diagram, Renderer};
use crate::graph::GraphResult;
use std::fmt::Write;

/// Renders diagrams as Graphviz DOT source
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl Renderer for DotRenderer {
    fn name(&self) -> &str {
        "dot"
    }

    fn render_diagram(&self, diagram: &Diagram) -> GraphResult<String> {
        let mut out = String::from("digraph {\n");
        for node in &diagram.nodes {
            let _ = writeln!(
                out,
                "    {} [label={}];",
                quote(node.id.as_str()),
                quote(&node.label)
            );
        }
        for edge in &diagram.edges {
            let _ = writeln!(
                out,
                "    {} -> {} [label={}];",
                quote(edge.start.as_str()),
                quote(edge.end.as_str()),
                quote(&edge.label)
            );
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
