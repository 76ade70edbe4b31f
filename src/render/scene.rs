//! Render-ready snapshots of a graph, built from read-only queries

use crate::graph::{Digraph, NodeId, Number};

/// A node/edge diagram
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    pub id: NodeId,
    /// `"id:value"`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramEdge {
    pub start: NodeId,
    pub end: NodeId,
    /// `"name:weight"`
    pub label: String,
}

impl Diagram {
    pub fn from_graph(graph: &Digraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|(id, value)| DiagramNode {
                id: id.clone(),
                label: format!("{}:{}", id, value),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|e| DiagramEdge {
                start: e.start.clone(),
                end: e.end.clone(),
                label: format!("{}:{}", e.name, e.weight),
            })
            .collect();
        Self { nodes, edges }
    }
}

/// A bar chart of edge weights, lightest first
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// `"name\n(start -> end)"`
    pub label: String,
    pub weight: Number,
}

impl BarChart {
    /// One bar per edge, sorted ascending by weight
    ///
    /// Edges of equal weight keep the order in which
    /// [`Digraph::edges`] yields them.
    pub fn from_graph(graph: &Digraph, title: impl Into<String>) -> Self {
        let mut bars: Vec<Bar> = graph
            .edges()
            .map(|e| Bar {
                label: format!("{}\n({} -> {})", e.name, e.start, e.end),
                weight: e.weight,
            })
            .collect();
        bars.sort_by(|a, b| a.weight.as_f64().total_cmp(&b.weight.as_f64()));
        Self {
            title: title.into(),
            bars,
        }
    }

    /// Largest weight on the chart, 0 when there are no bars
    pub fn max_weight(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.weight.as_f64())
            .fold(0.0, f64::max)
    }
}
