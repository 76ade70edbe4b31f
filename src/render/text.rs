//! Plain-text bar charts

use super::{BarChart, Renderer};
use crate::graph::GraphResult;
use std::fmt::Write;

/// Renders bar charts as rows of `#`
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Length of the bar for the heaviest edge
    pub width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn render_bar_chart(&self, chart: &BarChart) -> GraphResult<String> {
        let mut out = String::new();
        if !chart.title.is_empty() {
            let _ = writeln!(out, "{}", chart.title);
        }

        let labels: Vec<String> = chart
            .bars
            .iter()
            .map(|b| b.label.replace('\n', " "))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max = chart.max_weight();

        for (label, bar) in labels.iter().zip(&chart.bars) {
            let weight = bar.weight.as_f64();
            let len = if weight.is_infinite() {
                self.width
            } else if max > 0.0 {
                (weight / max * self.width as f64).round() as usize
            } else {
                0
            };
            let _ = writeln!(
                out,
                "{:<width$} | {} {}",
                label,
                "#".repeat(len),
                bar.weight,
                width = label_width
            );
        }
        Ok(out)
    }
}
