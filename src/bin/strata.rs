//! Strata CLI: build a graph from the command line and query it.
//!
//! Usage:
//!   strata --edge A:B:1 --edge B:C:2 top-sort
//!   strata --dag --edge A:B --edge B:C dfs A
//!   strata --node A=3 --edge A:B:0.5:road dot

use clap::{Parser, Subcommand};
use strata::render::{plot_edge_weights, plot_graph, DotRenderer, TextRenderer};
use strata::{
    Dag, Digraph, EdgeOptions, GraphResult, NodeId, Number, TopologicalSort, Traversal,
};
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "Layered in-memory directed graph"
)]
struct Cli {
    /// Add a node: ID or ID=VALUE
    #[arg(long = "node", value_name = "ID[=VALUE]")]
    nodes: Vec<NodeArg>,
    /// Add an edge: START:END[:WEIGHT[:NAME]]
    #[arg(long = "edge", value_name = "START:END[:WEIGHT[:NAME]]")]
    edges: Vec<EdgeArg>,
    /// Reject edges that would create a cycle
    #[arg(long)]
    dag: bool,
    /// Print node lists as JSON arrays
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe every node and edge
    Describe,
    /// List node ids in insertion order
    Nodes,
    /// Topologically sort the nodes
    TopSort {
        /// Fail instead of silently dropping nodes on a cycle
        #[arg(long)]
        strict: bool,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Starting node
        from: String,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Starting node
        from: String,
    },
    /// Print the graph as Graphviz DOT
    Dot,
    /// Print a bar chart of edge weights
    Weights {
        /// Chart title
        #[arg(long, default_value = "")]
        title: String,
    },
}

#[derive(Debug, Clone)]
struct NodeArg {
    id: NodeId,
    value: Number,
}

impl FromStr for NodeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, value) = match s.split_once('=') {
            Some((id, value)) => (id, value.parse::<Number>().map_err(|e| e.to_string())?),
            None => (s, Number::default()),
        };
        if id.is_empty() {
            return Err("node id must not be empty".to_string());
        }
        Ok(Self { id: id.into(), value })
    }
}

#[derive(Debug, Clone)]
struct EdgeArg {
    start: NodeId,
    end: NodeId,
    options: EdgeOptions,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, ':');
        let (Some(start), Some(end)) = (parts.next(), parts.next()) else {
            return Err(format!("expected START:END, got '{}'", s));
        };
        if start.is_empty() || end.is_empty() {
            return Err(format!("expected START:END, got '{}'", s));
        }
        let mut options = EdgeOptions::new();
        if let Some(weight) = parts.next().filter(|w| !w.is_empty()) {
            options = options.weight(weight.parse::<Number>().map_err(|e| e.to_string())?);
        }
        if let Some(name) = parts.next() {
            options = options.named(name);
        }
        Ok(Self {
            start: start.into(),
            end: end.into(),
            options,
        })
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_graph(cli: &Cli) -> GraphResult<Digraph> {
    if cli.dag {
        let mut dag = Dag::new();
        for node in &cli.nodes {
            dag.add_node(node.id.clone(), node.value)?;
        }
        for edge in &cli.edges {
            dag.add_edge(edge.start.clone(), edge.end.clone(), edge.options.clone())?;
        }
        Ok(dag.into_inner())
    } else {
        let mut graph = Digraph::new();
        for node in &cli.nodes {
            graph.add_node(node.id.clone(), node.value)?;
        }
        for edge in &cli.edges {
            graph.add_edge(edge.start.clone(), edge.end.clone(), edge.options.clone())?;
        }
        Ok(graph)
    }
}

fn print_nodes(nodes: &[NodeId], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(nodes)?);
    } else {
        for node in nodes {
            println!("{}", node);
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph = build_graph(cli)?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    match &cli.command {
        Commands::Describe => graph.print_graph(),
        Commands::Nodes => print_nodes(&graph.get_nodes(), cli.json)?,
        Commands::TopSort { strict } => {
            let order = if *strict {
                graph.top_sort_checked()?
            } else {
                graph.top_sort()
            };
            print_nodes(&order, cli.json)?;
        }
        Commands::Dfs { from } => print_nodes(&graph.dfs(from).collect::<Vec<_>>(), cli.json)?,
        Commands::Bfs { from } => print_nodes(&graph.bfs(from).collect::<Vec<_>>(), cli.json)?,
        Commands::Dot => print!("{}", plot_graph(&graph, &DotRenderer)?),
        Commands::Weights { title } => {
            print!("{}", plot_edge_weights(&graph, &TextRenderer::default(), title)?)
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
