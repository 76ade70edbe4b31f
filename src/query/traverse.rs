//! Depth-first and breadth-first traversal
//!
//! Both traversals are lazy iterators that borrow the graph. Each call starts
//! from scratch, and dropping an iterator early leaves nothing behind.

use crate::graph::{GraphView, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// DFS/BFS iteration for any [`GraphView`]
pub trait Traversal: GraphView {
    /// Depth-first traversal from `node`
    ///
    /// Yields every node reachable from `node`, excluding `node` itself.
    fn dfs(&self, node: &str) -> Dfs<'_, Self> {
        Dfs::new(self, node)
    }

    /// Breadth-first traversal from `node`
    ///
    /// Yields every node reachable from `node` in discovery order, excluding
    /// `node` itself.
    fn bfs(&self, node: &str) -> Bfs<'_, Self> {
        Bfs::new(self, node)
    }
}

impl<G: GraphView + ?Sized> Traversal for G {}

/// Iterative depth-first traversal
///
/// Successors are pushed in successor order and popped last-in-first-out, so
/// the last successor of a node is explored first.
pub struct Dfs<'g, G: ?Sized> {
    graph: &'g G,
    visited: HashSet<NodeId>,
    stack: Vec<NodeId>,
}

impl<'g, G: GraphView + ?Sized> Dfs<'g, G> {
    fn new(graph: &'g G, root: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(NodeId::from(root));
        Self {
            graph,
            visited,
            stack: graph.successors(root),
        }
    }
}

impl<G: GraphView + ?Sized> Iterator for Dfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(u) = self.stack.pop() {
            if self.visited.insert(u.clone()) {
                self.stack.extend(self.graph.successors(u.as_str()));
                return Some(u);
            }
        }
        None
    }
}

/// Iterative breadth-first traversal
pub struct Bfs<'g, G: ?Sized> {
    graph: &'g G,
    /// Discovered node -> the node it was discovered from (`None` for the root)
    parents: HashMap<NodeId, Option<NodeId>>,
    queue: VecDeque<NodeId>,
    /// Successors of the node being expanded that are still to be examined
    pending: VecDeque<NodeId>,
    current: Option<NodeId>,
}

impl<'g, G: GraphView + ?Sized> Bfs<'g, G> {
    fn new(graph: &'g G, root: &str) -> Self {
        let root = NodeId::from(root);
        let mut parents = HashMap::new();
        parents.insert(root.clone(), None);
        Self {
            graph,
            parents,
            queue: VecDeque::from([root]),
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// The node `node` was discovered from, if it has been discovered and is
    /// not the root
    pub fn parent_of(&self, node: &str) -> Option<&NodeId> {
        self.parents.get(node).and_then(Option::as_ref)
    }
}

impl<G: GraphView + ?Sized> Iterator for Bfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            while let Some(v) = self.pending.pop_front() {
                if !self.parents.contains_key(&v) {
                    self.parents.insert(v.clone(), self.current.clone());
                    self.queue.push_back(v.clone());
                    return Some(v);
                }
            }
            let u = self.queue.pop_front()?;
            self.pending = self.graph.successors(u.as_str()).into();
            self.current = Some(u);
        }
    }
}
