//! Whole-graph traversal strategies.
//!
//! A traversal sweeps every connected component: nodes are taken in
//! insertion order and each one not yet reached starts a fresh search from
//! the chosen strategy. A single visited set spans the whole sweep, so every
//! node is reported exactly once. The three strategies reach the same set of
//! nodes from a given start but report them in different orders.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::{Graph, NodeId};
use crate::error::TourError;

/// How to walk the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Traversal {
    /// Queue-based breadth-first search. Nodes are marked when enqueued.
    BreadthFirst,
    /// Stack-based depth-first search. The stack holds the current path and
    /// only the first unvisited neighbor of the top is pushed per step.
    #[default]
    DepthFirstIterative,
    /// Depth-first search by recursion.
    ///
    /// Call depth grows with the longest simple path explored, so very deep
    /// graphs can exhaust the thread stack. Prefer
    /// [`DepthFirstIterative`](Self::DepthFirstIterative) for those.
    DepthFirstRecursive,
}

impl Traversal {
    /// Every strategy, in declaration order.
    pub const ALL: [Traversal; 3] = [
        Traversal::BreadthFirst,
        Traversal::DepthFirstIterative,
        Traversal::DepthFirstRecursive,
    ];

    /// Short name (`bfs`, `dfs`, `rdfs`).
    pub fn name(self) -> &'static str {
        match self {
            Traversal::BreadthFirst => "bfs",
            Traversal::DepthFirstIterative => "dfs",
            Traversal::DepthFirstRecursive => "rdfs",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = TourError;

    /// Parses a strategy name, ignoring ASCII case.
    ///
    /// ```
    /// use u_tour::graph::Traversal;
    ///
    /// assert_eq!("BFS".parse::<Traversal>().unwrap(), Traversal::BreadthFirst);
    /// assert!("sideways".parse::<Traversal>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth_first" => Ok(Traversal::BreadthFirst),
            "dfs" | "depth_first" => Ok(Traversal::DepthFirstIterative),
            "rdfs" | "depth_first_recursive" => Ok(Traversal::DepthFirstRecursive),
            _ => Err(TourError::InvalidArgument(format!(
                "unknown traversal strategy {s:?}, expected bfs, dfs or rdfs"
            ))),
        }
    }
}

impl<L> Graph<L> {
    /// Visits every node once, returning the visitation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::graph::{Graph, Traversal};
    ///
    /// let g = Graph::from_edges([("A", "B", 1), ("A", "C", 1), ("B", "D", 1)]);
    /// let order: Vec<_> = g
    ///     .traverse(Traversal::BreadthFirst)
    ///     .into_iter()
    ///     .map(|id| *g.label(id))
    ///     .collect();
    /// assert_eq!(order, vec!["A", "B", "C", "D"]);
    /// ```
    pub fn traverse(&self, strategy: Traversal) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.vertex_count());
        self.traverse_with(strategy, |id, _| order.push(id));
        order
    }

    /// Visits every node once, calling `visit` in visitation order.
    pub fn traverse_with<F>(&self, strategy: Traversal, mut visit: F)
    where
        F: FnMut(NodeId, &L),
    {
        let mut visited = vec![false; self.vertex_count()];
        for root in self.node_ids() {
            if visited[root.0] {
                continue;
            }
            trace!(strategy = %strategy, root = root.0, "starting component");
            match strategy {
                Traversal::BreadthFirst => self.bfs(root, &mut visited, &mut visit),
                Traversal::DepthFirstIterative => self.dfs(root, &mut visited, &mut visit),
                Traversal::DepthFirstRecursive => self.rdfs(root, &mut visited, &mut visit),
            }
        }
    }

    fn report<F: FnMut(NodeId, &L)>(&self, node: NodeId, visit: &mut F) {
        trace!(node = node.0, "visit");
        visit(node, self.label(node));
    }

    fn bfs<F: FnMut(NodeId, &L)>(&self, start: NodeId, visited: &mut [bool], visit: &mut F) {
        let mut queue = VecDeque::new();
        visited[start.0] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            self.report(node, visit);
            for (_, next, _) in self.neighbors(node) {
                if !visited[next.0] {
                    visited[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    fn dfs<F: FnMut(NodeId, &L)>(&self, start: NodeId, visited: &mut [bool], visit: &mut F) {
        let mut stack = vec![start];

        while let Some(&top) = stack.last() {
            if !visited[top.0] {
                visited[top.0] = true;
                self.report(top, visit);
            }
            match self.neighbors(top).find(|&(_, next, _)| !visited[next.0]) {
                Some((_, next, _)) => stack.push(next),
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn rdfs<F: FnMut(NodeId, &L)>(&self, node: NodeId, visited: &mut [bool], visit: &mut F) {
        visited[node.0] = true;
        self.report(node, visit);
        for (_, next, _) in self.neighbors(node) {
            if !visited[next.0] {
                self.rdfs(next, visited, visit);
            }
        }
    }
}
