//! Adjacency-list graph keyed by caller labels.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::{Edge, EdgeId, Node, NodeId, Weight};
use crate::error::{Result, TourError};

/// An undirected weighted graph over caller-supplied labels.
///
/// Nodes sit in an arena addressed by [`NodeId`]; a lookup table maps each
/// label to its handle, so there is exactly one node per distinct label.
/// Every edge is stored once and referenced from both endpoints, which makes
/// adjacency, weight lookup, and deletion symmetric. Parallel edges are kept.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
///
/// let g = Graph::from_edges([("A", "B", 5), ("B", "C", 4), ("C", "A", 3)]);
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.weight_between(&"B", &"A").unwrap(), 5);
/// assert_eq!(g.weight_between(&"A", &"B").unwrap(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<L> {
    nodes: Vec<Node<L>>,
    index: HashMap<L, NodeId>,
    edges: Vec<Option<Edge>>,
    edge_count: usize,
}

impl<L> Graph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Number of distinct nodes.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node record behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn node(&self, id: NodeId) -> &Node<L> {
        &self.nodes[id.0]
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn label(&self, id: NodeId) -> &L {
        self.nodes[id.0].label()
    }

    /// Returns a live edge, or `None` if it was deleted or never existed.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// All node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All nodes with their labels, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &L)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n.label()))
    }

    /// Incident edges of `node` as `(edge, neighbor, weight)`, oldest first.
    ///
    /// Edges show up here no matter which endpoint they were inserted from.
    pub fn neighbors(
        &self,
        node: NodeId,
    ) -> impl Iterator<Item = (EdgeId, NodeId, Weight)> + '_ {
        self.nodes[node.0].incident().iter().filter_map(move |&id| {
            self.edges[id.0]
                .as_ref()
                .map(|e| (id, e.other(node), e.weight()))
        })
    }

    /// Number of incident edges of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node.0].degree()
    }

    /// Number of edges inserted with `node` as their source.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.nodes[node.0].out_degree()
    }

    /// Returns `true` if at least one edge joins `a` and `b`.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Returns the lightest edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<(EdgeId, &Edge)> {
        self.nodes[a.0]
            .incident()
            .iter()
            .filter_map(|&id| self.edges[id.0].as_ref().map(|e| (id, e)))
            .filter(|(_, e)| e.connects(a, b))
            .min_by_key(|(_, e)| e.weight())
    }
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L>
where
    L: Eq + Hash + Clone + Debug,
{
    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, Weight)>,
    {
        let mut graph = Self::new();
        graph.ingest(edges);
        graph
    }

    /// Adds every `(from, to, weight)` triple, creating endpoints on first
    /// reference. Identical triples are not deduplicated.
    ///
    /// Returns the number of edges added.
    pub fn ingest<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (L, L, Weight)>,
    {
        let mut added = 0;
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight);
            added += 1;
        }
        debug!(
            added,
            vertices = self.vertex_count(),
            edges = self.edge_count,
            "ingested edges"
        );
        added
    }

    /// Returns the handle for `label`, registering a new node if needed.
    pub fn add_or_get_node(&mut self, label: L) -> NodeId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(label.clone()));
        self.index.insert(label, id);
        id
    }

    /// Adds one edge between `from` and `to`, creating either endpoint if needed.
    pub fn add_edge(&mut self, from: L, to: L, weight: Weight) -> EdgeId {
        let source = self.add_or_get_node(from);
        let target = self.add_or_get_node(to);
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge::new(source, target, weight)));
        self.nodes[source.0].attach(id, true);
        if target != source {
            self.nodes[target.0].attach(id, false);
        }
        self.edge_count += 1;
        id
    }

    /// Looks up the handle of `label`.
    pub fn node_id(&self, label: &L) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Returns `true` if `label` is a node of this graph.
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Like [`node_id`](Self::node_id), but absent labels are an error.
    pub fn require(&self, label: &L) -> Result<NodeId> {
        self.node_id(label)
            .ok_or_else(|| TourError::node_not_found(label))
    }

    /// Removes one edge joining `from` and `to`, in whichever direction it was
    /// inserted. With parallel edges the most recently added one goes.
    ///
    /// # Errors
    ///
    /// [`TourError::NodeNotFound`] if either label is absent,
    /// [`TourError::EdgeNotFound`] if the nodes are not connected.
    pub fn delete_edge(&mut self, from: &L, to: &L) -> Result<Edge> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        let missing = || TourError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        };

        let id = self.nodes[a.0]
            .incident()
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.edges[id.0]
                    .as_ref()
                    .is_some_and(|e| e.connects(a, b))
            })
            .ok_or_else(missing)?;

        let edge = self.edges[id.0].take().ok_or_else(missing)?;
        self.nodes[edge.source().0].detach(id, true);
        if edge.target() != edge.source() {
            self.nodes[edge.target().0].detach(id, false);
        }
        self.edge_count -= 1;
        debug!(?from, ?to, weight = edge.weight(), "deleted edge");
        Ok(edge)
    }

    /// Weight of the lightest edge between `a` and `b`; symmetric in its arguments.
    ///
    /// # Errors
    ///
    /// [`TourError::NodeNotFound`] if either label is absent,
    /// [`TourError::NotAdjacent`] if no edge joins them.
    pub fn weight_between(&self, a: &L, b: &L) -> Result<Weight> {
        let x = self.require(a)?;
        let y = self.require(b)?;
        self.edge_between(x, y)
            .map(|(_, e)| e.weight())
            .ok_or_else(|| TourError::not_adjacent(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn triangle() -> Graph<&'static str> {
        Graph::from_edges([("A", "B", 5), ("B", "C", 4), ("C", "A", 3)])
    }

    #[test]
    fn test_add_or_get_node_dedups() {
        let mut g = Graph::new();
        let a = g.add_or_get_node("A");
        let b = g.add_or_get_node("B");
        assert_eq!(g.add_or_get_node("A"), a);
        assert_ne!(a, b);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(*g.label(b), "B");
    }

    #[test]
    fn test_ingest_counts() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        let a = g.node_id(&"A").unwrap();
        assert_eq!(g.degree(a), 2);
        assert_eq!(g.out_degree(a), 1);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut g = Graph::new();
        assert_eq!(g.ingest([("A", "B", 9), ("A", "B", 2), ("B", "A", 4)]), 3);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 3);
        // lightest wins
        assert_eq!(g.weight_between(&"A", &"B").unwrap(), 2);
    }

    #[test]
    fn test_weight_symmetric() {
        let g = triangle();
        assert_eq!(g.weight_between(&"C", &"A").unwrap(), 3);
        assert_eq!(g.weight_between(&"A", &"C").unwrap(), 3);
    }

    #[test]
    fn test_weight_errors() {
        let mut g = triangle();
        g.add_or_get_node("D");
        assert!(matches!(
            g.weight_between(&"A", &"D"),
            Err(TourError::NotAdjacent(_, _))
        ));
        assert!(matches!(
            g.weight_between(&"A", &"Z"),
            Err(TourError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_neighbors_see_both_directions() {
        let g = triangle();
        let a = g.node_id(&"A").unwrap();
        let labels: Vec<_> = g.neighbors(a).map(|(_, n, _)| *g.label(n)).collect();
        assert_eq!(labels, vec!["B", "C"]);
    }

    #[test]
    fn test_delete_edge_then_lookup() {
        let mut g = triangle();
        let removed = g.delete_edge(&"A", &"B").unwrap();
        assert_eq!(removed.weight(), 5);
        assert_eq!(g.edge_count(), 2);
        assert!(matches!(
            g.weight_between(&"A", &"B"),
            Err(TourError::NotAdjacent(_, _))
        ));
        assert!(matches!(
            g.weight_between(&"B", &"A"),
            Err(TourError::NotAdjacent(_, _))
        ));
        // nodes stay
        assert_eq!(g.vertex_count(), 3);
        let a = g.node_id(&"A").unwrap();
        assert_eq!(g.out_degree(a), 0);
        assert_eq!(g.degree(a), 1);
    }

    #[test]
    fn test_delete_edge_reverse_direction() {
        let mut g = triangle();
        // inserted as C -> A
        g.delete_edge(&"A", &"C").unwrap();
        assert!(g.weight_between(&"C", &"A").is_err());
        let c = g.node_id(&"C").unwrap();
        assert_eq!(g.out_degree(c), 0);
    }

    #[test]
    fn test_delete_missing() {
        let mut g = triangle();
        g.add_or_get_node("D");
        assert!(matches!(
            g.delete_edge(&"A", &"D"),
            Err(TourError::EdgeNotFound { .. })
        ));
        assert!(matches!(
            g.delete_edge(&"Z", &"A"),
            Err(TourError::NodeNotFound(_))
        ));
        assert!(matches!(
            g.delete_edge(&"A", &"Z"),
            Err(TourError::NodeNotFound(_))
        ));
        g.delete_edge(&"A", &"B").unwrap();
        assert!(g.delete_edge(&"A", &"B").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_parallel_removes_latest() {
        let mut g = Graph::from_edges([("A", "B", 1), ("A", "B", 8)]);
        assert_eq!(g.delete_edge(&"B", &"A").unwrap().weight(), 8);
        assert_eq!(g.weight_between(&"A", &"B").unwrap(), 1);
    }

    #[test]
    fn test_self_loop() {
        let mut g = Graph::from_edges([("A", "A", 2)]);
        let a = g.node_id(&"A").unwrap();
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.weight_between(&"A", &"A").unwrap(), 2);
        g.delete_edge(&"A", &"A").unwrap();
        assert_eq!(g.degree(a), 0);
        assert_eq!(g.out_degree(a), 0);
    }

    #[test]
    fn test_edge_handle_after_delete() {
        let mut g = Graph::new();
        let e = g.add_edge("A", "B", 3);
        assert_eq!(g.edge(e).map(Edge::weight), Some(3));
        g.delete_edge(&"A", &"B").unwrap();
        assert!(g.edge(e).is_none());
    }

    fn edge_list() -> impl Strategy<Value = Vec<(u8, u8, i64)>> {
        prop::collection::vec((0u8..12, 0u8..12, 0i64..100), 0..40)
    }

    proptest! {
        #[test]
        fn prop_vertex_count_is_distinct_labels(edges in edge_list()) {
            let distinct: HashSet<u8> = edges.iter().flat_map(|&(a, b, _)| [a, b]).collect();
            let g = Graph::from_edges(edges);
            prop_assert_eq!(g.vertex_count(), distinct.len());
        }

        #[test]
        fn prop_weight_lookup_is_symmetric(edges in edge_list()) {
            let g = Graph::from_edges(edges.clone());
            for (a, b, _) in edges {
                prop_assert_eq!(g.weight_between(&a, &b), g.weight_between(&b, &a));
            }
        }
    }
}
