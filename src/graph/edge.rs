//! Edge records.

use super::NodeId;

/// Travel duration carried by an edge.
///
/// Expected to be non-negative; the graph does not enforce it.
pub type Weight = i64;

/// Stable handle of an edge. Deleted edges leave their slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

/// An undirected weighted connection, stored once and shared by both endpoints.
///
/// `source` and `target` record the orientation the edge was inserted with.
/// Adjacency and weight queries ignore it; only [`Node::out_degree`](super::Node::out_degree)
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: Weight,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Endpoint the edge was inserted from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Endpoint the edge was inserted towards.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Travel duration.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns `true` if `node` is either endpoint.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Returns the endpoint opposite `node`.
    ///
    /// For a self-loop this is `node` itself. The result is meaningless if
    /// `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    /// Returns `true` if the edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
