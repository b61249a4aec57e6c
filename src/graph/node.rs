//! Node handles and node records.

use super::EdgeId;

/// Dense handle of a node inside one [`Graph`](super::Graph).
///
/// Handles are assigned in first-reference order starting at zero and are
/// never reused, since nodes are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex: the caller's label plus the edges incident to it.
///
/// Identity lives in the label; the graph keeps at most one `Node` per label.
#[derive(Debug, Clone)]
pub struct Node<L> {
    label: L,
    incident: Vec<EdgeId>,
    out_degree: usize,
}

impl<L> Node<L> {
    pub(crate) fn new(label: L) -> Self {
        Self {
            label,
            incident: Vec::new(),
            out_degree: 0,
        }
    }

    /// The caller-supplied label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Live incident edges, oldest first.
    pub fn incident(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Number of incident edges regardless of insertion direction.
    ///
    /// A self-loop counts once.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Number of incident edges that were inserted with this node as source.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    pub(crate) fn attach(&mut self, edge: EdgeId, as_source: bool) {
        self.incident.push(edge);
        if as_source {
            self.out_degree += 1;
        }
    }

    pub(crate) fn detach(&mut self, edge: EdgeId, as_source: bool) {
        self.incident.retain(|&e| e != edge);
        if as_source {
            self.out_degree -= 1;
        }
    }
}
