//! Error types.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;

/// Errors raised by graph construction, traversal, and cycle search.
///
/// Labels are carried in their `Debug` rendering so the error type stays
/// independent of the graph's label type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// A referenced label is not a node of the graph.
    #[error("node {0} not found")]
    NodeNotFound(String),

    /// Two existing nodes have no edge to delete between them.
    #[error("edge {from} -> {to} not found")]
    EdgeNotFound {
        /// Label the deletion started from.
        from: String,
        /// Label the deletion pointed at.
        to: String,
    },

    /// An argument outside the accepted set, e.g. an unknown traversal name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The greedy walk reached a node whose neighbors are all visited.
    #[error("node {node} has no edge to an unvisited node ({visited} of {total} visited)")]
    NoUnvisitedNeighbor {
        /// Node the walk got stuck at.
        node: String,
        /// Nodes visited so far, including `node`.
        visited: usize,
        /// Vertex count of the graph.
        total: usize,
    },

    /// No edge connects the two nodes.
    #[error("nodes {0} and {1} are not adjacent")]
    NotAdjacent(String, String),

    /// Adding a leg would overflow the tour's total duration.
    #[error("total duration {total} overflows when adding {duration}")]
    DurationOverflow {
        /// Total before the failing leg.
        total: i64,
        /// Duration of the failing leg.
        duration: i64,
    },
}

impl TourError {
    /// Returns `true` for the "referenced thing does not exist" family
    /// ([`NodeNotFound`](Self::NodeNotFound) and [`EdgeNotFound`](Self::EdgeNotFound)).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }

    pub(crate) fn node_not_found<L: std::fmt::Debug>(label: &L) -> Self {
        Self::NodeNotFound(format!("{label:?}"))
    }

    pub(crate) fn not_adjacent<L: std::fmt::Debug>(a: &L, b: &L) -> Self {
        Self::NotAdjacent(format!("{a:?}"), format!("{b:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = TourError::node_not_found(&"X");
        assert_eq!(e.to_string(), "node \"X\" not found");

        let e = TourError::NoUnvisitedNeighbor {
            node: "D".into(),
            visited: 4,
            total: 5,
        };
        assert!(e.to_string().contains("4 of 5"));
    }

    #[test]
    fn test_not_found_family() {
        assert!(TourError::node_not_found(&1).is_not_found());
        assert!(TourError::EdgeNotFound {
            from: "a".into(),
            to: "b".into()
        }
        .is_not_found());
        assert!(!TourError::not_adjacent(&1, &2).is_not_found());
        assert!(!TourError::InvalidArgument("x".into()).is_not_found());
    }
}
