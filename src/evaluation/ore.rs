//! Ore's-theorem feasibility check.
//!
//! Ore (1960): a graph on n ≥ 3 vertices in which every pair of
//! non-adjacent vertices has degree sum ≥ n contains a Hamiltonian cycle.
//! The condition is sufficient, not necessary, so a graph failing it may
//! still have a cycle. It serves as a cheap pre-filter before construction.
//!
//! Two conventions are fixed here:
//!
//! - a pair is adjacent if an edge joins them in either insertion direction;
//! - degree is the *out-degree*, i.e. the number of edges inserted with the
//!   node as source. On a simple graph out-degree never exceeds the
//!   undirected degree, so a pass there also satisfies the textbook
//!   condition and a cycle exists.
//!
//! Parallel edges and self-loops each add to the out-degree without adding
//! a neighbor, so on multigraphs a pass is no guarantee: construction can
//! still fail.
//!
//! # Complexity
//!
//! O(n² · d) where d is the maximum degree.
//!
//! # Reference
//!
//! Ore, Ø. (1960). "Note on Hamilton circuits", *American Mathematical
//! Monthly* 67(1), 55.

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Returns the first non-adjacent pair whose out-degree sum is below the
/// vertex count, scanning pairs in insertion order.
///
/// Returns `None` when every non-adjacent pair satisfies the bound. The
/// vertex-count minimum is not checked here; see [`satisfies_ore`].
pub fn ore_violation<L>(graph: &Graph<L>) -> Option<(NodeId, NodeId)> {
    let n = graph.vertex_count();
    for a in graph.node_ids() {
        for b in graph.node_ids().skip(a.index() + 1) {
            if graph.is_adjacent(a, b) {
                continue;
            }
            if graph.out_degree(a) + graph.out_degree(b) < n {
                return Some((a, b));
            }
        }
    }
    None
}

/// Returns `true` if every non-adjacent pair meets Ore's degree bound.
///
/// On a simple graph this guarantees a Hamiltonian cycle; with parallel
/// edges or self-loops it does not (see the module docs). Always `false` for
/// fewer than three vertices.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::evaluation::satisfies_ore;
///
/// let triangle = Graph::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
/// assert!(satisfies_ore(&triangle));
///
/// let pair = Graph::from_edges([("A", "B", 1)]);
/// assert!(!satisfies_ore(&pair));
/// ```
pub fn satisfies_ore<L>(graph: &Graph<L>) -> bool {
    let n = graph.vertex_count();
    if n < 3 {
        debug!(vertices = n, "ore check failed: fewer than 3 vertices");
        return false;
    }
    match ore_violation(graph) {
        Some((a, b)) => {
            debug!(
                vertices = n,
                a = a.index(),
                b = b.index(),
                degree_sum = graph.out_degree(a) + graph.out_degree(b),
                "ore check failed on non-adjacent pair"
            );
            false
        }
        None => true,
    }
}
