//! Nearest-neighbor Hamiltonian cycle construction.
//!
//! Builds a round trip greedily: from the start node, always move along the
//! lightest edge to a node not yet visited; once every node is visited,
//! return to the start along the lightest closing edge.
//!
//! The walk does not backtrack. If it reaches a node whose neighbors are all
//! visited, construction fails instead of returning a partial route, even
//! when the graph does have a Hamiltonian cycle.
//!
//! # Complexity
//!
//! O(n · d) where d is the maximum degree, O(n²) on a complete graph.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Result, TourError};
use crate::graph::{Graph, NodeId, Weight};
use crate::models::Tour;

/// Constructs a closed tour from `start` using the nearest-neighbor heuristic.
///
/// Ties between equally light edges go to the edge inserted first.
///
/// # Errors
///
/// - [`TourError::NodeNotFound`] if `start` does not belong to `graph`
/// - [`TourError::NoUnvisitedNeighbor`] if the walk dead-ends before visiting every node
/// - [`TourError::NotAdjacent`] if the last node has no edge back to `start`
/// - [`TourError::DurationOverflow`] if the total duration exceeds [`Weight`]
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::constructive::nearest_neighbor_cycle;
///
/// let g = Graph::from_edges([
///     ("depot", "a", 1),
///     ("depot", "b", 9),
///     ("a", "b", 2),
/// ]);
/// let start = g.node_id(&"depot").unwrap();
/// let tour = nearest_neighbor_cycle(&g, start).unwrap();
///
/// let stops: Vec<_> = tour.nodes().copied().collect();
/// assert_eq!(stops, vec!["depot", "a", "b", "depot"]);
/// assert_eq!(tour.total_duration(), 12);
/// ```
pub fn nearest_neighbor_cycle<L>(graph: &Graph<L>, start: NodeId) -> Result<Tour<L>>
where
    L: Eq + Hash + Clone + Debug,
{
    let n = graph.vertex_count();
    if start.index() >= n {
        return Err(TourError::NodeNotFound(format!("#{}", start.index())));
    }

    let mut visited = vec![false; n];
    visited[start.index()] = true;
    let mut num_visited = 1;

    let mut tour = Tour::starting_at(graph.label(start).clone());
    let mut current = start;

    while num_visited < n {
        let (next, weight) = nearest_unvisited(graph, current, &visited).ok_or_else(|| {
            TourError::NoUnvisitedNeighbor {
                node: format!("{:?}", graph.label(current)),
                visited: num_visited,
                total: n,
            }
        })?;
        trace!(from = current.index(), to = next.index(), weight, "greedy step");

        visited[next.index()] = true;
        num_visited += 1;
        tour.push_step(graph.label(next).clone(), weight)?;
        current = next;
    }

    let closing = graph
        .edge_between(current, start)
        .map(|(_, e)| e.weight())
        .ok_or_else(|| TourError::not_adjacent(graph.label(current), graph.label(start)))?;
    tour.push_step(graph.label(start).clone(), closing)?;

    debug!(
        start = start.index(),
        stops = tour.len(),
        total = tour.total_duration(),
        "nearest-neighbor cycle built"
    );
    Ok(tour)
}

/// Lightest edge from `from` to an unvisited node, first inserted on ties.
fn nearest_unvisited<L>(
    graph: &Graph<L>,
    from: NodeId,
    visited: &[bool],
) -> Option<(NodeId, Weight)> {
    graph
        .neighbors(from)
        .filter(|&(_, next, _)| !visited[next.index()])
        .map(|(_, next, weight)| (next, weight))
        .min_by_key(|&(_, weight)| weight)
}
