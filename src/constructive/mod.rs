//! Constructive heuristics for building round trips.
//!
//! - [`nearest_neighbor_cycle`] — Greedy nearest-unvisited-neighbor walk, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_cycle;
