//! # u-tour
//!
//! Round-trip construction on weighted graphs: given pairwise travel
//! durations between delivery stops, build an undirected graph, check
//! whether a Hamiltonian cycle is guaranteed, and construct one greedily.
//!
//! ## Modules
//!
//! - [`graph`] — Label-keyed undirected graph, edge deletion, BFS/DFS traversal
//! - [`evaluation`] — Ore's-theorem feasibility check and tour validation
//! - [`constructive`] — Nearest-neighbor cycle construction
//! - [`models`] — Tour and outcome types (serde-serializable)
//! - [`engine`] — [`HamiltonianEngine`] and the [`shortest_cycle`] pipeline

pub mod constructive;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;

pub use engine::{shortest_cycle, CycleConfig, HamiltonianEngine};
pub use error::{Result, TourError};
