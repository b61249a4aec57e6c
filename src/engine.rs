//! Hamiltonian cycle search over an owned graph.
//!
//! [`HamiltonianEngine`] ties the pieces together the same way for every
//! request: run the Ore pre-check, resolve or draw a start node, then walk
//! greedily with [`nearest_neighbor_cycle`]. [`shortest_cycle`] is the
//! one-call form for an edge list.

use std::fmt::Debug;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constructive::nearest_neighbor_cycle;
use crate::error::Result;
use crate::evaluation::satisfies_ore;
use crate::graph::{Graph, NodeId, Weight};
use crate::models::CycleOutcome;

/// Options for a cycle search.
///
/// Missing fields deserialize to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig<L> {
    /// Node to start and end at. `None` draws one uniformly at random.
    pub start: Option<L>,
    /// Seed for the random start draw. `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl<L> CycleConfig<L> {
    /// Config starting at `start`.
    pub fn starting_at(start: L) -> Self {
        Self {
            start: Some(start),
            seed: None,
        }
    }

    /// Sets the seed for the random start draw.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<L> Default for CycleConfig<L> {
    fn default() -> Self {
        Self {
            start: None,
            seed: None,
        }
    }
}

/// A graph plus the feasibility check and cycle construction on top of it.
///
/// # Examples
///
/// ```
/// use u_tour::engine::HamiltonianEngine;
///
/// let engine = HamiltonianEngine::from_edges([("A", "B", 5), ("B", "C", 5), ("C", "A", 5)]);
/// assert!(engine.is_feasible());
///
/// let outcome = engine.find_hamiltonian_cycle(Some(&"A")).unwrap();
/// assert!(outcome.is_found());
/// assert_eq!(outcome.tour().total_duration(), 15);
/// assert_eq!(outcome.tour().start(), Some(&"A"));
/// ```
#[derive(Debug, Clone)]
pub struct HamiltonianEngine<L> {
    graph: Graph<L>,
}

impl<L> HamiltonianEngine<L> {
    /// Wraps an existing graph.
    pub fn new(graph: Graph<L>) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<L> {
        &self.graph
    }

    /// Mutable access for further ingestion or edge deletion.
    pub fn graph_mut(&mut self) -> &mut Graph<L> {
        &mut self.graph
    }

    /// Unwraps the graph.
    pub fn into_graph(self) -> Graph<L> {
        self.graph
    }

    /// Returns `true` if the graph passes the Ore pre-check.
    ///
    /// For simple graphs a pass guarantees a Hamiltonian cycle; parallel
    /// edges and self-loops can make it pass without one.
    pub fn is_feasible(&self) -> bool {
        satisfies_ore(&self.graph)
    }
}

impl<L> HamiltonianEngine<L>
where
    L: Eq + Hash + Clone + Debug,
{
    /// Builds the graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, Weight)>,
    {
        Self::new(Graph::from_edges(edges))
    }

    /// Searches for a round trip, drawing a random start if `start` is `None`.
    ///
    /// Returns [`CycleOutcome::no_route`] without attempting construction
    /// when the graph fails the Ore check.
    ///
    /// # Errors
    ///
    /// [`TourError::NodeNotFound`](crate::TourError::NodeNotFound) for an
    /// unknown `start`, otherwise whatever [`nearest_neighbor_cycle`] reports.
    pub fn find_hamiltonian_cycle(&self, start: Option<&L>) -> Result<CycleOutcome<L>> {
        self.find_hamiltonian_cycle_with_rng(start, &mut rand::rng())
    }

    /// Like [`find_hamiltonian_cycle`](Self::find_hamiltonian_cycle), drawing
    /// the random start from `rng`.
    pub fn find_hamiltonian_cycle_with_rng<R: Rng>(
        &self,
        start: Option<&L>,
        rng: &mut R,
    ) -> Result<CycleOutcome<L>> {
        if !self.is_feasible() {
            debug!(vertices = self.graph.vertex_count(), "no route: ore check failed");
            return Ok(CycleOutcome::no_route());
        }

        let start = match start {
            Some(label) => self.graph.require(label)?,
            None => self.random_node(rng),
        };
        debug!(start = ?self.graph.label(start), "searching hamiltonian cycle");

        nearest_neighbor_cycle(&self.graph, start).map(CycleOutcome::found)
    }

    /// Runs a search configured by `config`.
    pub fn solve(&self, config: &CycleConfig<L>) -> Result<CycleOutcome<L>> {
        match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.find_hamiltonian_cycle_with_rng(config.start.as_ref(), &mut rng)
            }
            None => self.find_hamiltonian_cycle(config.start.as_ref()),
        }
    }

    /// Only called once the Ore check passed, so the graph has ≥ 3 nodes.
    fn random_node<R: Rng>(&self, rng: &mut R) -> NodeId {
        let idx = rng.random_range(0..self.graph.vertex_count() as u64) as usize;
        NodeId(idx)
    }
}

impl<L> From<Graph<L>> for HamiltonianEngine<L> {
    fn from(graph: Graph<L>) -> Self {
        Self::new(graph)
    }
}

/// Builds a graph from `edges` and searches it for a round trip.
///
/// # Examples
///
/// ```
/// use u_tour::{shortest_cycle, CycleConfig};
///
/// let edges = vec![("A", "B", 1), ("A", "C", 4), ("B", "C", 2)];
/// let outcome = shortest_cycle(edges, &CycleConfig::starting_at("A")).unwrap();
/// assert_eq!(outcome.message(), "The shortest path has been successfully found");
/// assert_eq!(outcome.tour().total_duration(), 7);
/// ```
pub fn shortest_cycle<L, I>(edges: I, config: &CycleConfig<L>) -> Result<CycleOutcome<L>>
where
    L: Eq + Hash + Clone + Debug,
    I: IntoIterator<Item = (L, L, Weight)>,
{
    HamiltonianEngine::from_edges(edges).solve(config)
}
