//! Cycle search outcome.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Whether a cycle search produced a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleStatus {
    /// A closed tour through every node was built.
    Found,
    /// The graph failed the feasibility check; no construction was attempted.
    NoRoute,
}

impl CycleStatus {
    /// Human-readable status line returned alongside the tour.
    pub fn message(self) -> &'static str {
        match self {
            CycleStatus::Found => "The shortest path has been successfully found",
            CycleStatus::NoRoute => "There is no way",
        }
    }
}

/// Result of [`HamiltonianEngine::find_hamiltonian_cycle`](crate::engine::HamiltonianEngine::find_hamiltonian_cycle).
///
/// "No route" is a soft outcome: an empty tour with zero duration. Hard
/// failures are reported as [`TourError`](crate::TourError) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleOutcome<L> {
    status: CycleStatus,
    tour: Tour<L>,
}

impl<L> CycleOutcome<L> {
    /// A successful outcome carrying `tour`.
    pub fn found(tour: Tour<L>) -> Self {
        Self {
            status: CycleStatus::Found,
            tour,
        }
    }

    /// The soft "no route" outcome.
    pub fn no_route() -> Self {
        Self {
            status: CycleStatus::NoRoute,
            tour: Tour::new(),
        }
    }

    /// Status of the search.
    pub fn status(&self) -> CycleStatus {
        self.status
    }

    /// Returns `true` if a tour was found.
    pub fn is_found(&self) -> bool {
        self.status == CycleStatus::Found
    }

    /// Status message.
    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    /// The tour; empty for [`CycleStatus::NoRoute`].
    pub fn tour(&self) -> &Tour<L> {
        &self.tour
    }

    /// Splits into the status message and the tour.
    pub fn into_parts(self) -> (&'static str, Tour<L>) {
        (self.status.message(), self.tour)
    }
}
