//! Feasibility checking and tour evaluation.
//!
//! - [`satisfies_ore`] — Ore's sufficient condition for a Hamiltonian cycle
//! - [`TourEvaluator`] — recomputes a tour's duration and validates it as a cycle

mod evaluator;
mod ore;

pub use evaluator::{TourEvaluator, TourViolation};
pub use ore::{ore_violation, satisfies_ore};
