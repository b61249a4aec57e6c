//! Result types produced by cycle construction.
//!
//! A [`Tour`] is an ordered list of [`RouteStep`]s with a running total;
//! a [`CycleOutcome`] pairs it with a [`CycleStatus`].

mod route;
mod solution;

pub use route::{RouteStep, Tour};
pub use solution::{CycleOutcome, CycleStatus};
