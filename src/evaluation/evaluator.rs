//! Tour evaluator that recomputes durations and checks cycle validity.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, Weight};
use crate::models::Tour;

/// A way in which a tour fails to be a Hamiltonian cycle of its graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourViolation<L> {
    /// A step names a label the graph does not contain.
    UnknownNode {
        /// Step index.
        position: usize,
        /// The unknown label.
        node: L,
    },
    /// Two consecutive steps are not joined by any edge.
    NotAdjacent {
        /// Index of the arriving step.
        position: usize,
        /// Label of the previous step.
        from: L,
        /// Label of this step.
        to: L,
    },
    /// A step's recorded duration differs from the lightest edge of its leg.
    DurationMismatch {
        /// Step index.
        position: usize,
        /// Lightest edge weight in the graph.
        expected: Weight,
        /// Duration stored in the tour.
        recorded: Weight,
    },
    /// A node appears more than once before the closing step.
    Revisited {
        /// Step index of the repeat.
        position: usize,
        /// Repeated label.
        node: L,
    },
    /// A graph node never appears in the tour.
    Missed {
        /// Label never visited.
        node: L,
    },
    /// The tour does not end at its starting node.
    NotClosed,
    /// The stored total differs from the sum of recorded leg durations.
    TotalMismatch {
        /// Sum of the recorded durations.
        computed: Weight,
        /// Total stored in the tour.
        recorded: Weight,
    },
}

/// Checks a [`Tour`] against the graph it was built from.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::models::Tour;
/// use u_tour::evaluation::TourEvaluator;
///
/// let g = Graph::from_edges([("A", "B", 2), ("B", "C", 3), ("C", "A", 4)]);
/// let mut tour = Tour::starting_at("A");
/// tour.push_step("B", 2).unwrap();
/// tour.push_step("C", 3).unwrap();
/// tour.push_step("A", 4).unwrap();
///
/// let (total, violations) = TourEvaluator::new(&g).evaluate(&tour);
/// assert_eq!(total, 9);
/// assert!(violations.is_empty());
/// ```
pub struct TourEvaluator<'a, L> {
    graph: &'a Graph<L>,
}

impl<'a, L> TourEvaluator<'a, L>
where
    L: Eq + Hash + Clone + Debug,
{
    /// Creates an evaluator for `graph`.
    pub fn new(graph: &'a Graph<L>) -> Self {
        Self { graph }
    }

    /// Recomputes the tour's duration from the graph's edge weights and
    /// collects every violation found.
    ///
    /// Legs whose endpoints are not adjacent contribute nothing to the total.
    /// Sums saturate at the bounds of [`Weight`].
    pub fn evaluate(&self, tour: &Tour<L>) -> (Weight, Vec<TourViolation<L>>) {
        let steps = tour.steps();
        let mut violations = Vec::new();
        let mut total: Weight = 0;

        for (position, step) in steps.iter().enumerate() {
            if !self.graph.contains(&step.node) {
                violations.push(TourViolation::UnknownNode {
                    position,
                    node: step.node.clone(),
                });
            }
        }

        for position in 1..steps.len() {
            let from = &steps[position - 1].node;
            let to = &steps[position].node;
            let edge = self
                .graph
                .node_id(from)
                .zip(self.graph.node_id(to))
                .and_then(|(a, b)| self.graph.edge_between(a, b));
            match edge {
                Some((_, e)) => {
                    total = total.saturating_add(e.weight());
                    if e.weight() != steps[position].duration {
                        violations.push(TourViolation::DurationMismatch {
                            position,
                            expected: e.weight(),
                            recorded: steps[position].duration,
                        });
                    }
                }
                None => violations.push(TourViolation::NotAdjacent {
                    position,
                    from: from.clone(),
                    to: to.clone(),
                }),
            }
        }

        // All steps but the closing one must be distinct.
        let body = if tour.is_closed() {
            &steps[..steps.len() - 1]
        } else {
            violations.push(TourViolation::NotClosed);
            steps
        };
        let mut seen = HashSet::with_capacity(body.len());
        for (position, step) in body.iter().enumerate() {
            if !seen.insert(&step.node) {
                violations.push(TourViolation::Revisited {
                    position,
                    node: step.node.clone(),
                });
            }
        }
        for (_, label) in self.graph.nodes() {
            if !seen.contains(label) {
                violations.push(TourViolation::Missed {
                    node: label.clone(),
                });
            }
        }

        let recorded_sum = steps
            .iter()
            .fold(0, |acc: Weight, s| acc.saturating_add(s.duration));
        if recorded_sum != tour.total_duration() {
            violations.push(TourViolation::TotalMismatch {
                computed: recorded_sum,
                recorded: tour.total_duration(),
            });
        }

        (total, violations)
    }

    /// Returns `true` if the tour is a valid Hamiltonian cycle of the graph.
    pub fn is_valid_cycle(&self, tour: &Tour<L>) -> bool {
        self.evaluate(tour).1.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph<&'static str> {
        Graph::from_edges([("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("D", "A", 4)])
    }

    fn tour_of(steps: &[(&'static str, Weight)]) -> Tour<&'static str> {
        let mut tour = Tour::new();
        for &(node, duration) in steps {
            tour.push_step(node, duration).unwrap();
        }
        tour
    }

    #[test]
    fn test_valid_cycle() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("B", 1), ("C", 2), ("D", 3), ("A", 4)]);
        let eval = TourEvaluator::new(&g);
        let (total, violations) = eval.evaluate(&tour);
        assert_eq!(total, 10);
        assert!(violations.is_empty(), "{violations:?}");
        assert!(eval.is_valid_cycle(&tour));
    }

    #[test]
    fn test_reverse_direction_legs() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("D", 4), ("C", 3), ("B", 2), ("A", 1)]);
        assert!(TourEvaluator::new(&g).is_valid_cycle(&tour));
    }

    #[test]
    fn test_not_adjacent_leg() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("C", 5), ("B", 2), ("D", 5), ("A", 4)]);
        let (_, violations) = TourEvaluator::new(&g).evaluate(&tour);
        assert!(violations.contains(&TourViolation::NotAdjacent {
            position: 1,
            from: "A",
            to: "C"
        }));
        assert!(violations.contains(&TourViolation::NotAdjacent {
            position: 3,
            from: "B",
            to: "D"
        }));
    }

    #[test]
    fn test_duration_mismatch() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("B", 9), ("C", 2), ("D", 3), ("A", 4)]);
        let (total, violations) = TourEvaluator::new(&g).evaluate(&tour);
        assert_eq!(total, 10);
        assert_eq!(
            violations,
            vec![TourViolation::DurationMismatch {
                position: 1,
                expected: 1,
                recorded: 9
            }]
        );
    }

    #[test]
    fn test_missed_and_not_closed() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("B", 1), ("C", 2)]);
        let (_, violations) = TourEvaluator::new(&g).evaluate(&tour);
        assert!(violations.contains(&TourViolation::NotClosed));
        assert!(violations.contains(&TourViolation::Missed { node: "D" }));
    }

    #[test]
    fn test_revisit_and_unknown() {
        let g = square();
        let tour = tour_of(&[("A", 0), ("B", 1), ("A", 1), ("Z", 0), ("A", 0)]);
        let (_, violations) = TourEvaluator::new(&g).evaluate(&tour);
        assert!(violations.contains(&TourViolation::Revisited {
            position: 2,
            node: "A"
        }));
        assert!(violations.contains(&TourViolation::UnknownNode {
            position: 3,
            node: "Z"
        }));
    }

    #[test]
    fn test_huge_weights_saturate() {
        let g = Graph::from_edges([("A", "B", i64::MAX), ("B", "C", i64::MAX), ("C", "A", 1)]);
        // recorded durations stay small so the tour itself can be built
        let tour = tour_of(&[("A", 0), ("B", 1), ("C", 1), ("A", 1)]);
        let (total, violations) = TourEvaluator::new(&g).evaluate(&tour);
        assert_eq!(total, i64::MAX);
        assert_eq!(
            violations
                .iter()
                .filter(|v| matches!(v, TourViolation::DurationMismatch { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_empty_tour() {
        let g = square();
        let (total, violations) = TourEvaluator::new(&g).evaluate(&Tour::new());
        assert_eq!(total, 0);
        assert!(violations.contains(&TourViolation::NotClosed));
        assert_eq!(
            violations
                .iter()
                .filter(|v| matches!(v, TourViolation::Missed { .. }))
                .count(),
            4
        );
    }
}
