//! Route step and tour types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::graph::Weight;

/// One stop of a tour: the node reached and the duration of the leg into it.
///
/// The first stop of a tour has duration 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep<L> {
    /// Label of the node reached.
    pub node: L,
    /// Duration of the leg that arrived here.
    pub duration: Weight,
}

/// An ordered round trip with its accumulated duration.
///
/// A completed tour starts and ends at the same node. It serializes as
/// `{"route": [{"node": .., "duration": ..}, ..], "total duration": ..}`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let mut tour = Tour::starting_at("depot");
/// tour.push_step("a", 4).unwrap();
/// tour.push_step("depot", 6).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.total_duration(), 10);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour<L> {
    route: Vec<RouteStep<L>>,
    #[serde(rename = "total duration")]
    total_duration: Weight,
}

impl<L> Tour<L> {
    /// Creates a tour with no steps.
    pub fn new() -> Self {
        Self {
            route: Vec::new(),
            total_duration: 0,
        }
    }

    /// Creates a tour whose first step is `start` with duration 0.
    pub fn starting_at(start: L) -> Self {
        Self {
            route: vec![RouteStep {
                node: start,
                duration: 0,
            }],
            total_duration: 0,
        }
    }

    /// Appends a step and adds its duration to the total.
    ///
    /// # Errors
    ///
    /// [`TourError::DurationOverflow`] if the total would leave the range of
    /// [`Weight`]; the tour is left unchanged.
    pub fn push_step(&mut self, node: L, duration: Weight) -> Result<()> {
        self.total_duration = self
            .total_duration
            .checked_add(duration)
            .ok_or(TourError::DurationOverflow {
                total: self.total_duration,
                duration,
            })?;
        self.route.push(RouteStep { node, duration });
        Ok(())
    }

    /// The steps in travel order.
    pub fn steps(&self) -> &[RouteStep<L>] {
        &self.route
    }

    /// Number of steps, counting the return to the start.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the tour has no steps.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Sum of all leg durations.
    pub fn total_duration(&self) -> Weight {
        self.total_duration
    }

    /// Labels in travel order.
    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.route.iter().map(|s| &s.node)
    }

    /// Label of the first step.
    pub fn start(&self) -> Option<&L> {
        self.route.first().map(|s| &s.node)
    }
}

impl<L: PartialEq> Tour<L> {
    /// Returns `true` if the tour has at least two steps and ends where it began.
    pub fn is_closed(&self) -> bool {
        match (self.route.first(), self.route.last()) {
            (Some(first), Some(last)) => self.route.len() > 1 && first.node == last.node,
            _ => false,
        }
    }
}

impl<L> Default for Tour<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_empty() {
        let t: Tour<&str> = Tour::new();
        assert!(t.is_empty());
        assert_eq!(t.total_duration(), 0);
        assert!(t.start().is_none());
        assert!(!t.is_closed());
    }

    #[test]
    fn test_push_accumulates() {
        let mut t = Tour::starting_at(1u32);
        t.push_step(2, 7).unwrap();
        t.push_step(3, 5).unwrap();
        assert_eq!(t.total_duration(), 12);
        assert_eq!(t.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!t.is_closed());
        t.push_step(1, 1).unwrap();
        assert!(t.is_closed());
        assert_eq!(t.steps()[0].duration, 0);
    }

    #[test]
    fn test_push_rejects_overflow() {
        let mut t = Tour::starting_at("A");
        t.push_step("B", i64::MAX - 1).unwrap();
        let err = t.push_step("C", 2).unwrap_err();
        assert_eq!(
            err,
            TourError::DurationOverflow {
                total: i64::MAX - 1,
                duration: 2
            }
        );
        // unchanged
        assert_eq!(t.len(), 2);
        assert_eq!(t.total_duration(), i64::MAX - 1);
    }

    #[test]
    fn test_single_step_not_closed() {
        let t = Tour::starting_at("A");
        assert!(!t.is_closed());
        assert_eq!(t.start(), Some(&"A"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut t = Tour::starting_at("A".to_string());
        t.push_step("B".to_string(), 5).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "route": [
                    {"node": "A", "duration": 0},
                    {"node": "B", "duration": 5}
                ],
                "total duration": 5
            })
        );
        let back: Tour<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
