//! Route — an ordered walk through the location graph.

use serde::{Deserialize, Serialize};

/// A route from `start()` to `end()` with the summed edge weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<L> {
    /// Locations in travel order, both endpoints included. Routes built by
    /// the finders are never empty; deserialized ones may be.
    pub locations: Vec<L>,
    pub total_weight: f64,
}

impl<L> Route<L> {
    /// Zero-length route that starts and ends at `location`.
    pub fn single(location: L) -> Self {
        Self { locations: vec![location], total_weight: 0.0 }
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&L> {
        self.locations.first()
    }

    pub fn end(&self) -> Option<&L> {
        self.locations.last()
    }
}
