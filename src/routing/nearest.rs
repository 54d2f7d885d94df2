//! Nearest other location from a starting point.

use tracing::debug;

use crate::graph::LocationGraph;
use crate::model::LocationKey;
use crate::Result;
use super::Traversal;

/// Picks the closest location to the current one by shortest-path distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestUnvisitedFinder;

impl NearestUnvisitedFinder {
    /// The location other than `current` with the smallest distance from it.
    ///
    /// One traversal from `current`: the source settles first at 0, and the
    /// next settled location is the global nearest. Equal distances resolve
    /// to the lowest id. `None` when nothing else is reachable.
    pub fn nearest_other<L: LocationKey>(
        &self,
        graph: &LocationGraph<L>,
        current: &L,
    ) -> Result<Option<L>> {
        Ok(self.nearest_with_distance(graph, current)?.map(|(id, _)| id))
    }

    /// Same as [`nearest_other`](Self::nearest_other) but also reports the
    /// distance to the chosen location.
    pub fn nearest_with_distance<L: LocationKey>(
        &self,
        graph: &LocationGraph<L>,
        current: &L,
    ) -> Result<Option<(L, f64)>> {
        let found = Traversal::new(graph, current)?
            .find(|(location, _)| *location != current)
            .map(|(location, distance)| (location.clone(), distance));

        match &found {
            Some((next, distance)) => debug!(%current, %next, distance, "nearest location"),
            None => debug!(%current, "no other location reachable"),
        }
        Ok(found)
    }
}
