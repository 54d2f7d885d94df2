//! Single-pair shortest path.

use tracing::debug;

use crate::graph::LocationGraph;
use crate::model::{LocationKey, Route};
use crate::{Error, Result};
use super::Traversal;

/// Minimum-total-weight route between two locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathFinder;

impl ShortestPathFinder {
    /// Route from `start` to `goal`, both inclusive.
    ///
    /// Stops as soon as `goal` is settled. `start == goal` yields the
    /// single-location route of weight 0. Fails with `UnknownLocation` if
    /// either endpoint is unregistered and `NoPath` if `goal` cannot be
    /// reached.
    pub fn find_path<L: LocationKey>(
        &self,
        graph: &LocationGraph<L>,
        start: &L,
        goal: &L,
    ) -> Result<Route<L>> {
        graph.require(start)?;
        graph.require(goal)?;

        let mut run = Traversal::new(graph, start)?;
        while let Some((location, distance)) = run.next() {
            if location == goal {
                let route = Route {
                    locations: run.path_to(location),
                    total_weight: distance,
                };
                debug!(
                    %start, %goal,
                    hops = route.hops(),
                    total_weight = distance,
                    settled = run.settled_count(),
                    "shortest path found"
                );
                return Ok(route);
            }
        }

        debug!(%start, %goal, settled = run.settled_count(), "no path");
        Err(Error::NoPath {
            from: start.to_string(),
            to: goal.to_string(),
        })
    }
}
