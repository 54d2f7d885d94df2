//! Single-source Dijkstra traversal shared by both path finders.
//!
//! The frontier is a binary min-heap of `(distance, location)` entries.
//! Entries are never rewritten: a relaxation pushes a fresh entry and any
//! older entry for the same location is discarded when it is popped
//! (lazy deletion). Equal distances pop lowest location first, so every
//! run over the same graph settles locations in the same order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::graph::LocationGraph;
use crate::model::LocationKey;
use crate::Result;

type FrontierEntry<'g, L> = Reverse<(OrderedFloat<f64>, &'g L)>;

/// Incremental Dijkstra run over a borrowed graph.
///
/// Iterating yields `(location, distance)` for each settled location in
/// non-decreasing distance order, starting with the source at `0.0`.
/// Unreachable locations are never yielded.
pub struct Traversal<'g, L: LocationKey> {
    graph: &'g LocationGraph<L>,
    frontier: BinaryHeap<FrontierEntry<'g, L>>,
    /// Best known distance; absent means +∞.
    distance: HashMap<&'g L, f64>,
    predecessor: HashMap<&'g L, &'g L>,
    settled: HashSet<&'g L>,
    stale_pops: usize,
}

impl<'g, L: LocationKey> Traversal<'g, L> {
    /// Start a run from `source`. Fails with `UnknownLocation` if `source`
    /// is not registered.
    pub fn new(graph: &'g LocationGraph<L>, source: &'g L) -> Result<Self> {
        graph.require(source)?;
        let mut distance = HashMap::new();
        distance.insert(source, 0.0);
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((OrderedFloat(0.0), source)));
        Ok(Self {
            graph,
            frontier,
            distance,
            predecessor: HashMap::new(),
            settled: HashSet::new(),
            stale_pops: 0,
        })
    }

    /// Best known distance to `id` so far. Final once `id` is settled.
    pub fn distance(&self, id: &L) -> Option<f64> {
        self.distance.get(id).copied()
    }

    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    /// Frontier entries discarded because a shorter distance superseded them.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    /// Walk predecessor links back from a settled `target` to the source.
    pub fn path_to(&self, target: &'g L) -> Vec<L> {
        let mut path = vec![target.clone()];
        let mut cursor = target;
        while let Some(prev) = self.predecessor.get(cursor) {
            path.push((*prev).clone());
            cursor = *prev;
        }
        path.reverse();
        path
    }

    /// Relax every edge leaving `current`, settled at `dist`.
    fn relax(&mut self, current: &'g L, dist: f64) {
        let graph = self.graph;
        for (neighbor, weight) in graph.neighbors_iter(current) {
            if self.settled.contains(neighbor) {
                continue;
            }
            let candidate = dist + weight;
            let improves = self
                .distance
                .get(neighbor)
                .is_none_or(|known| candidate < *known);
            if improves {
                self.distance.insert(neighbor, candidate);
                self.predecessor.insert(neighbor, current);
                self.frontier.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }
}

impl<'g, L: LocationKey> Iterator for Traversal<'g, L> {
    type Item = (&'g L, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Reverse((OrderedFloat(dist), current))) = self.frontier.pop() {
            if self.settled.contains(current) {
                self.stale_pops += 1;
                continue;
            }
            if self.distance.get(current).is_some_and(|best| dist > *best) {
                self.stale_pops += 1;
                continue;
            }

            self.settled.insert(current);
            trace!(location = %current, distance = dist, "settled");
            self.relax(current, dist);
            return Some((current, dist));
        }
        None
    }
}
