//! # Location Graph
//!
//! The set of registered locations and the undirected weighted edges
//! between them. This is the only mutable state in the routing core.
//!
//! ## Storage
//!
//! - `edges` is the single source of truth for weights, keyed by the
//!   normalized unordered pair. A pair can hold at most one weight.
//! - `incident` is an index from a location to the ids of its neighbors.
//!   It carries no weights, so a weight can never disagree between the two
//!   directions of an edge.
//!
//! Mutations validate everything before touching either table: a failed
//! call leaves the graph exactly as it was.

use hashbrown::{Equivalent, HashMap, HashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::config::EngineConfig;
use crate::model::*;
use crate::{Error, Result};

/// Neighbor ids of one location. Delivery networks are sparse.
type Incident<L> = SmallVec<[L; 4]>;

/// Borrowed form of [`EdgeKey`] for lookups that should not clone ids.
/// Field order and types hash identically to the owned key.
#[derive(Hash)]
struct EdgeKeyRef<'a, L> {
    low: &'a L,
    high: &'a L,
}

impl<'a, L: LocationKey> EdgeKeyRef<'a, L> {
    fn new(a: &'a L, b: &'a L) -> Self {
        if a <= b { Self { low: a, high: b } } else { Self { low: b, high: a } }
    }
}

impl<L: LocationKey> Equivalent<EdgeKey<L>> for EdgeKeyRef<'_, L> {
    fn equivalent(&self, key: &EdgeKey<L>) -> bool {
        *self.low == key.low && *self.high == key.high
    }
}

/// Weighted undirected graph of delivery locations.
#[derive(Debug, Clone)]
pub struct LocationGraph<L: LocationKey> {
    locations: HashSet<L>,
    edges: HashMap<EdgeKey<L>, f64>,
    incident: HashMap<L, Incident<L>>,
}

impl<L: LocationKey> Default for LocationGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LocationKey> LocationGraph<L> {
    pub fn new() -> Self {
        Self {
            locations: HashSet::new(),
            edges: HashMap::new(),
            incident: HashMap::new(),
        }
    }

    /// Empty graph with tables pre-sized from the config's capacity hints.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            locations: HashSet::with_capacity(config.expected_locations),
            edges: HashMap::with_capacity(config.expected_edges),
            incident: HashMap::with_capacity(config.expected_locations),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a new location. Re-adding an existing id is an error.
    pub fn add_location(&mut self, id: L) -> Result<()> {
        if self.locations.contains(&id) {
            return Err(Error::DuplicateLocation(id.to_string()));
        }
        debug!(location = %id, "location added");
        self.incident.insert(id.clone(), Incident::new());
        self.locations.insert(id);
        Ok(())
    }

    /// Connect `a` and `b` with `weight`.
    ///
    /// Both endpoints must already be registered. An existing edge between
    /// the same pair has its weight replaced (last write wins). Returns the
    /// weight that was replaced, if any.
    pub fn add_edge(&mut self, a: L, b: L, weight: f64) -> Result<Option<f64>> {
        self.require(&a)?;
        self.require(&b)?;
        if a == b {
            return Err(Error::SelfLoop(a.to_string()));
        }
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            });
        }

        let weight = normalize_weight(weight);
        let key = EdgeKey::new(a.clone(), b.clone());
        let previous = self.edges.insert(key, weight);

        match previous {
            Some(old) => {
                debug!(%a, %b, old, new = weight, "edge weight replaced");
            }
            None => {
                self.incident.entry(a.clone()).or_default().push(b.clone());
                self.incident.entry(b.clone()).or_default().push(a.clone());
                debug!(%a, %b, weight, "edge added");
            }
        }

        Ok(previous)
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn contains(&self, id: &L) -> bool {
        self.locations.contains(id)
    }

    /// Fail with `UnknownLocation` unless `id` is registered.
    pub fn require(&self, id: &L) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownLocation(id.to_string()))
        }
    }

    /// `(neighbor, weight)` pairs of `id`, sorted by neighbor.
    pub fn neighbors(&self, id: &L) -> Result<Vec<(L, f64)>> {
        self.require(id)?;
        let mut out: Vec<(L, f64)> = self.neighbors_iter(id).map(|(n, w)| (n.clone(), w)).collect();
        out.sort_by(|x, y| x.0.cmp(&y.0));
        Ok(out)
    }

    /// Unsorted, allocation-free neighbor walk used by the traversal.
    /// Yields nothing for unregistered ids.
    pub(crate) fn neighbors_iter<'g>(&'g self, id: &'g L) -> impl Iterator<Item = (&'g L, f64)> + 'g {
        self.incident
            .get(id)
            .into_iter()
            .flat_map(|ids| ids.iter())
            .filter_map(move |n| {
                self.edge_weight(id, n).map(|w| (n, w))
            })
    }

    /// Weight of the edge between `a` and `b`, if one exists.
    pub fn edge_weight(&self, a: &L, b: &L) -> Option<f64> {
        self.edges.get(&EdgeKeyRef::new(a, b)).copied()
    }

    /// Every registered location. Order is unspecified.
    pub fn all_locations(&self) -> Vec<L> {
        self.locations.iter().cloned().collect()
    }

    /// Every edge once, in unspecified order.
    pub fn all_edges(&self) -> Vec<Edge<L>> {
        self.edges
            .iter()
            .map(|(key, w)| Edge::new(key.low.clone(), key.high.clone(), *w))
            .collect()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
