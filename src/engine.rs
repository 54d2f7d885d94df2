//! Route planning engine.
//!
//! The façade callers hold. It owns one [`LocationGraph`] behind a single
//! reader/writer lock and delegates every call to the graph or a finder.
//!
//! ## Locking
//!
//! - `add_location` / `add_edge` take the write lock.
//! - Queries take the read lock for the whole traversal, so no mutation can
//!   land between two edge reads of the same run.
//! - Every read acquisition is recursive: a thread already holding a guard
//!   from [`read`](RoutePlanningEngine::read) can still query while a writer
//!   is queued. The writer waits until all read guards are gone.
//!
//! Cloning the engine shares the graph: clones see each other's writes.

use std::io::Write;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::config::EngineConfig;
use crate::export::{self, GraphSnapshot};
use crate::graph::LocationGraph;
use crate::model::{LocationKey, Route};
use crate::routing::{NearestUnvisitedFinder, ShortestPathFinder};
use crate::Result;

/// Entry point for building a delivery network and querying routes over it.
pub struct RoutePlanningEngine<L: LocationKey = String> {
    graph: Arc<RwLock<LocationGraph<L>>>,
    shortest: ShortestPathFinder,
    nearest: NearestUnvisitedFinder,
}

impl<L: LocationKey> Clone for RoutePlanningEngine<L> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            shortest: self.shortest,
            nearest: self.nearest,
        }
    }
}

impl<L: LocationKey> Default for RoutePlanningEngine<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LocationKey> RoutePlanningEngine<L> {
    /// Engine over a new, empty graph.
    pub fn new() -> Self {
        Self::with_graph(LocationGraph::new())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_graph(LocationGraph::with_config(config))
    }

    /// Engine over an already built graph.
    pub fn with_graph(graph: LocationGraph<L>) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
            shortest: ShortestPathFinder,
            nearest: NearestUnvisitedFinder,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn add_location(&self, id: L) -> Result<()> {
        self.graph.write().add_location(id)
    }

    /// Insert or re-weight the edge between `a` and `b`.
    /// Returns the replaced weight when the edge already existed.
    pub fn add_edge(&self, a: L, b: L, weight: f64) -> Result<Option<f64>> {
        self.graph.write().add_edge(a, b, weight)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn shortest_path(&self, start: &L, goal: &L) -> Result<Route<L>> {
        let graph = self.graph.read_recursive();
        self.shortest.find_path(&graph, start, goal)
    }

    /// Closest location to `current` by route distance, `None` when no
    /// other location is reachable.
    pub fn next_unvisited(&self, current: &L) -> Result<Option<L>> {
        let graph = self.graph.read_recursive();
        self.nearest.nearest_other(&graph, current)
    }

    /// [`next_unvisited`](Self::next_unvisited) plus the distance to it.
    pub fn next_unvisited_with_distance(&self, current: &L) -> Result<Option<(L, f64)>> {
        let graph = self.graph.read_recursive();
        self.nearest.nearest_with_distance(&graph, current)
    }

    // ========================================================================
    // Read-only views for renderers and other collaborators
    // ========================================================================

    pub fn locations(&self) -> Vec<L> {
        self.graph.read_recursive().all_locations()
    }

    pub fn neighbors(&self, id: &L) -> Result<Vec<(L, f64)>> {
        self.graph.read_recursive().neighbors(id)
    }

    pub fn contains(&self, id: &L) -> bool {
        self.graph.read_recursive().contains(id)
    }

    pub fn location_count(&self) -> usize {
        self.graph.read_recursive().location_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.read_recursive().edge_count()
    }

    pub fn snapshot(&self) -> GraphSnapshot<L> {
        GraphSnapshot::of(&self.graph.read_recursive())
    }

    /// Write the graph as Graphviz DOT.
    pub fn export_dot(&self, writer: &mut dyn Write) -> Result<()> {
        export::export_dot(&self.graph.read_recursive(), writer)
    }

    /// Hold the read lock for several calls against one consistent graph.
    /// Writers block until the guard is dropped; engine queries made by the
    /// holder meanwhile still proceed and see the same graph.
    pub fn read(&self) -> RwLockReadGuard<'_, LocationGraph<L>> {
        self.graph.read_recursive()
    }
}

// ============================================================================
// Tests
// ============================================================================
