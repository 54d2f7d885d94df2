//! # delivery-router — Delivery Network Routing
//!
//! An in-memory weighted graph of delivery locations with the two queries a
//! dispatcher needs: the cheapest route between two stops, and the closest
//! stop to where a vehicle is now.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: a graph belongs to the engine that created it; there
//!    is no process-wide session
//! 2. **Weights live once**: each undirected edge stores a single weight,
//!    adjacency is an index over it
//! 3. **Lazy-deletion Dijkstra**: frontier entries are pushed, never edited
//! 4. **No I/O in the core**: prompting and rendering belong to callers
//!
//! ## Quick Start
//!
//! ```rust
//! use delivery_router::RoutePlanningEngine;
//!
//! # fn example() -> delivery_router::Result<()> {
//! let engine = RoutePlanningEngine::<String>::new();
//! for stop in ["A", "B", "C", "D"] {
//!     engine.add_location(stop.to_string())?;
//! }
//! engine.add_edge("A".into(), "B".into(), 2.0)?;
//! engine.add_edge("B".into(), "C".into(), 2.0)?;
//! engine.add_edge("A".into(), "C".into(), 5.0)?;
//! engine.add_edge("C".into(), "D".into(), 1.0)?;
//!
//! let route = engine.shortest_path(&"A".into(), &"D".into())?;
//! assert_eq!(route.locations, ["A", "B", "C", "D"]);
//! assert_eq!(route.total_weight, 5.0);
//!
//! assert_eq!(engine.next_unvisited(&"A".into())?, Some("B".to_string()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `graph` | Location set and undirected weighted edges |
//! | `routing` | Shortest path and nearest-location finders |
//! | `engine` | Lock-guarded façade callers talk to |
//! | `export` | Graphviz DOT dump for external renderers |
//! | `orders` | Product catalog and delivery status tracking |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod routing;
pub mod engine;
pub mod config;
pub mod export;
pub mod orders;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{LocationKey, Edge, EdgeKey, Route};
pub use graph::LocationGraph;
pub use routing::{ShortestPathFinder, NearestUnvisitedFinder, Traversal};
pub use engine::RoutePlanningEngine;
pub use config::EngineConfig;
pub use export::{GraphSnapshot, export_dot};
pub use orders::{CompanyId, Product, ProductCatalog, DeliveryStatus, CompanyDeliveryReport};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Invalid weight {weight} for edge {a} - {b}: must be finite and non-negative")]
    InvalidWeight { a: String, b: String, weight: f64 },

    #[error("Self loop on location {0}")]
    SelfLoop(String),

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Invalid order date: {0}")]
    InvalidOrderDate(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
