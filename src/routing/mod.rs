//! # Route Finding
//!
//! Path queries over a borrowed [`LocationGraph`](crate::graph::LocationGraph).
//! Both finders run the same lazy-deletion Dijkstra [`Traversal`] and never
//! mutate the graph.

pub mod dijkstra;
pub mod shortest_path;
pub mod nearest;

pub use dijkstra::Traversal;
pub use shortest_path::ShortestPathFinder;
pub use nearest::NearestUnvisitedFinder;
