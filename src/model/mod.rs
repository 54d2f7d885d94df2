//! # Routing Model
//!
//! Plain data shared by the graph, the path finders and callers.
//! No I/O, no locking, no algorithms beyond normalization.

pub mod location;
pub mod edge;
pub mod route;

pub use location::LocationKey;
pub use edge::{Edge, EdgeKey, is_valid_weight, normalize_weight};
pub use route::Route;
