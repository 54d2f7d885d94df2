//! Location identifiers.

use std::fmt;
use std::hash::Hash;

/// The identifier type a graph is keyed by.
///
/// Fixed once per graph: a `LocationGraph<String>` only ever holds strings,
/// a `LocationGraph<u64>` only integers. `Ord` gives the traversal its
/// deterministic tie-break between equally distant locations.
pub trait LocationKey:
    Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl<T> LocationKey for T where
    T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}
