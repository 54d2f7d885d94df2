//! Undirected weighted edges.

use serde::{Deserialize, Serialize};
use super::LocationKey;

/// Normalized unordered pair of locations: `low <= high` always holds.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so one key addresses the edge
/// from either endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey<L> {
    pub low: L,
    pub high: L,
}

impl<L: LocationKey> EdgeKey<L> {
    pub fn new(a: L, b: L) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The endpoint opposite `from`, if `from` is an endpoint at all.
    pub fn other(&self, from: &L) -> Option<&L> {
        if *from == self.low { Some(&self.high) }
        else if *from == self.high { Some(&self.low) }
        else { None }
    }
}

/// An undirected edge with its travel weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<L> {
    pub a: L,
    pub b: L,
    pub weight: f64,
}

impl<L: LocationKey> Edge<L> {
    pub fn new(a: L, b: L, weight: f64) -> Self {
        Self { a, b, weight }
    }

    pub fn key(&self) -> EdgeKey<L> {
        EdgeKey::new(self.a.clone(), self.b.clone())
    }

    pub fn connects(&self, x: &L, y: &L) -> bool {
        (self.a == *x && self.b == *y) || (self.a == *y && self.b == *x)
    }
}

/// A weight is usable when it is finite and not negative.
///
/// NaN fails both comparisons, so it is rejected here too.
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// Canonical stored form of a valid weight (`-0.0` becomes `0.0`).
pub fn normalize_weight(weight: f64) -> f64 {
    if weight == 0.0 { 0.0 } else { weight }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_unordered() {
        assert_eq!(EdgeKey::new("b", "a"), EdgeKey::new("a", "b"));
        let key = EdgeKey::new(7u64, 3u64);
        assert_eq!(key.low, 3);
        assert_eq!(key.high, 7);
        assert_eq!(key.other(&3), Some(&7));
        assert_eq!(key.other(&5), None);
    }

    #[test]
    fn test_weight_validation() {
        assert!(is_valid_weight(0.0));
        assert!(is_valid_weight(-0.0));
        assert!(is_valid_weight(12.5));
        assert!(!is_valid_weight(-0.5));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
        assert!(normalize_weight(-0.0).is_sign_positive());
    }

    #[test]
    fn test_edge_connects_either_direction() {
        let edge = Edge::new("a", "b", 2.0);
        assert!(edge.connects(&"a", &"b"));
        assert!(edge.connects(&"b", &"a"));
        assert!(!edge.connects(&"a", &"c"));
        assert_eq!(edge.key(), EdgeKey::new("b", "a"));
    }
}
