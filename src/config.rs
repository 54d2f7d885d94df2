//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Tuning knobs for a [`RoutePlanningEngine`](crate::RoutePlanningEngine).
///
/// Both fields are capacity hints only; a graph grows past them as needed.
///
/// ```
/// use delivery_router::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "expected_locations": 64 }"#).unwrap();
/// assert_eq!(config.expected_locations, 64);
/// assert_eq!(config.expected_edges, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Locations to reserve room for up front.
    pub expected_locations: usize,
    /// Edges to reserve room for up front.
    pub expected_edges: usize,
}

impl EngineConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_expected_locations(mut self, n: usize) -> Self {
        self.expected_locations = n;
        self
    }

    pub fn with_expected_edges(mut self, n: usize) -> Self {
        self.expected_edges = n;
        self
    }
}
