//! Graph export — read-only dumps for renderers.
//!
//! The routing core never draws anything. Callers that want a picture of
//! the network take one of these dumps and hand it to their own tooling:
//!
//! ```text
//! LocationGraph → export_dot() → graph { "A" -- "B" [label="2"]; ... }
//!   → pipe into `dot -Tsvg`, or paste into any Graphviz viewer
//! ```
//!
//! Both dumps list locations and edges in sorted order so the output is
//! stable across runs.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::graph::LocationGraph;
use crate::model::{Edge, LocationKey};
use crate::Result;

/// Sorted, serializable view of a graph at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<L> {
    pub locations: Vec<L>,
    /// Each undirected edge once, as `(low, high, weight)` with `low < high`.
    pub edges: Vec<Edge<L>>,
}

impl<L: LocationKey> GraphSnapshot<L> {
    pub fn of(graph: &LocationGraph<L>) -> Self {
        let mut locations = graph.all_locations();
        locations.sort();

        let mut edges = graph.all_edges();
        edges.sort_by(|x, y| (&x.a, &x.b).cmp(&(&y.a, &y.b)));

        Self { locations, edges }
    }
}

/// Export a graph as a Graphviz DOT document.
///
/// Every location becomes a node statement and every edge is written once
/// with its weight as the label. Isolated locations are kept.
pub fn export_dot<L: LocationKey>(
    graph: &LocationGraph<L>,
    writer: &mut dyn Write,
) -> Result<()> {
    let snapshot = GraphSnapshot::of(graph);

    // Header
    writeln!(writer, "// delivery-router network")?;
    writeln!(writer, "// Locations: {}", snapshot.locations.len())?;
    writeln!(writer, "// Edges: {}", snapshot.edges.len())?;
    writeln!(writer, "graph delivery {{")?;

    for location in &snapshot.locations {
        writeln!(writer, "    {};", quote_id(&location.to_string()))?;
    }

    for edge in &snapshot.edges {
        writeln!(
            writer,
            "    {} -- {} [label=\"{}\"];",
            quote_id(&edge.a.to_string()),
            quote_id(&edge.b.to_string()),
            edge.weight,
        )?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}

/// Quote an identifier as a DOT string literal.
fn quote_id(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("depot"), "\"depot\"");
        assert_eq!(quote_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_id("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let mut g = LocationGraph::new();
        for id in [3u64, 1, 2] {
            g.add_location(id).unwrap();
        }
        g.add_edge(3, 2, 1.5).unwrap();
        g.add_edge(2, 1, 4.0).unwrap();

        let snap = GraphSnapshot::of(&g);
        assert_eq!(snap.locations, vec![1, 2, 3]);
        assert_eq!(snap.edges, vec![Edge::new(1, 2, 4.0), Edge::new(2, 3, 1.5)]);
    }

    #[test]
    fn test_export_dot() {
        let mut g = LocationGraph::new();
        for id in ["B", "A", "C"] {
            g.add_location(id).unwrap();
        }
        g.add_edge("B", "A", 2.0).unwrap();

        let mut out = Vec::new();
        export_dot(&g, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "// delivery-router network\n\
             // Locations: 3\n\
             // Edges: 1\n\
             graph delivery {\n    \"A\";\n    \"B\";\n    \"C\";\n    \"A\" -- \"B\" [label=\"2\"];\n}\n"
        );
    }
}
