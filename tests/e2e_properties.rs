//! Property tests for the routing core.
//!
//! Random graphs of at most six locations are small enough to enumerate
//! every simple path, so the Dijkstra answers are checked against brute
//! force.

use delivery_router::{Error, LocationGraph, NearestUnvisitedFinder, ShortestPathFinder};
use proptest::prelude::*;

const MAX_NODES: u32 = 6;

/// `(node_count, edges)` with edges over `0..node_count`, self loops removed.
fn small_graph() -> impl Strategy<Value = (u32, Vec<(u32, u32, u32)>)> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0u32..20), 0..12)
            .prop_map(|raw| raw.into_iter().filter(|(a, b, _)| a != b).collect::<Vec<_>>());
        (Just(n), edges)
    })
}

fn build(n: u32, edges: &[(u32, u32, u32)]) -> LocationGraph<u32> {
    let mut g = LocationGraph::new();
    for id in 0..n {
        g.add_location(id).unwrap();
    }
    for &(a, b, w) in edges {
        g.add_edge(a, b, f64::from(w)).unwrap();
    }
    g
}

/// Cheapest simple path weight by exhaustive DFS.
fn brute_force(g: &LocationGraph<u32>, from: u32, to: u32) -> Option<f64> {
    fn dfs(g: &LocationGraph<u32>, at: u32, to: u32, seen: &mut Vec<u32>, acc: f64, best: &mut Option<f64>) {
        if at == to {
            if best.is_none_or(|b| acc < b) {
                *best = Some(acc);
            }
            return;
        }
        for (next, w) in g.neighbors(&at).unwrap() {
            if !seen.contains(&next) {
                seen.push(next);
                dfs(g, next, to, seen, acc + w, best);
                seen.pop();
            }
        }
    }
    let mut best = None;
    dfs(g, from, to, &mut vec![from], 0.0, &mut best);
    best
}

proptest! {
    #[test]
    fn shortest_path_matches_exhaustive_search((n, edges) in small_graph(), from in 0..MAX_NODES, to in 0..MAX_NODES) {
        prop_assume!(from < n && to < n);
        let g = build(n, &edges);

        match (ShortestPathFinder.find_path(&g, &from, &to), brute_force(&g, from, to)) {
            (Ok(route), Some(best)) => {
                prop_assert_eq!(route.total_weight, best);
                prop_assert_eq!(route.start(), Some(&from));
                prop_assert_eq!(route.end(), Some(&to));
                // The reported weight is the sum of the travelled edges.
                let summed: f64 = route
                    .locations
                    .windows(2)
                    .map(|pair| g.edge_weight(&pair[0], &pair[1]).unwrap())
                    .sum();
                prop_assert_eq!(summed, route.total_weight);
            }
            (Err(Error::NoPath { .. }), None) => {}
            (got, expected) => prop_assert!(false, "got {:?}, brute force {:?}", got, expected),
        }
    }

    #[test]
    fn nearest_other_is_globally_closest((n, edges) in small_graph(), current in 0..MAX_NODES) {
        prop_assume!(current < n);
        let g = build(n, &edges);

        let best = (0..n)
            .filter(|&other| other != current)
            .filter_map(|other| brute_force(&g, current, other))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))));

        match NearestUnvisitedFinder.nearest_with_distance(&g, &current).unwrap() {
            Some((id, distance)) => {
                prop_assert_ne!(id, current);
                prop_assert_eq!(Some(distance), best);
                prop_assert_eq!(brute_force(&g, current, id), Some(distance));
            }
            None => prop_assert_eq!(best, None),
        }
    }

    #[test]
    fn edges_are_symmetric_and_last_write_wins((n, edges) in small_graph()) {
        let g = build(n, &edges);
        for &(a, b, _) in &edges {
            let w = edges.iter().rev().find(|(x, y, _)| (*x, *y) == (a, b) || (*x, *y) == (b, a)).unwrap().2;
            prop_assert!(g.neighbors(&a).unwrap().contains(&(b, f64::from(w))));
            prop_assert!(g.neighbors(&b).unwrap().contains(&(a, f64::from(w))));
        }
    }

    #[test]
    fn route_to_self_is_trivial((n, edges) in small_graph(), x in 0..MAX_NODES) {
        prop_assume!(x < n);
        let g = build(n, &edges);
        let route = ShortestPathFinder.find_path(&g, &x, &x).unwrap();
        prop_assert_eq!(route.locations, vec![x]);
        prop_assert_eq!(route.total_weight, 0.0);
    }
}
