// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: manifest on disk → loaded graph, and cycle detection
//! checked against Kahn's algorithm on random directed graphs.

use dag_ir::{find_cycle, is_acyclic, DagGraph, GraphError, GraphLoader, WeightedGraph};
use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};

/// Acyclic iff every node can be removed in topological order.
fn kahn_acyclic(adjacency: &[Vec<usize>]) -> bool {
    let mut in_degree = vec![0usize; adjacency.len()];
    for targets in adjacency {
        for &t in targets {
            in_degree[t] += 1;
        }
    }
    let mut queue: VecDeque<usize> = (0..adjacency.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut removed = 0;
    while let Some(n) = queue.pop_front() {
        removed += 1;
        for &t in &adjacency[n] {
            in_degree[t] -= 1;
            if in_degree[t] == 0 {
                queue.push_back(t);
            }
        }
    }
    removed == adjacency.len()
}

/// Any directed graph on `0..n`, self-loops allowed, no duplicate edges.
fn arb_digraph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..16).prop_flat_map(|n| {
        let lists = proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n);
        lists.prop_map(|lists| -> Vec<Vec<usize>> {
            lists
                .into_iter()
                .map(|targets| {
                    let unique: BTreeSet<usize> = targets.into_iter().collect();
                    unique.into_iter().collect()
                })
                .collect()
        })
    })
}

fn to_graph(adjacency: &[Vec<usize>]) -> DagGraph<usize> {
    DagGraph::from_adjacency(adjacency.iter().cloned().enumerate()).unwrap()
}

proptest! {
    #[test]
    fn prop_cycle_check_agrees_with_kahn(adjacency in arb_digraph()) {
        let g = to_graph(&adjacency);
        prop_assert_eq!(is_acyclic(&g), kahn_acyclic(&adjacency));
    }

    #[test]
    fn prop_reported_cycle_is_a_closed_walk(adjacency in arb_digraph()) {
        let g = to_graph(&adjacency);
        if let Some(path) = find_cycle(&g) {
            prop_assert!(path.len() >= 2);
            prop_assert_eq!(path.first(), path.last());
            for pair in path.windows(2) {
                prop_assert!(g.has_edge(&pair[0], &pair[1]));
            }
        } else {
            prop_assert!(is_acyclic(&g));
        }
    }

    #[test]
    fn prop_adjacency_preserved(adjacency in arb_digraph()) {
        let g = to_graph(&adjacency);
        let back: Vec<Vec<usize>> = g.to_adjacency().into_iter().map(|(_, t)| t).collect();
        prop_assert_eq!(back, adjacency);
    }
}

#[test]
fn test_load_manifest_from_disk() {
    let path = std::env::temp_dir().join(format!("dag-ir-load-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "name": "pipeline", "nodes": [
            { "id": "decode", "cost": 1.5, "edges": ["resize", "crop"] },
            { "id": "resize", "cost": 2.0, "edges": ["encode"] },
            { "id": "crop", "cost": 0.5, "edges": ["encode"] },
            { "id": "encode", "cost": 3.0 }
        ] }"#,
    )
    .unwrap();

    let loaded: Result<WeightedGraph<String, f64>, _> = GraphLoader::load(&path);
    std::fs::remove_file(&path).unwrap();
    let loaded = loaded.unwrap();

    assert_eq!(loaded.name, "pipeline");
    assert_eq!(loaded.graph.len(), 4);
    assert_eq!(loaded.graph.num_edges(), 4);
    assert_eq!(loaded.total_cost().unwrap(), 7.0);
    let first: Vec<&String> = loaded.graph.neighbors(&"decode".to_string()).unwrap().collect();
    assert_eq!(first, vec!["resize", "crop"]);
}

#[test]
fn test_missing_manifest_file() {
    let path = std::env::temp_dir().join("dag-ir-no-such-manifest.json");
    let r: Result<WeightedGraph<u32, u32>, _> = GraphLoader::load(&path);
    assert!(matches!(r, Err(GraphError::ManifestReadError(_))));
}

#[test]
fn test_empty_manifest() {
    let r: Result<WeightedGraph<u32, u32>, _> = GraphLoader::from_json(r#"{ "nodes": [] }"#);
    assert!(matches!(r, Err(GraphError::EmptyGraph)));
}
