// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dagpart check` command: report whether a manifest describes a DAG.
//!
//! Structural problems (unknown neighbours, duplicate keys or edges, bad
//! costs) fail the command. A cycle is reported with one closed path and
//! also fails it, so the exit status can gate scripts.

use dag_ir::{find_cycle, DagGraph, GraphManifest, NodeCosts};
use std::path::PathBuf;

pub fn execute(graph: PathBuf) -> anyhow::Result<()> {
    let manifest: GraphManifest<u64, f64> = GraphManifest::from_file(&graph)
        .map_err(|e| anyhow::anyhow!("failed to read '{}': {e}", graph.display()))?;

    NodeCosts::new(manifest.nodes.iter().map(|n| (n.id, n.cost)))?;
    let dag = DagGraph::from_adjacency(manifest.nodes.into_iter().map(|n| (n.id, n.edges)))?;

    println!("  Graph: {} ({} nodes, {} edges)", manifest.name, dag.len(), dag.num_edges());
    match find_cycle(&dag) {
        None => {
            println!("  Acyclic: yes");
            Ok(())
        }
        Some(path) => {
            let rendered: Vec<String> = path.iter().map(u64::to_string).collect();
            println!("  Acyclic: no");
            println!("  Cycle:   {}", rendered.join(" -> "));
            anyhow::bail!("graph '{}' contains a cycle", manifest.name)
        }
    }
}
