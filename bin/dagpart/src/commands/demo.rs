// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dagpart demo` command: partition a built-in ten-node graph.
//!
//! Needs no manifest on disk, so it doubles as a smoke test of the whole
//! pipeline: cycle check, greedy partitioning, per-group cost sums.

use dag_ir::{DagGraph, NodeCosts};
use partition_planner::{cost_sum, is_acyclic, partition_graph, CostBudget};

/// The sample graph and its node costs: ten nodes fanning out from `1` and
/// joining again at `10`, with cross edges `5 -> 4` and `7 -> 4`.
pub fn demo_graph() -> anyhow::Result<(DagGraph<u64>, NodeCosts<u64, f64>)> {
    let graph = DagGraph::from_adjacency([
        (1, vec![2, 3]),
        (2, vec![4, 5]),
        (3, vec![6, 7]),
        (4, vec![8]),
        (5, vec![8, 4]),
        (6, vec![9]),
        (7, vec![9, 4]),
        (8, vec![10]),
        (9, vec![10]),
        (10, vec![]),
    ])?;
    let costs = NodeCosts::new([
        (1, 4.0),
        (2, 1.0),
        (3, 2.0),
        (4, 3.0),
        (5, 2.0),
        (6, 3.0),
        (7, 2.0),
        (8, 4.0),
        (9, 1.0),
        (10, 5.0),
    ])?;
    Ok((graph, costs))
}

pub fn execute(max_cost: String) -> anyhow::Result<()> {
    super::banner("dagpart · Demo");

    let budget = CostBudget::<f64>::parse(&max_cost)?;
    let (graph, costs) = demo_graph()?;

    println!("  Graph:   {graph}");
    println!("  Acyclic: {}", if is_acyclic(&graph) { "yes" } else { "no" });
    println!("  Budget:  {budget}");
    println!();

    let sub_graphs = partition_graph(&graph, &costs, budget.limit())?;
    for sub in &sub_graphs {
        println!("  Sub-graph {}: {:?}", sub.group_index, sub.to_map());
        println!("   Cost sum: {}", cost_sum(&costs, sub)?);
    }
    println!();
    println!("  {} sub-graphs", sub_graphs.len());
    Ok(())
}
