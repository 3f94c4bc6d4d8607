// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dagpart inspect` command: display graph structure and cost estimates.
//!
//! Prints every node with its cost and link counts, suggests budgets, and
//! compares how many sub-graphs each strategy produces at a few of them.

use dag_ir::{GraphLoader, WeightedGraph};
use partition_planner::config::create_strategy;
use partition_planner::{CostBudget, WorkingGraph};
use std::path::PathBuf;

const STRATEGIES: [&str; 2] = ["greedy-contiguous", "singleton"];

pub fn execute(graph: PathBuf, max_cost: Option<String>) -> anyhow::Result<()> {
    super::banner("dagpart · Graph Inspector");

    let loaded: WeightedGraph<u64, f64> = GraphLoader::load(&graph).map_err(|e| {
        anyhow::anyhow!("failed to load graph from '{}': {e}", graph.display())
    })?;
    let g = &loaded.graph;

    // ── Summary ────────────────────────────────────────────────
    let total = loaded.total_cost()?;
    let largest = loaded.costs.max_over(g)?;
    println!("  Graph: {}", loaded.name);
    println!("  {}", g.summary());
    println!("  Total cost:   {total}");
    println!("  Largest node: {largest}");
    println!();

    // ── Per-Node Detail ────────────────────────────────────────
    let links = WorkingGraph::new(g).node_links();
    println!(
        "  {:<8} {:>10} {:>6} {:>6}  {}",
        "Node", "Cost", "Out", "Links", "Successors",
    );
    println!("  {}", "-".repeat(56));
    for (idx, node) in g.nodes().iter().enumerate() {
        let successors: Vec<&u64> = g.successors(idx).iter().map(|&s| g.node(s)).collect();
        println!(
            "  {:<8} {:>10} {:>6} {:>6}  {:?}",
            node,
            loaded.costs.cost_of(node)?,
            successors.len(),
            links.of(idx).unwrap_or(0),
            successors,
        );
    }
    println!();

    // ── Budget Recommendations ─────────────────────────────────
    println!("  Budget Recommendations:");
    println!("   Minimum (no oversized group): {largest}  (fits the largest single node)");
    println!("   Single group:                 {total}  (fits every node at once)");
    println!();

    // ── Strategy Comparison ────────────────────────────────────
    let mut budgets = vec![largest, (total / 2.0).max(largest), total];
    if let Some(raw) = max_cost {
        budgets.insert(0, CostBudget::<f64>::parse(&raw)?.limit());
    }

    println!("  Strategy comparison (groups at different budgets):");
    let header: Vec<String> = budgets.iter().map(|b| format!("{b:>8.1}")).collect();
    println!("  {:<20} {}", "Strategy", header.join(" "));
    println!("  {}", "-".repeat(22 + 9 * budgets.len()));

    for name in STRATEGIES {
        let strategy = create_strategy::<u64, f64>(name)?;
        let cells: Vec<String> = budgets
            .iter()
            .map(|&limit| {
                let planned = CostBudget::new(limit)
                    .and_then(|budget| strategy.plan(g, &loaded.costs, budget));
                match planned {
                    Ok(plan) => format!("{:>8}", plan.num_groups()),
                    Err(e) => {
                        tracing::warn!("{name} at budget {limit}: {e}");
                        format!("{:>8}", "err")
                    }
                }
            })
            .collect();
        println!("  {:<20} {}", strategy.name(), cells.join(" "));
    }

    println!();
    Ok(())
}
