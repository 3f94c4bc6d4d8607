// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dagpart partition` command: split a graph manifest into sub-graphs.
//!
//! Loads the manifest, resolves the budget and strategy from the
//! [`PlannerConfig`], and prints every sub-graph with its cost sum, either as
//! a table or as the serialised plan.

use anyhow::Context;
use dag_ir::{GraphLoader, WeightedGraph};
use partition_planner::PlannerConfig;
use std::path::PathBuf;

/// Builds the run configuration. A `--config` file takes precedence over the
/// individual flags.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    graph: Option<PathBuf>,
    max_cost: Option<String>,
    strategy: String,
    format: String,
) -> anyhow::Result<PlannerConfig> {
    if let Some(path) = config_path {
        tracing::info!("reading planner config from '{}'", path.display());
        return Ok(PlannerConfig::from_file(&path)?);
    }

    let graph_path = graph.context("--graph is required when no --config is given")?;
    let max_cost = max_cost.context("--max-cost is required when no --config is given")?;
    Ok(PlannerConfig {
        graph_path,
        max_cost,
        strategy,
        output: format,
    })
}

pub fn execute(config: PlannerConfig) -> anyhow::Result<()> {
    let json = config.wants_json()?;
    let budget = config.parse_budget::<f64>()?;
    let strategy = config.create_strategy::<u64, f64>()?;

    let loaded: WeightedGraph<u64, f64> = GraphLoader::load(&config.graph_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to load graph from '{}': {e}",
            config.graph_path.display()
        )
    })?;

    tracing::info!(
        "partitioning '{}' with {} under budget {budget}",
        loaded.name,
        strategy.name(),
    );
    let plan = strategy.plan(&loaded.graph, &loaded.costs, budget)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    super::banner("dagpart · Partition");
    println!("  Graph:    {} ({})", loaded.name, config.graph_path.display());
    println!("  Nodes:    {}", loaded.graph.len());
    println!("  Edges:    {}", loaded.graph.num_edges());
    println!("  Budget:   {budget}");
    println!("  Strategy: {}", strategy.name());
    println!();

    super::print_plan(&plan, &loaded.costs);
    Ok(())
}
