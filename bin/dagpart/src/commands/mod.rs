// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared output helpers.

pub mod check;
pub mod demo;
pub mod inspect;
pub mod partition;

use dag_ir::{Cost, NodeCosts, NodeId};
use partition_planner::PartitionPlan;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the default level from
/// `warn` to `info`, `debug`, then `trace`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a boxed banner title.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║ {title:^52} ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

/// Prints one line per sub-graph with its members, kept edges and cost.
pub fn print_plan<N: NodeId, C: Cost>(plan: &PartitionPlan<N, C>, costs: &NodeCosts<N, C>) {
    println!("  {:<6} {:>6} {:>6} {:>10}  {}", "Group", "Nodes", "Edges", "Cost", "Members");
    println!("  {}", "-".repeat(60));

    for group in &plan.groups {
        let cost = costs
            .sum(&group.nodes)
            .map_or_else(|e| format!("? ({e})"), |c| c.to_string());
        let marker = if plan.budget.admits(group.cost) { "" } else { "  (over budget)" };
        println!(
            "  {:<6} {:>6} {:>6} {:>10}  {:?}{marker}",
            group.group_index,
            group.num_nodes(),
            group.num_edges(),
            cost,
            group.nodes,
        );
    }
    println!();
    println!("  {}", plan.summary());
    println!();
}
