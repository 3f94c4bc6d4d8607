// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dagpart
//!
//! Command-line interface for cost-bounded DAG partitioning.
//!
//! ## Usage
//! ```bash
//! # Partition a graph manifest
//! dagpart partition --graph ./graphs/pipeline.json --max-cost 10
//!
//! # Same, settings taken from a TOML file
//! dagpart --config ./planner.toml partition
//!
//! # Check a manifest for cycles and malformed entries
//! dagpart check --graph ./graphs/pipeline.json
//!
//! # Inspect node links, costs, and strategy comparison
//! dagpart inspect --graph ./graphs/pipeline.json
//!
//! # Partition the built-in ten-node sample
//! dagpart demo --max-cost 10
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dagpart",
    about = "Partition weighted DAGs into contiguous cost-bounded sub-graphs",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (overrides CLI arguments).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a graph manifest into sub-graphs under a cost budget.
    Partition {
        /// Path to the JSON graph manifest.
        #[arg(short, long)]
        graph: Option<std::path::PathBuf>,

        /// Maximum cost per sub-graph (e.g., "10", "2.5").
        #[arg(short = 'b', long)]
        max_cost: Option<String>,

        /// Partition strategy: greedy-contiguous, singleton.
        #[arg(short, long, default_value = "greedy-contiguous")]
        strategy: String,

        /// Output format: text, json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that a graph manifest is well-formed and acyclic.
    Check {
        /// Path to the JSON graph manifest.
        #[arg(short, long)]
        graph: std::path::PathBuf,
    },

    /// Inspect a graph: node links, costs, and group counts per strategy.
    Inspect {
        /// Path to the JSON graph manifest.
        #[arg(short, long)]
        graph: std::path::PathBuf,

        /// Budget for the strategy comparison (default: largest node cost).
        #[arg(short = 'b', long)]
        max_cost: Option<String>,
    },

    /// Partition the built-in ten-node sample graph.
    Demo {
        /// Maximum cost per sub-graph.
        #[arg(short = 'b', long, default_value = "10")]
        max_cost: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Partition {
            graph,
            max_cost,
            strategy,
            format,
        } => {
            let config =
                commands::partition::resolve_config(cli.config, graph, max_cost, strategy, format)?;
            commands::partition::execute(config)
        }
        Commands::Check { graph } => commands::check::execute(graph),
        Commands::Inspect { graph, max_cost } => commands::inspect::execute(graph, max_cost),
        Commands::Demo { max_cost } => commands::demo::execute(max_cost),
    }
}
