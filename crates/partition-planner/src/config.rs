// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Planner configuration loaded from TOML files or constructed in code.
//!
//! # TOML Format
//! ```toml
//! graph_path = "./graphs/pipeline.json"
//! max_cost = "10"
//! strategy = "greedy-contiguous"
//! output = "text"
//! ```

use crate::{CostBudget, GreedyContiguous, PartitionStrategy, PlannerError, Singleton};
use dag_ir::{Cost, NodeId};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for a partitioning run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlannerConfig {
    /// Path to the JSON graph manifest.
    pub graph_path: PathBuf,
    /// Maximum cost per sub-graph, as written (e.g. `"10"`, `"2.5"`).
    pub max_cost: String,
    /// Strategy name: `"greedy-contiguous"` or `"singleton"`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Report format: `"text"` or `"json"`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_strategy() -> String {
    "greedy-contiguous".to_string()
}

fn default_output() -> String {
    "text".to_string()
}

impl PlannerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PlannerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PlannerError> {
        toml::from_str(toml_str)
            .map_err(|e| PlannerError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, PlannerError> {
        toml::to_string_pretty(self)
            .map_err(|e| PlannerError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Parses the `max_cost` string into a [`CostBudget`].
    pub fn parse_budget<C>(&self) -> Result<CostBudget<C>, PlannerError>
    where
        C: Cost + FromStr,
        C::Err: fmt::Display,
    {
        CostBudget::parse(&self.max_cost)
    }

    /// Returns `true` if the report should be JSON.
    pub fn wants_json(&self) -> Result<bool, PlannerError> {
        match self.output.to_lowercase().as_str() {
            "text" => Ok(false),
            "json" => Ok(true),
            other => Err(PlannerError::ConfigError(format!(
                "unknown output format '{other}'; expected 'text' or 'json'"
            ))),
        }
    }

    /// Creates the partition strategy specified by this config.
    pub fn create_strategy<N: NodeId, C: Cost>(
        &self,
    ) -> Result<Box<dyn PartitionStrategy<N, C>>, PlannerError> {
        create_strategy(&self.strategy)
    }
}

/// Resolves a strategy by name (case-insensitive, short aliases accepted).
pub fn create_strategy<N: NodeId, C: Cost>(
    name: &str,
) -> Result<Box<dyn PartitionStrategy<N, C>>, PlannerError> {
    match name.to_lowercase().as_str() {
        "greedy-contiguous" | "greedy" => Ok(Box::new(GreedyContiguous::new())),
        "singleton" | "single" => Ok(Box::new(Singleton::new())),
        other => Err(PlannerError::ConfigError(format!(
            "unknown strategy '{other}'; expected 'greedy-contiguous' or 'singleton'"
        ))),
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("./graph.json"),
            max_cost: "10".to_string(),
            strategy: default_strategy(),
            output: default_output(),
        }
    }
}
