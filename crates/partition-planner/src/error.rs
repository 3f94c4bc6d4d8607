// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition planner.

/// Errors that can occur during partition planning.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The budget is zero, negative, NaN or unparsable.
    #[error("invalid cost budget: {0}")]
    InvalidBudget(String),

    /// The graph is empty.
    #[error("cannot partition an empty graph")]
    EmptyGraph,

    /// Graph or cost validation failed (cycle, dangling edge, missing cost).
    #[error(transparent)]
    Graph(#[from] dag_ir::GraphError),

    /// The chosen strategy produced a plan that breaks its own contract.
    #[error("strategy '{strategy}' failed: {detail}")]
    StrategyFailed { strategy: String, detail: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
