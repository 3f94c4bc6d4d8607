// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph construction, validation and loading.

/// Errors that can occur when building or validating a weighted DAG.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The graph manifest file could not be read.
    #[error("failed to read graph manifest: {0}")]
    ManifestReadError(#[from] std::io::Error),

    /// The manifest JSON is malformed.
    #[error("failed to parse graph manifest: {0}")]
    ManifestParseError(#[from] serde_json::Error),

    /// The adjacency structure is not a closed, simple graph
    /// (dangling neighbour, duplicate node key, duplicate edge).
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// The graph contains a directed cycle.
    #[error("graph is not acyclic: cycle {path}")]
    CyclicGraph { path: String },

    /// The graph has no nodes.
    #[error("graph contains no nodes")]
    EmptyGraph,

    /// A node has no entry in the cost mapping.
    #[error("no cost defined for node {node}")]
    MissingCost { node: String },

    /// Summing costs overflowed the cost type.
    #[error("cost total overflows at node {node}")]
    CostOverflow { node: String },

    /// A cost entry is zero, negative, NaN or duplicated.
    #[error("invalid cost for node {node}: {detail}")]
    InvalidCost { node: String, detail: String },
}
