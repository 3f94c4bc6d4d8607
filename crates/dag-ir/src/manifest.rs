// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON graph manifest parsing.
//!
//! The manifest lists every node with its cost and outgoing edges.
//!
//! # Format
//! ```json
//! {
//!   "name": "pipeline",
//!   "nodes": [
//!     { "id": 1, "cost": 4, "edges": [2, 3] },
//!     { "id": 2, "cost": 1, "edges": [4] },
//!     { "id": 3, "cost": 2 },
//!     { "id": 4, "cost": 3 }
//!   ]
//! }
//! ```
//!
//! `edges` may be omitted for sinks.

use crate::GraphError;
use std::path::Path;

/// Top-level graph manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphManifest<N, C> {
    /// Human-readable graph name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Node entries, in the order the graph should keep them.
    pub nodes: Vec<ManifestNode<N, C>>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

/// A single node entry in the manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ManifestNode<N, C> {
    pub id: N,
    pub cost: C,
    #[serde(default = "Vec::new")]
    pub edges: Vec<N>,
}

impl<N, C> GraphManifest<N, C>
where
    N: serde::de::DeserializeOwned,
    C: serde::de::DeserializeOwned,
{
    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let manifest: Self = serde_json::from_str(json)?;
        if manifest.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Ok(manifest)
    }
}

impl<N: serde::Serialize, C: serde::Serialize> GraphManifest<N, C> {
    /// Serialises the manifest to pretty JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
