// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graph loading from a JSON manifest.
//!
//! Loading runs every boundary check before the graph reaches a planner:
//! closed universe, no duplicate keys or edges, positive costs, acyclicity.

use crate::graph::{NodeId, Validated};
use crate::{Cost, DagGraph, GraphError, GraphManifest, NodeCosts};
use std::path::Path;

/// A validated graph together with its cost mapping.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, C> {
    /// Name taken from the manifest.
    pub name: String,
    pub graph: DagGraph<N, Validated>,
    pub costs: NodeCosts<N, C>,
}

impl<N: NodeId, C: Cost> WeightedGraph<N, C> {
    /// Total cost of every node in the graph.
    pub fn total_cost(&self) -> Result<C, GraphError> {
        self.costs.sum(self.graph.nodes())
    }
}

/// Loads weighted graphs from disk or from manifests already in memory.
///
/// # Example
/// ```no_run
/// use dag_ir::GraphLoader;
/// use std::path::Path;
///
/// let loaded = GraphLoader::load::<u64, f64>(Path::new("./graph.json")).unwrap();
/// println!("{}", loaded.graph.summary());
/// ```
pub struct GraphLoader;

impl GraphLoader {
    /// Loads and validates a graph manifest from a JSON file.
    pub fn load<N, C>(path: &Path) -> Result<WeightedGraph<N, C>, GraphError>
    where
        N: NodeId + serde::de::DeserializeOwned,
        C: Cost + serde::de::DeserializeOwned,
    {
        tracing::info!("loading graph manifest from '{}'", path.display());
        Self::from_manifest(GraphManifest::from_file(path)?)
    }

    /// Parses and validates a graph manifest from a JSON string.
    pub fn from_json<N, C>(json: &str) -> Result<WeightedGraph<N, C>, GraphError>
    where
        N: NodeId + serde::de::DeserializeOwned,
        C: Cost + serde::de::DeserializeOwned,
    {
        Self::from_manifest(GraphManifest::from_json(json)?)
    }

    /// Builds a validated graph and cost mapping from a parsed manifest.
    pub fn from_manifest<N: NodeId, C: Cost>(
        manifest: GraphManifest<N, C>,
    ) -> Result<WeightedGraph<N, C>, GraphError> {
        let costs = NodeCosts::new(manifest.nodes.iter().map(|n| (n.id.clone(), n.cost)))?;
        let graph = DagGraph::from_adjacency(manifest.nodes.into_iter().map(|n| (n.id, n.edges)))?
            .validate()?;

        tracing::debug!("loaded graph '{}': {}", manifest.name, graph.summary());

        Ok(WeightedGraph {
            name: manifest.name,
            graph,
            costs,
        })
    }
}
