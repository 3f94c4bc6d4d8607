// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dag-ir
//!
//! A lightweight representation of weighted directed acyclic graphs, the
//! input to the partition planner:
//!
//! - [`DagGraph`] — nodes with ordered outgoing neighbours, stored as an
//!   index arena, with a **type-state pattern** (`Loaded` → `Validated`).
//! - [`is_acyclic`] / [`find_cycle`] — iterative cycle detection.
//! - [`NodeCosts`] — the positive per-node cost mapping, generic over
//!   [`Cost`].
//! - [`GraphLoader`] — loads a graph and its costs from a JSON
//!   [`GraphManifest`].
//!
//! # Example
//! ```
//! use dag_ir::{DagGraph, NodeCosts};
//!
//! let graph = DagGraph::from_adjacency([
//!     (1, vec![2, 3]),
//!     (2, vec![4]),
//!     (3, vec![4]),
//!     (4, vec![]),
//! ])
//! .unwrap()
//! .validate()
//! .unwrap();
//! let costs = NodeCosts::new([(1, 1), (2, 1), (3, 1), (4, 1)]).unwrap();
//! assert_eq!(costs.sum(graph.nodes()).unwrap(), 4);
//! ```

mod costs;
pub mod cycle;
mod error;
pub mod graph;
mod loader;
pub(crate) mod manifest;

pub use costs::{Cost, NodeCosts};
pub use cycle::{find_cycle, is_acyclic};
pub use error::GraphError;
pub use graph::{DagGraph, NodeId};
pub use loader::{GraphLoader, WeightedGraph};
pub use manifest::{GraphManifest, ManifestNode};
