// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-planner
//!
//! Partitions a validated weighted DAG into contiguous sub-graphs whose
//! total node cost stays within a budget, using pluggable strategies.
//!
//! # Strategies
//!
//! | Strategy | Sub-graphs | Edges kept |
//! |---|---|---|
//! | [`GreedyContiguous`] | Few (greedy, not minimal) | All edges inside a sub-graph |
//! | [`Singleton`] | One per node | None |
//!
//! # Trait-Based Extensibility
//!
//! All strategies implement [`PartitionStrategy`]:
//!
//! ```ignore
//! struct MyCustomStrategy;
//! impl<N: NodeId, C: Cost> PartitionStrategy<N, C> for MyCustomStrategy {
//!     fn name(&self) -> &str { "custom" }
//!     fn plan(&self, graph: &DagGraph<N, Validated>, costs: &NodeCosts<N, C>,
//!             budget: CostBudget<C>) -> Result<PartitionPlan<N, C>, PlannerError> { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use dag_ir::{DagGraph, NodeCosts};
//! use partition_planner::{is_acyclic, partition_graph};
//!
//! let graph = DagGraph::from_adjacency([
//!     (1, vec![2, 3]),
//!     (2, vec![4]),
//!     (3, vec![4]),
//!     (4, vec![]),
//! ])
//! .unwrap();
//! let costs = NodeCosts::new([(1, 1), (2, 1), (3, 1), (4, 1)]).unwrap();
//!
//! assert!(is_acyclic(&graph));
//! let sub_graphs = partition_graph(&graph, &costs, 2).unwrap();
//! assert_eq!(sub_graphs.len(), 2);
//! ```

mod budget;
pub mod config;
mod error;
pub mod expand;
pub mod plan;
pub mod strategy;
pub mod working;

pub use budget::CostBudget;
pub use config::PlannerConfig;
pub use dag_ir::is_acyclic;
pub use error::PlannerError;
pub use expand::expand_subgraph;
pub use plan::{PartitionPlan, SubGraph};
pub use strategy::greedy::GreedyContiguous;
pub use strategy::singleton::Singleton;
pub use strategy::PartitionStrategy;
pub use working::{split_subgraph, NodeLinks, WorkingGraph};

use dag_ir::graph::GraphState;
use dag_ir::{Cost, DagGraph, NodeCosts, NodeId};

/// Partitions `graph` with [`GreedyContiguous`] and returns the sub-graphs.
///
/// The graph is checked first: an empty graph yields
/// [`PlannerError::EmptyGraph`], a cyclic one
/// [`dag_ir::GraphError::CyclicGraph`], a node without a cost
/// [`dag_ir::GraphError::MissingCost`], and a non-positive `max_cost`
/// [`PlannerError::InvalidBudget`].
pub fn partition_graph<N, C, S>(
    graph: &DagGraph<N, S>,
    node_costs: &NodeCosts<N, C>,
    max_cost: C,
) -> Result<Vec<SubGraph<N, C>>, PlannerError>
where
    N: NodeId,
    C: Cost,
    S: GraphState,
{
    if graph.is_empty() {
        return Err(PlannerError::EmptyGraph);
    }
    let budget = CostBudget::new(max_cost)?;
    let graph = graph.to_validated()?;
    let plan = GreedyContiguous::new().plan(&graph, node_costs, budget)?;
    Ok(plan.into_subgraphs())
}

/// Sum of node costs over `sub_graph`.
///
/// # Errors
/// [`dag_ir::GraphError::MissingCost`] for the first node without a cost.
pub fn cost_sum<N: NodeId, C: Cost>(
    node_costs: &NodeCosts<N, C>,
    sub_graph: &SubGraph<N, C>,
) -> Result<C, PlannerError> {
    Ok(node_costs.sum(&sub_graph.nodes)?)
}
