// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition plan: the output of the partition planner.
//!
//! A plan is an ordered sequence of [`SubGraph`]s. Each sub-graph is a
//! contiguous batch of nodes whose total cost fits the budget, and is the
//! unit a scheduler executes at once. Edges between different sub-graphs
//! are not represented.

use crate::{CostBudget, PlannerError};
use dag_ir::graph::GraphState;
use dag_ir::{Cost, DagGraph, NodeCosts, NodeId};
use std::collections::{BTreeMap, HashMap};

/// A contiguous group of nodes carved out of the graph.
///
/// `adjacency[i]` holds the outgoing neighbours of `nodes[i]` that lie in the
/// same sub-graph, in the original adjacency order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubGraph<N, C> {
    /// Index of this sub-graph in the plan.
    pub group_index: usize,
    /// Member nodes in the order they joined the sub-graph.
    pub nodes: Vec<N>,
    /// Outgoing edges kept inside the sub-graph, parallel to `nodes`.
    pub adjacency: Vec<Vec<N>>,
    /// Total cost of the member nodes.
    pub cost: C,
}

impl<N: NodeId, C: Cost> SubGraph<N, C> {
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if this sub-graph holds a single node.
    pub fn is_singleton(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Outgoing neighbours of `node` inside this sub-graph.
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        let i = self.nodes.iter().position(|n| n == node)?;
        Some(&self.adjacency[i])
    }

    /// Iterates every kept edge as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// The sub-graph as a `node -> neighbours` mapping.
    pub fn to_map(&self) -> BTreeMap<N, Vec<N>> {
        self.nodes
            .iter()
            .cloned()
            .zip(self.adjacency.iter().cloned())
            .collect()
    }
}

/// The complete plan produced by a [`crate::PartitionStrategy`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct PartitionPlan<N, C> {
    /// Strategy name that produced this plan.
    pub strategy_name: String,
    /// Ordered list of sub-graphs.
    pub groups: Vec<SubGraph<N, C>>,
    /// The budget used for planning.
    pub budget: CostBudget<C>,
    /// Highest sub-graph cost in the plan.
    pub peak_cost: C,
}

impl<N: NodeId, C: Cost> PartitionPlan<N, C> {
    /// Returns the total number of sub-graphs.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of nodes across all sub-graphs.
    pub fn total_nodes(&self) -> usize {
        self.groups.iter().map(SubGraph::num_nodes).sum()
    }

    /// Single-node sub-graphs whose one node alone exceeds the budget.
    pub fn oversized_groups(&self) -> impl Iterator<Item = &SubGraph<N, C>> + '_ {
        self.groups
            .iter()
            .filter(move |g| !self.budget.admits(g.cost))
    }

    /// Consumes the plan, keeping only the sub-graphs.
    pub fn into_subgraphs(self) -> Vec<SubGraph<N, C>> {
        self.groups
    }

    /// Validates the plan against the graph and costs it was built from.
    ///
    /// Checks:
    /// - Plan is non-empty and group indices are consecutive from 0.
    /// - Every graph node appears in exactly one sub-graph.
    /// - Every kept edge exists in the graph with the same direction, and
    ///   every graph edge inside one sub-graph is kept.
    /// - Each recorded cost matches the node costs.
    /// - No sub-graph exceeds the budget, except a singleton whose one node
    ///   is already over it.
    pub fn validate<S: GraphState>(
        &self,
        graph: &DagGraph<N, S>,
        costs: &NodeCosts<N, C>,
    ) -> Result<(), PlannerError> {
        if self.groups.is_empty() {
            return Err(PlannerError::EmptyGraph);
        }

        let mut owner: HashMap<&N, usize> = HashMap::with_capacity(graph.len());

        for (expected, group) in self.groups.iter().enumerate() {
            if group.group_index != expected {
                return Err(self.failure(format!(
                    "expected group index {expected}, got {}",
                    group.group_index,
                )));
            }
            if group.nodes.is_empty() {
                return Err(self.failure(format!("group {expected} is empty")));
            }
            if group.adjacency.len() != group.nodes.len() {
                return Err(self.failure(format!(
                    "group {expected} has {} nodes but {} adjacency lists",
                    group.nodes.len(),
                    group.adjacency.len(),
                )));
            }

            for node in &group.nodes {
                if !graph.contains(node) {
                    return Err(self.failure(format!(
                        "group {expected} contains unknown node {node:?}"
                    )));
                }
                if let Some(previous) = owner.insert(node, expected) {
                    return Err(self.failure(format!(
                        "node {node:?} appears in groups {previous} and {expected}"
                    )));
                }
            }

            for (from, to) in group.edges() {
                if !graph.has_edge(from, to) {
                    return Err(self.failure(format!(
                        "group {expected} keeps edge {from:?} -> {to:?} absent from the graph"
                    )));
                }
            }

            let actual = costs.sum(&group.nodes)?;
            if actual != group.cost {
                return Err(self.failure(format!(
                    "group {expected} records cost {} but its nodes sum to {actual}",
                    group.cost,
                )));
            }

            if !self.budget.admits(group.cost) && !group.is_singleton() {
                return Err(self.failure(format!(
                    "group {expected} costs {} but budget is {}",
                    group.cost, self.budget,
                )));
            }
        }

        if owner.len() != graph.len() {
            let missing = graph
                .nodes()
                .iter()
                .find(|n| !owner.contains_key(n))
                .map(|n| format!("{n:?}"))
                .unwrap_or_default();
            return Err(self.failure(format!("node {missing} is not in any group")));
        }

        for (from, to) in graph.edges() {
            let group = owner[from];
            if owner[to] == group {
                let kept = self.groups[group]
                    .neighbors(from)
                    .is_some_and(|targets| targets.contains(to));
                if !kept {
                    return Err(self.failure(format!(
                        "edge {from:?} -> {to:?} lies inside group {group} but was dropped"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        let sizes: Vec<usize> = self.groups.iter().map(SubGraph::num_nodes).collect();
        let avg_nodes = if self.groups.is_empty() {
            0.0
        } else {
            self.total_nodes() as f64 / self.groups.len() as f64
        };

        format!(
            "Plan '{}': {} groups, {} nodes total, \
             avg {:.1} nodes/group, peak {}/{} ({:.0}% budget), \
             group sizes: {:?}",
            self.strategy_name,
            self.num_groups(),
            self.total_nodes(),
            avg_nodes,
            self.peak_cost,
            self.budget,
            self.budget.utilisation(self.peak_cost) * 100.0,
            sizes,
        )
    }

    fn failure(&self, detail: String) -> PlannerError {
        PlannerError::StrategyFailed {
            strategy: self.strategy_name.clone(),
            detail,
        }
    }
}

/// Builder helper for constructing a `PartitionPlan` incrementally.
///
/// Used internally by strategy implementations.
pub(crate) struct PlanBuilder<N, C> {
    strategy_name: String,
    budget: CostBudget<C>,
    groups: Vec<SubGraph<N, C>>,
    peak_cost: C,
}

impl<N: NodeId, C: Cost> PlanBuilder<N, C> {
    /// Creates a new builder.
    pub fn new(strategy_name: &str, budget: CostBudget<C>) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            budget,
            groups: Vec::new(),
            peak_cost: C::ZERO,
        }
    }

    /// Appends a finished sub-graph.
    pub fn add_group(&mut self, nodes: Vec<N>, adjacency: Vec<Vec<N>>, cost: C) {
        let group_index = self.groups.len();
        if cost > self.peak_cost {
            self.peak_cost = cost;
        }
        if !self.budget.admits(cost) {
            tracing::warn!(
                "group {group_index} ({:?}) costs {cost}, over the budget of {}",
                nodes,
                self.budget,
            );
        }
        self.groups.push(SubGraph {
            group_index,
            nodes,
            adjacency,
            cost,
        });
    }

    /// Consumes the builder and returns the finished plan.
    pub fn build(self) -> PartitionPlan<N, C> {
        PartitionPlan {
            strategy_name: self.strategy_name,
            groups: self.groups,
            budget: self.budget,
            peak_cost: self.peak_cost,
        }
    }
}
