// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Singleton partitioning strategy.
//!
//! The simplest strategy: each node forms its own sub-graph, in identifier
//! order. No edge is kept. Every sub-graph trivially fits unless its node
//! alone is over budget.
//!
//! # When to use
//! - Baseline for comparing the greedy strategy's group count.
//! - Debugging: isolates each node's cost.

use crate::plan::PlanBuilder;
use crate::strategy::PartitionStrategy;
use crate::{CostBudget, PartitionPlan, PlannerError};
use dag_ir::graph::Validated;
use dag_ir::{Cost, DagGraph, NodeCosts, NodeId};

/// One node per sub-graph.
#[derive(Debug, Clone, Default)]
pub struct Singleton;

impl Singleton {
    pub fn new() -> Self {
        Self
    }
}

impl<N: NodeId, C: Cost> PartitionStrategy<N, C> for Singleton {
    fn name(&self) -> &str {
        "singleton"
    }

    fn plan(
        &self,
        graph: &DagGraph<N, Validated>,
        costs: &NodeCosts<N, C>,
        budget: CostBudget<C>,
    ) -> Result<PartitionPlan<N, C>, PlannerError> {
        if graph.is_empty() {
            return Err(PlannerError::EmptyGraph);
        }

        let mut nodes: Vec<&N> = graph.nodes().iter().collect();
        nodes.sort();

        let mut builder = PlanBuilder::new(PartitionStrategy::<N, C>::name(self), budget);
        for node in nodes {
            let cost = costs.cost_of(node)?;
            builder.add_group(vec![node.clone()], vec![Vec::new()], cost);
        }

        let plan = builder.build();
        plan.validate(graph, costs)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_group_per_node() {
        let g = DagGraph::from_adjacency([(3u32, vec![1]), (1, vec![2]), (2, vec![])])
            .unwrap()
            .validate()
            .unwrap();
        let costs = NodeCosts::new([(1u32, 1u32), (2, 2), (3, 3)]).unwrap();
        let plan = Singleton::new()
            .plan(&g, &costs, CostBudget::new(5).unwrap())
            .unwrap();

        assert_eq!(plan.num_groups(), 3);
        let order: Vec<u32> = plan.groups.iter().map(|s| s.nodes[0]).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(plan.peak_cost, 3);
        assert!(plan.groups.iter().all(|s| s.num_edges() == 0));
    }

    #[test]
    fn test_missing_cost() {
        let g = DagGraph::from_adjacency([(1u32, vec![])])
            .unwrap()
            .validate()
            .unwrap();
        let costs = NodeCosts::new([(2u32, 1u32)]).unwrap();
        let r = Singleton::new().plan(&g, &costs, CostBudget::new(5).unwrap());
        assert!(matches!(
            r,
            Err(PlannerError::Graph(dag_ir::GraphError::MissingCost { .. }))
        ));
    }
}
