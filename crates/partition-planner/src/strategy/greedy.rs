// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy contiguous partitioning strategy.
//!
//! Repeatedly carves one sub-graph out of the remaining graph:
//!
//! 1. Count links (in + out edges) of every remaining node.
//! 2. Seed a new sub-graph with the least-connected node (ties: smallest
//!    identifier).
//! 3. Grow it along outgoing edges, always trying the least-connected
//!    frontier target, skipping any target that would overflow the budget
//!    (see [`crate::expand`]).
//! 4. Remove its nodes and every edge touching them from the remaining graph.
//!
//! When exactly one node is left after a removal it becomes the final
//! sub-graph on its own.
//!
//! # Cost Model
//!
//! A sub-graph costs the sum of its node costs. It never exceeds the budget
//! unless it is a single node that is over budget by itself; such a node is
//! still placed, alone.
//!
//! The heuristic is greedy and never backtracks, so the group count is not
//! guaranteed to be minimal. Edges between different sub-graphs are dropped.

use crate::expand::{expand_subgraph, Expansion};
use crate::plan::PlanBuilder;
use crate::strategy::PartitionStrategy;
use crate::working::WorkingGraph;
use crate::{CostBudget, PartitionPlan, PlannerError};
use dag_ir::graph::Validated;
use dag_ir::{Cost, DagGraph, NodeCosts, NodeId};

/// Greedy growth of contiguous, budget-fitting sub-graphs.
#[derive(Debug, Clone, Default)]
pub struct GreedyContiguous;

impl GreedyContiguous {
    pub fn new() -> Self {
        Self
    }
}

impl<N: NodeId, C: Cost> PartitionStrategy<N, C> for GreedyContiguous {
    fn name(&self) -> &str {
        "greedy-contiguous"
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

        // Fails fast on the first node without a cost.
        let unit_costs = costs.resolve(graph)?;

        let mut builder = PlanBuilder::new(PartitionStrategy::<N, C>::name(self), budget);
        let mut working = WorkingGraph::new(graph);

        while let Some(seed) = working.least_connected(&working.node_links()) {
            tracing::debug!(
                "seeding group with {:?} ({} nodes remaining)",
                graph.node(seed),
                working.remaining(),
            );

            let expansion = expand_subgraph(&working, &unit_costs, budget, seed);
            let (nodes, adjacency) = expansion.materialize(&working);
            builder.add_group(nodes, adjacency, expansion.cost());
            working.retire(expansion.members());

            if working.remaining() == 1 {
                let last = working.active_indices().next();
                if let Some(last) = last {
                    let leftover = Expansion::seed(last, unit_costs[last]);
                    let (nodes, adjacency) = leftover.materialize(&working);
                    builder.add_group(nodes, adjacency, leftover.cost());
                    working.retire(leftover.members());
                }
            }
        }

        let plan = builder.build();
        plan.validate(graph, costs)?;
        tracing::info!("{}", plan.summary());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(entries: &[(u32, &[u32])]) -> DagGraph<u32, Validated> {
        DagGraph::from_adjacency(entries.iter().map(|(n, adj)| (*n, adj.to_vec())))
            .unwrap()
            .validate()
            .unwrap()
    }

    fn unit_costs(g: &DagGraph<u32, Validated>) -> NodeCosts<u32, u32> {
        NodeCosts::new(g.nodes().iter().map(|&n| (n, 1))).unwrap()
    }

    fn plan(
        g: &DagGraph<u32, Validated>,
        costs: &NodeCosts<u32, u32>,
        max_cost: u32,
    ) -> PartitionPlan<u32, u32> {
        GreedyContiguous::new()
            .plan(g, costs, CostBudget::new(max_cost).unwrap())
            .unwrap()
    }

    #[test]
    fn test_diamond_two_groups() {
        let g = build(&[(1, &[2, 3]), (2, &[4]), (3, &[4]), (4, &[])]);
        let p = plan(&g, &unit_costs(&g), 2);

        assert_eq!(p.num_groups(), 2);
        assert_eq!(p.groups[0].nodes, vec![1, 2]);
        assert_eq!(p.groups[0].adjacency, vec![vec![2], vec![]]);
        assert_eq!(p.groups[1].nodes, vec![3, 4]);
    }

    #[test]
    fn test_chain_of_ten() {
        let entries: Vec<(u32, Vec<u32>)> = (1..=10)
            .map(|i| (i, if i < 10 { vec![i + 1] } else { vec![] }))
            .collect();
        let g = DagGraph::from_adjacency(entries).unwrap().validate().unwrap();
        let p = plan(&g, &unit_costs(&g), 3);

        let groups: Vec<Vec<u32>> = p.groups.iter().map(|s| s.nodes.clone()).collect();
        assert_eq!(
            groups,
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
        );
    }

    #[test]
    fn test_all_fit_in_one_group() {
        let g = build(&[(1, &[2, 3]), (2, &[4]), (3, &[4]), (4, &[])]);
        let p = plan(&g, &unit_costs(&g), 100);
        assert_eq!(p.num_groups(), 1);
        assert_eq!(p.groups[0].num_edges(), 4);
    }

    #[test]
    fn test_single_oversized_node() {
        let g = build(&[(1, &[])]);
        let costs = NodeCosts::new([(1u32, 100u32)]).unwrap();
        let p = plan(&g, &costs, 10);
        assert_eq!(p.num_groups(), 1);
        assert_eq!(p.groups[0].cost, 100);
        assert_eq!(p.oversized_groups().count(), 1);
    }

    #[test]
    fn test_oversized_node_in_chain() {
        let g = build(&[(1, &[2]), (2, &[3]), (3, &[])]);
        let costs = NodeCosts::new([(1u32, 1u32), (2, 50), (3, 1)]).unwrap();
        let p = plan(&g, &costs, 5);
        let groups: Vec<Vec<u32>> = p.groups.iter().map(|s| s.nodes.clone()).collect();
        // 2 rejects 3 because it is already over budget alone.
        assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
        assert_eq!(p.oversized_groups().count(), 1);
    }

    #[test]
    fn test_last_node_appended_alone() {
        // After {1, 2} is carved out only 3 is left; it never expands.
        let g = build(&[(1, &[2]), (2, &[3]), (3, &[])]);
        let p = plan(&g, &unit_costs(&g), 2);
        assert_eq!(p.num_groups(), 2);
        assert_eq!(p.groups[1].nodes, vec![3]);
    }

    #[test]
    fn test_disconnected_components() {
        let g = build(&[(1, &[2]), (2, &[3]), (3, &[]), (10, &[11]), (11, &[])]);
        let p = plan(&g, &unit_costs(&g), 2);
        p.validate(&g, &unit_costs(&g)).unwrap();
        assert_eq!(p.total_nodes(), 5);
        for group in &p.groups {
            let same_component = group.nodes.iter().all(|&n| n < 10)
                || group.nodes.iter().all(|&n| n >= 10);
            assert!(same_component, "group {:?} spans components", group.nodes);
        }
    }

    #[test]
    fn test_reference_sample_graph() {
        let g = build(&[
            (1, &[2, 3]),
            (2, &[4, 5]),
            (3, &[6, 7]),
            (4, &[8]),
            (5, &[8, 4]),
            (6, &[9]),
            (7, &[9, 4]),
            (8, &[10]),
            (9, &[10]),
            (10, &[]),
        ]);
        let costs = NodeCosts::new([
            (1u32, 4u32),
            (2, 1),
            (3, 2),
            (4, 3),
            (5, 2),
            (6, 3),
            (7, 2),
            (8, 4),
            (9, 1),
            (10, 5),
        ])
        .unwrap();
        let p = plan(&g, &costs, 10);
        p.validate(&g, &costs).unwrap();
        assert!(p.groups.iter().all(|s| s.cost <= 10));
        assert_eq!(p.total_nodes(), 10);
    }

    #[test]
    fn test_missing_cost_fails_fast() {
        let g = build(&[(1, &[2]), (2, &[])]);
        let costs = NodeCosts::new([(1u32, 1u32)]).unwrap();
        let r = GreedyContiguous::new().plan(&g, &costs, CostBudget::new(5).unwrap());
        assert!(matches!(
            r,
            Err(PlannerError::Graph(dag_ir::GraphError::MissingCost { .. }))
        ));
    }

    #[test]
    fn test_integer_overflow_splits_group() {
        let g = build(&[(1, &[2]), (2, &[])]);
        let costs = NodeCosts::new([(1u32, 200u8), (2, 100)]).unwrap();
        let p = GreedyContiguous::new()
            .plan(&g, &costs, CostBudget::new(250).unwrap())
            .unwrap();
        let groups: Vec<Vec<u32>> = p.groups.iter().map(|s| s.nodes.clone()).collect();
        assert_eq!(groups, vec![vec![1], vec![2]]);
        assert!(p.groups.iter().all(|s| s.cost <= 250));
    }

    #[test]
    fn test_near_max_costs_stay_apart() {
        let g = build(&[(1, &[2]), (2, &[])]);
        let costs = NodeCosts::new([(1u32, u32::MAX - 1), (2, 5)]).unwrap();
        let p = GreedyContiguous::new()
            .plan(&g, &costs, CostBudget::new(u32::MAX).unwrap())
            .unwrap();
        assert_eq!(p.num_groups(), 2);
    }

    #[test]
    fn test_fractional_costs() {
        let g = build(&[(1, &[2]), (2, &[3]), (3, &[])]);
        let costs = NodeCosts::new([(1u32, 0.5f64), (2, 0.25), (3, 0.5)]).unwrap();
        let p = GreedyContiguous::new()
            .plan(&g, &costs, CostBudget::new(0.75).unwrap())
            .unwrap();
        assert_eq!(p.groups[0].nodes, vec![1, 2]);
        assert_eq!(p.groups[1].nodes, vec![3]);
    }
}
