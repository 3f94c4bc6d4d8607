// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PartitionStrategy`] trait and strategy implementations.

pub mod greedy;
pub mod singleton;

use crate::{CostBudget, PartitionPlan, PlannerError};
use dag_ir::graph::Validated;
use dag_ir::{Cost, DagGraph, NodeCosts, NodeId};

/// Trait for partition strategies.
///
/// Each strategy takes a validated graph, its node costs and a cost budget,
/// and produces a [`PartitionPlan`] that respects the budget (a node whose
/// own cost exceeds the budget is placed alone).
///
/// Strategies are purely algorithmic, with no I/O, which keeps them easy to
/// unit-test and to property-test.
pub trait PartitionStrategy<N: NodeId, C: Cost>: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Produces a partition plan for the given graph and budget.
    fn plan(
        &self,
        graph: &DagGraph<N, Validated>,
        costs: &NodeCosts<N, C>,
        budget: CostBudget<C>,
    ) -> Result<PartitionPlan<N, C>, PlannerError>;
}
