// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy expansion of a single sub-graph from its seed.
//!
//! Each [`Expansion::step`] looks at the frontier of the current sub-graph
//! (edges from a member to an active non-member), picks the least-connected
//! target that has not been evaluated yet, and either annexes it or rejects
//! it if the budget would overflow. A rejected node stays marked as visited
//! for the rest of this expansion and is never offered again.
//!
//! Link counts come from a snapshot taken when the expansion starts; they are
//! not refreshed as members join.
//!
//! ```text
//!   seed ──► step ──► Annexed ──┐
//!             ▲    └► Rejected ─┤
//!             └─────────────────┘
//!                  └► Complete (no candidate left, or budget reached)
//! ```

use crate::working::{NodeLinks, WorkingGraph};
use crate::CostBudget;
use dag_ir::{Cost, NodeId};
use std::collections::HashSet;

/// A sub-graph under construction together with the candidates already
/// evaluated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion<C> {
    members: Vec<usize>,
    visited: HashSet<usize>,
    cost: C,
}

/// Outcome of one expansion step. Every variant hands the state back.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<C> {
    /// A candidate joined the sub-graph; more may follow.
    Annexed(Expansion<C>),
    /// A candidate would have overflowed the budget and was skipped.
    Rejected(Expansion<C>),
    /// No unvisited candidate is left, or the budget is used up.
    Complete(Expansion<C>),
}

/// Read-only inputs shared by every step of one expansion.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionContext<'a, 'g, N, C> {
    /// The remaining graph the sub-graph grows in.
    pub graph: &'a WorkingGraph<'g, N>,
    /// Link counts taken when the expansion started.
    pub links: &'a NodeLinks,
    /// Cost of each node, indexed like the graph.
    pub unit_costs: &'a [C],
    pub budget: CostBudget<C>,
}

impl<C: Cost> Expansion<C> {
    /// A sub-graph holding only `seed`.
    pub fn seed(seed: usize, cost: C) -> Self {
        Self {
            members: vec![seed],
            visited: HashSet::new(),
            cost,
        }
    }

    /// Member node indices in the order they joined.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Total cost of the members.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// `true` if `index` has already been evaluated as a candidate.
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Evaluates the next candidate and returns the new state.
    pub fn step<N: NodeId>(mut self, ctx: &ExpansionContext<'_, '_, N, C>) -> Step<C> {
        let candidate = ctx
            .graph
            .direct_links(&self.members)
            .into_iter()
            .filter(|(_, to)| !self.visited.contains(to))
            .min_by_key(|&(_, to)| ctx.links.of(to));

        let Some((from, to)) = candidate else {
            return Step::Complete(self);
        };
        self.visited.insert(to);

        let node = ctx.graph.graph().node(to);
        let Some(total) = self
            .cost
            .checked_add(ctx.unit_costs[to])
            .filter(|&t| ctx.budget.admits(t))
        else {
            tracing::debug!(
                "rejected {node:?}: cost {} + {} exceeds budget {}",
                self.cost,
                ctx.unit_costs[to],
                ctx.budget,
            );
            return Step::Rejected(self);
        };

        tracing::debug!(
            "annexed {node:?} via {:?} -> {node:?}, cost now {total}",
            ctx.graph.graph().node(from),
        );
        self.members.push(to);
        self.cost = total;

        if ctx.budget.is_exhausted_by(total) {
            Step::Complete(self)
        } else {
            Step::Annexed(self)
        }
    }

    /// Member identifiers with every edge of the remaining graph that stays
    /// inside the sub-graph, in the shape the plan builder stores.
    pub(crate) fn materialize<N: NodeId>(
        &self,
        graph: &WorkingGraph<'_, N>,
    ) -> (Vec<N>, Vec<Vec<N>>) {
        let inside: HashSet<usize> = self.members.iter().copied().collect();
        let g = graph.graph();
        let nodes = self.members.iter().map(|&i| g.node(i).clone()).collect();
        let adjacency = self
            .members
            .iter()
            .map(|&i| {
                graph
                    .edges_within(i, &inside)
                    .into_iter()
                    .map(|t| g.node(t).clone())
                    .collect()
            })
            .collect();
        (nodes, adjacency)
    }
}

/// Grows a sub-graph from `seed` until no candidate is left or the budget is
/// used up. Link counts are taken once, from `graph` as it is now.
pub fn expand_subgraph<N: NodeId, C: Cost>(
    graph: &WorkingGraph<'_, N>,
    unit_costs: &[C],
    budget: CostBudget<C>,
    seed: usize,
) -> Expansion<C> {
    let links = graph.node_links();
    let ctx = ExpansionContext {
        graph,
        links: &links,
        unit_costs,
        budget,
    };

    let mut expansion = Expansion::seed(seed, unit_costs[seed]);
    loop {
        expansion = match expansion.step(&ctx) {
            Step::Annexed(next) | Step::Rejected(next) => next,
            Step::Complete(done) => return done,
        };
    }
}
