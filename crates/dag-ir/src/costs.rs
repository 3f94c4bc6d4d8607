// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-node cost mapping.
//!
//! Costs are strictly positive. Integer and floating-point cost types are
//! supported through the [`Cost`] trait.

use crate::graph::{DagGraph, GraphState, NodeId};
use crate::GraphError;
use std::collections::HashMap;
use std::fmt;

/// Numeric type usable as a node cost or budget.
pub trait Cost:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// `self + rhs`, or `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `true` if the value is strictly greater than zero (NaN is not).
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    /// Lossy conversion used for ratios in reports.
    fn as_f64(self) -> f64;
}

macro_rules! impl_cost_int {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_cost_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Cost for f32 {
    const ZERO: Self = 0.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Cost for f64 {
    const ZERO: Self = 0.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// Mapping from node identifier to its positive cost.
///
/// # Example
/// ```
/// use dag_ir::NodeCosts;
///
/// let costs = NodeCosts::new([(1, 4), (2, 1)]).unwrap();
/// assert_eq!(costs.cost_of(&1).unwrap(), 4);
/// assert!(costs.cost_of(&3).is_err());
/// assert!(NodeCosts::new([(1, 0)]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NodeCosts<N, C> {
    costs: HashMap<N, C>,
}

impl<N: NodeId, C: Cost> NodeCosts<N, C> {
    /// Builds the mapping, rejecting non-positive and duplicated entries.
    pub fn new<I>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, C)>,
    {
        let mut costs = HashMap::new();
        for (node, cost) in entries {
            if !cost.is_positive() {
                return Err(GraphError::InvalidCost {
                    node: format!("{node:?}"),
                    detail: format!("cost must be positive, got {cost}"),
                });
            }
            if costs.contains_key(&node) {
                return Err(GraphError::InvalidCost {
                    node: format!("{node:?}"),
                    detail: "cost defined more than once".into(),
                });
            }
            costs.insert(node, cost);
        }
        Ok(Self { costs })
    }

    /// Returns the cost of `node`.
    ///
    /// # Errors
    /// [`GraphError::MissingCost`] if the node has no entry.
    pub fn cost_of(&self, node: &N) -> Result<C, GraphError> {
        self.costs
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::MissingCost {
                node: format!("{node:?}"),
            })
    }

    pub fn get(&self, node: &N) -> Option<C> {
        self.costs.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Sum of costs over `nodes`.
    ///
    /// # Errors
    /// [`GraphError::MissingCost`] for the first node without a cost,
    /// [`GraphError::CostOverflow`] if the total does not fit in `C`.
    pub fn sum<'a, I>(&self, nodes: I) -> Result<C, GraphError>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        nodes.into_iter().try_fold(C::ZERO, |acc, node| {
            acc.checked_add(self.cost_of(node)?)
                .ok_or_else(|| GraphError::CostOverflow {
                    node: format!("{node:?}"),
                })
        })
    }

    /// Looks up the cost of every graph node, indexed like the graph.
    pub fn resolve<S: GraphState>(&self, graph: &DagGraph<N, S>) -> Result<Vec<C>, GraphError> {
        graph.nodes().iter().map(|n| self.cost_of(n)).collect()
    }

    /// Largest single-node cost among the graph's nodes.
    pub fn max_over<S: GraphState>(&self, graph: &DagGraph<N, S>) -> Result<C, GraphError> {
        let mut max = C::ZERO;
        for cost in self.resolve(graph)? {
            if cost > max {
                max = cost;
            }
        }
        Ok(max)
    }
}
