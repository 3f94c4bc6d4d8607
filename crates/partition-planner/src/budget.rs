// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cost budget configuration and parsing.
//!
//! A [`CostBudget`] is the hard ceiling on the total node cost of any
//! sub-graph. It is shared by every sub-graph of a plan.

use crate::PlannerError;
use dag_ir::Cost;
use std::fmt;
use std::str::FromStr;

/// A strictly positive ceiling on the total cost of a sub-graph.
///
/// # Examples
/// ```
/// use partition_planner::CostBudget;
///
/// let b = CostBudget::new(10u64).unwrap();
/// assert!(b.admits(10));
/// assert!(!b.admits(11));
///
/// let b = CostBudget::<f64>::parse(" 2.5 ").unwrap();
/// assert_eq!(b.limit(), 2.5);
/// assert!(CostBudget::new(0u64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct CostBudget<C> {
    limit: C,
}

impl<C: Cost> CostBudget<C> {
    /// Creates a budget, rejecting zero, negative and NaN limits.
    pub fn new(limit: C) -> Result<Self, PlannerError> {
        if !limit.is_positive() {
            return Err(PlannerError::InvalidBudget(format!(
                "budget must be positive, got {limit}"
            )));
        }
        Ok(Self { limit })
    }

    /// Returns the ceiling.
    pub fn limit(&self) -> C {
        self.limit
    }

    /// `true` if a sub-graph of total cost `total` fits.
    pub fn admits(&self, total: C) -> bool {
        total <= self.limit
    }

    /// `true` once `total` has used up the whole budget, so no node of
    /// positive cost can be added any more.
    pub fn is_exhausted_by(&self, total: C) -> bool {
        total >= self.limit
    }

    /// `total` as a fraction of the ceiling.
    pub fn utilisation(&self, total: C) -> f64 {
        total.as_f64() / self.limit.as_f64()
    }
}

impl<C> CostBudget<C>
where
    C: Cost + FromStr,
    C::Err: fmt::Display,
{
    /// Parses a budget from a plain number (`"10"`, `"2.5"`).
    pub fn parse(s: &str) -> Result<Self, PlannerError> {
        let s = s.trim();
        let limit: C = s.parse().map_err(|e| {
            PlannerError::InvalidBudget(format!("cannot parse '{s}' as a cost: {e}"))
        })?;
        Self::new(limit)
    }
}

impl<C: fmt::Display> fmt::Display for CostBudget<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.limit)
    }
}
