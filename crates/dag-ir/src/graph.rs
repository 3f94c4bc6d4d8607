// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Directed graph of opaque node identifiers, stored as an index arena.
//!
//! # Type-State Pattern
//!
//! The graph transitions through states enforced at compile time:
//!
//! ```text
//! DagGraph<N, Loaded>     — closed universe, no duplicate keys or edges.
//!       │  .validate()
//!       ▼
//! DagGraph<N, Validated>  — non-empty and acyclic, ready for partitioning.
//! ```
//!
//! The partition planner only accepts `DagGraph<N, Validated>`, so it can
//! never be handed a cyclic graph. The marker types are `PhantomData` (ZST).
//!
//! # Layout
//!
//! Nodes keep the order in which they were supplied. Each node owns a
//! contiguous index `0..len()`, and adjacency lists hold indices rather than
//! identifiers, so downstream algorithms never hash on the hot path.

use crate::cycle;
use crate::GraphError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

// ── Node identifiers ───────────────────────────────────────────────

/// Requirements on a node identifier: comparable, hashable, printable.
///
/// Blanket-implemented; integers and strings qualify out of the box.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeId for T {}

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: adjacency is well-formed but acyclicity is unchecked.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: graph is non-empty and acyclic.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for graph states.
pub trait GraphState: fmt::Debug + Clone {}
impl GraphState for Loaded {}
impl GraphState for Validated {}

// ── DagGraph ───────────────────────────────────────────────────────

/// A directed graph mapping each node to its ordered outgoing neighbours.
#[derive(Debug, Clone)]
pub struct DagGraph<N, S: GraphState = Loaded> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl<N: NodeId> DagGraph<N, Loaded> {
    /// Builds a graph from `(node, outgoing neighbours)` entries.
    ///
    /// # Errors
    /// [`GraphError::MalformedGraph`] if a node key appears twice, a node
    /// lists the same neighbour twice, or a neighbour is not itself a key.
    pub fn from_adjacency<I, L>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, L)>,
        L: IntoIterator<Item = N>,
    {
        let entries: Vec<(N, Vec<N>)> = entries
            .into_iter()
            .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
            .collect();

        let mut nodes = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for (node, _) in &entries {
            if index.insert(node.clone(), nodes.len()).is_some() {
                return Err(GraphError::MalformedGraph(format!(
                    "node {node:?} is defined more than once"
                )));
            }
            nodes.push(node.clone());
        }

        let mut adjacency = Vec::with_capacity(entries.len());
        for (node, neighbors) in &entries {
            let mut seen = HashSet::with_capacity(neighbors.len());
            let mut targets = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                let &target = index.get(neighbor).ok_or_else(|| {
                    GraphError::MalformedGraph(format!(
                        "node {node:?} references unknown node {neighbor:?}"
                    ))
                })?;
                if !seen.insert(target) {
                    return Err(GraphError::MalformedGraph(format!(
                        "duplicate edge {node:?} -> {neighbor:?}"
                    )));
                }
                targets.push(target);
            }
            adjacency.push(targets);
        }

        Ok(Self {
            nodes,
            index,
            adjacency,
            _state: std::marker::PhantomData,
        })
    }

    /// Validates the graph and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - The graph is non-empty.
    /// - No node can reach itself (self-loops included).
    pub fn validate(self) -> Result<DagGraph<N, Validated>, GraphError> {
        self.check_partitionable()?;
        Ok(DagGraph {
            nodes: self.nodes,
            index: self.index,
            adjacency: self.adjacency,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl<N: NodeId> DagGraph<N, Validated> {
    /// Returns a summary string describing the graph.
    pub fn summary(&self) -> String {
        let mut has_incoming = vec![false; self.len()];
        for &t in self.adjacency.iter().flatten() {
            has_incoming[t] = true;
        }
        let sources = has_incoming.iter().filter(|&&h| !h).count();
        let sinks = self.adjacency.iter().filter(|a| a.is_empty()).count();
        format!(
            "DAG: {} nodes, {} edges, {} sources, {} sinks",
            self.len(),
            self.num_edges(),
            sources,
            sinks,
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<N: NodeId, S: GraphState> DagGraph<N, S> {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Node identifiers in insertion order; position equals node index.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Identifier of the node at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn node(&self, index: usize) -> &N {
        &self.nodes[index]
    }

    /// Index of `node`, if present.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Outgoing neighbour indices of the node at `index`, in adjacency order.
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Outgoing neighbours of `node`, or `None` if it is not in the graph.
    pub fn neighbors<'a>(&'a self, node: &N) -> Option<impl Iterator<Item = &'a N> + 'a> {
        let i = self.index_of(node)?;
        Some(self.adjacency[i].iter().map(move |&t| &self.nodes[t]))
    }

    /// Returns `true` if the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.adjacency[f].contains(&t),
            _ => false,
        }
    }

    /// Iterates every directed edge as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(f, targets)| {
            targets.iter().map(move |&t| (&self.nodes[f], &self.nodes[t]))
        })
    }

    /// Copies the graph back out as `(node, neighbours)` entries.
    pub fn to_adjacency(&self) -> Vec<(N, Vec<N>)> {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .map(|(n, targets)| {
                (
                    n.clone(),
                    targets.iter().map(|&t| self.nodes[t].clone()).collect(),
                )
            })
            .collect()
    }

    /// Returns `true` if no node can reach itself.
    pub fn is_acyclic(&self) -> bool {
        cycle::find_cycle_indices(&self.adjacency).is_none()
    }

    /// Returns one closed path `a -> ... -> a` if the graph has a cycle.
    pub fn find_cycle(&self) -> Option<Vec<N>> {
        cycle::find_cycle_indices(&self.adjacency)
            .map(|path| path.into_iter().map(|i| self.nodes[i].clone()).collect())
    }

    /// Validates a copy of this graph without consuming it.
    pub fn to_validated(&self) -> Result<DagGraph<N, Validated>, GraphError> {
        self.check_partitionable()?;
        Ok(DagGraph {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            adjacency: self.adjacency.clone(),
            _state: std::marker::PhantomData,
        })
    }

    fn check_partitionable(&self) -> Result<(), GraphError> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if let Some(path) = self.find_cycle() {
            let path = path
                .iter()
                .map(|n| format!("{n:?}"))
                .collect::<Vec<_>>()
                .join(" -> ");
            tracing::debug!("cycle found during validation: {path}");
            return Err(GraphError::CyclicGraph { path });
        }
        Ok(())
    }
}

impl<N: NodeId, S: GraphState> fmt::Display for DagGraph<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DagGraph ({} nodes, {} edges):", self.len(), self.num_edges())?;
        for (node, targets) in self.nodes.iter().zip(&self.adjacency) {
            let targets: Vec<&N> = targets.iter().map(|&t| &self.nodes[t]).collect();
            writeln!(f, "  {node:?} -> {targets:?}")?;
        }
        Ok(())
    }
}
