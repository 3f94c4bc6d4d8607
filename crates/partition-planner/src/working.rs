// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The shrinking "remaining graph" the greedy planner carves sub-graphs from.
//!
//! Rather than deep-copying the adjacency each time a sub-graph is removed,
//! [`WorkingGraph`] borrows the validated graph and keeps one `active` flag
//! per node. Retired nodes and every edge touching them disappear from all
//! queries (degrees, frontier, adjacency snapshots). The observable result is
//! the same as rebuilding a filtered copy.

use dag_ir::graph::Validated;
use dag_ir::{DagGraph, NodeId};
use std::collections::{BTreeMap, HashSet};

/// A view of a validated graph restricted to the nodes not yet assigned.
#[derive(Debug, Clone)]
pub struct WorkingGraph<'g, N> {
    graph: &'g DagGraph<N, Validated>,
    active: Vec<bool>,
    remaining: usize,
}

impl<'g, N: NodeId> WorkingGraph<'g, N> {
    /// Starts with every node of `graph` active.
    pub fn new(graph: &'g DagGraph<N, Validated>) -> Self {
        Self {
            graph,
            active: vec![true; graph.len()],
            remaining: graph.len(),
        }
    }

    /// The underlying full graph.
    pub fn graph(&self) -> &'g DagGraph<N, Validated> {
        self.graph
    }

    /// Number of nodes not yet retired.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Active node indices in graph order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.active.len()).filter(move |&i| self.active[i])
    }

    /// Active successors of `index`, in adjacency order.
    pub fn active_successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .successors(index)
            .iter()
            .copied()
            .filter(move |&t| self.active[t])
    }

    /// Counts incoming plus outgoing edges of every active node, over the
    /// active part of the graph only.
    pub fn node_links(&self) -> NodeLinks {
        let mut degrees: Vec<Option<usize>> = self
            .active
            .iter()
            .map(|&a| if a { Some(0) } else { None })
            .collect();

        for from in self.active_indices() {
            for to in self.active_successors(from) {
                if let Some(d) = degrees[from].as_mut() {
                    *d += 1;
                }
                if let Some(d) = degrees[to].as_mut() {
                    *d += 1;
                }
            }
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for i in self.active_indices() {
                tracing::trace!("links of {:?} is {:?}", self.graph.node(i), degrees[i]);
            }
        }

        NodeLinks { degrees }
    }

    /// The active node with the fewest links. Ties go to the smallest node
    /// identifier. `None` once every node is retired.
    pub fn least_connected(&self, links: &NodeLinks) -> Option<usize> {
        self.active_indices().min_by(|&a, &b| {
            links
                .of(a)
                .cmp(&links.of(b))
                .then_with(|| self.graph.node(a).cmp(self.graph.node(b)))
        })
    }

    /// Every edge leaving `members` toward an active node outside it.
    ///
    /// Edges are listed in member insertion order, then in each member's
    /// adjacency order.
    pub fn direct_links(&self, members: &[usize]) -> Vec<(usize, usize)> {
        let inside: HashSet<usize> = members.iter().copied().collect();
        let inside = &inside;
        members
            .iter()
            .flat_map(move |&from| {
                self.active_successors(from)
                    .filter(move |to| !inside.contains(to))
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Removes `members` and every edge touching them.
    pub fn retire(&mut self, members: &[usize]) {
        for &i in members {
            if self.active.get(i).copied().unwrap_or(false) {
                self.active[i] = false;
                self.remaining -= 1;
            }
        }
    }

    /// Active outgoing edges of `index` whose target is in `members`.
    pub(crate) fn edges_within(&self, index: usize, members: &HashSet<usize>) -> Vec<usize> {
        self.active_successors(index)
            .filter(|t| members.contains(t))
            .collect()
    }

    /// Copies the active part of the graph out as `(node, neighbours)`.
    pub fn to_adjacency(&self) -> Vec<(N, Vec<N>)> {
        self.active_indices()
            .map(|i| {
                (
                    self.graph.node(i).clone(),
                    self.active_successors(i)
                        .map(|t| self.graph.node(t).clone())
                        .collect(),
                )
            })
            .collect()
    }
}

/// Link counts per node, indexed like the graph. Retired nodes have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLinks {
    degrees: Vec<Option<usize>>,
}

impl NodeLinks {
    /// Link count of the node at `index`, `None` if it was retired.
    pub fn of(&self, index: usize) -> Option<usize> {
        self.degrees.get(index).copied().flatten()
    }

    /// Link counts keyed by node identifier.
    pub fn to_map<N: NodeId>(&self, graph: &DagGraph<N, Validated>) -> BTreeMap<N, usize> {
        self.degrees
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (graph.node(i).clone(), d)))
            .collect()
    }
}

/// Returns a new working graph without `sub_graph_nodes` and without any
/// edge touching them. `graph` itself is left untouched; identifiers that
/// are not active in `graph` are ignored.
pub fn split_subgraph<'g, N: NodeId>(
    graph: &WorkingGraph<'g, N>,
    sub_graph_nodes: &[N],
) -> WorkingGraph<'g, N> {
    let members: Vec<usize> = sub_graph_nodes
        .iter()
        .filter_map(|n| graph.graph().index_of(n))
        .collect();
    let mut split = graph.clone();
    split.retire(&members);
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DagGraph<u32, Validated> {
        DagGraph::from_adjacency([
            (1, vec![2, 3]),
            (2, vec![4]),
            (3, vec![4]),
            (4, vec![]),
        ])
        .unwrap()
        .validate()
        .unwrap()
    }

    #[test]
    fn test_node_links_full_graph() {
        let g = diamond();
        let w = WorkingGraph::new(&g);
        let links = w.node_links().to_map(&g);
        assert_eq!(links, BTreeMap::from([(1, 2), (2, 2), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_node_links_ignore_retired() {
        let g = diamond();
        let mut w = WorkingGraph::new(&g);
        w.retire(&[0]);
        let links = w.node_links();
        assert_eq!(links.of(0), None);
        assert_eq!(links.of(1), Some(1));
        assert_eq!(links.of(3), Some(2));
    }

    #[test]
    fn test_least_connected_tie_breaks_on_identifier() {
        let g = DagGraph::from_adjacency([(5u32, vec![]), (3, vec![]), (9, vec![])])
            .unwrap()
            .validate()
            .unwrap();
        let w = WorkingGraph::new(&g);
        let seed = w.least_connected(&w.node_links()).unwrap();
        assert_eq!(*g.node(seed), 3);
    }

    #[test]
    fn test_least_connected_prefers_low_degree() {
        // 1 -> 2, 1 -> 3, 1 -> 4, 2 -> 3: node 4 has a single link.
        let g = DagGraph::from_adjacency([
            (1u32, vec![2, 3, 4]),
            (2, vec![3]),
            (3, vec![]),
            (4, vec![]),
        ])
        .unwrap()
        .validate()
        .unwrap();
        let w = WorkingGraph::new(&g);
        assert_eq!(*g.node(w.least_connected(&w.node_links()).unwrap()), 4);
    }

    #[test]
    fn test_least_connected_empty() {
        let g = diamond();
        let mut w = WorkingGraph::new(&g);
        w.retire(&[0, 1, 2, 3]);
        assert!(w.is_empty());
        assert!(w.least_connected(&w.node_links()).is_none());
    }

    #[test]
    fn test_direct_links_order() {
        let g = diamond();
        let w = WorkingGraph::new(&g);
        assert_eq!(w.direct_links(&[0]), vec![(0, 1), (0, 2)]);
        // Inside targets are skipped; order follows member insertion.
        assert_eq!(w.direct_links(&[2, 0]), vec![(2, 3), (0, 1)]);
    }

    #[test]
    fn test_direct_links_skip_retired() {
        let g = diamond();
        let mut w = WorkingGraph::new(&g);
        w.retire(&[1]);
        assert_eq!(w.direct_links(&[0]), vec![(0, 2)]);
    }

    #[test]
    fn test_retire_twice_is_harmless() {
        let g = diamond();
        let mut w = WorkingGraph::new(&g);
        w.retire(&[1, 1]);
        w.retire(&[1]);
        assert_eq!(w.remaining(), 3);
    }

    #[test]
    fn test_split_empty_is_identity() {
        let g = diamond();
        let w = WorkingGraph::new(&g);
        let split = split_subgraph(&w, &[]);
        assert_eq!(split.to_adjacency(), g.to_adjacency());
    }

    #[test]
    fn test_split_removes_nodes_and_edges() {
        let g = diamond();
        let w = WorkingGraph::new(&g);
        let split = split_subgraph(&w, &[1, 2]);
        assert_eq!(split.to_adjacency(), vec![(3, vec![4]), (4, vec![])]);
        // Input untouched.
        assert_eq!(w.remaining(), 4);
        assert_eq!(w.to_adjacency(), g.to_adjacency());
    }

    #[test]
    fn test_split_ignores_unknown_nodes() {
        let g = diamond();
        let w = WorkingGraph::new(&g);
        let split = split_subgraph(&w, &[42]);
        assert_eq!(split.remaining(), 4);
    }
}
