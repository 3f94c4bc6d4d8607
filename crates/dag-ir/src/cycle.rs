// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cycle detection over directed adjacency lists.
//!
//! Depth-first search from every unvisited node, tracking which nodes sit on
//! the current DFS path. Reaching a node that is still on the path closes a
//! cycle; reaching a node that was finished earlier is a shared descendant
//! and is fine in a DAG.
//!
//! The traversal keeps an explicit stack of `(node, next neighbour)` frames
//! instead of recursing, so depth is bounded by heap rather than by the
//! thread's call stack. O(V+E).

use crate::graph::{DagGraph, GraphState, NodeId};

/// One DFS frame: the node being explored and the position of the next
/// neighbour to look at.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next: usize,
}

/// Returns `true` if no node of `graph` can reach itself.
///
/// Every component is visited, isolated nodes included. A self-loop counts
/// as a cycle.
///
/// # Example
/// ```
/// use dag_ir::{is_acyclic, DagGraph};
///
/// let dag = DagGraph::from_adjacency([(1, vec![2, 3]), (2, vec![3]), (3, vec![])]).unwrap();
/// assert!(is_acyclic(&dag));
///
/// let looped = DagGraph::from_adjacency([(1, vec![1])]).unwrap();
/// assert!(!is_acyclic(&looped));
/// ```
pub fn is_acyclic<N: NodeId, S: GraphState>(graph: &DagGraph<N, S>) -> bool {
    graph.is_acyclic()
}

/// Returns one closed path `a -> ... -> a` if `graph` contains a cycle.
pub fn find_cycle<N: NodeId, S: GraphState>(graph: &DagGraph<N, S>) -> Option<Vec<N>> {
    graph.find_cycle()
}

/// Index-level search shared by [`is_acyclic`] and [`find_cycle`].
///
/// The returned path starts and ends at the same index.
pub(crate) fn find_cycle_indices(adjacency: &[Vec<usize>]) -> Option<Vec<usize>> {
    let n = adjacency.len();
    let mut visited = vec![false; n];
    // Stack depth of each node currently on the DFS path.
    let mut path_depth: Vec<Option<usize>> = vec![None; n];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        path_depth[root] = Some(0);
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(&neighbor) = adjacency[node].get(frame.next) else {
                // All neighbours explored without reaching the path.
                path_depth[node] = None;
                stack.pop();
                continue;
            };
            frame.next += 1;

            if let Some(depth) = path_depth[neighbor] {
                let mut path: Vec<usize> = stack[depth..].iter().map(|f| f.node).collect();
                path.push(neighbor);
                return Some(path);
            }
            if !visited[neighbor] {
                visited[neighbor] = true;
                path_depth[neighbor] = Some(stack.len());
                stack.push(Frame {
                    node: neighbor,
                    next: 0,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(u32, &[u32])]) -> DagGraph<u32> {
        DagGraph::from_adjacency(entries.iter().map(|(n, adj)| (*n, adj.to_vec()))).unwrap()
    }

    #[test]
    fn test_diamond_is_acyclic() {
        let g = graph(&[(1, &[2, 3]), (2, &[4]), (3, &[4]), (4, &[])]);
        assert!(is_acyclic(&g));
        assert!(find_cycle(&g).is_none());
    }

    #[test]
    fn test_self_loop() {
        let g = graph(&[(1, &[1])]);
        assert!(!is_acyclic(&g));
        assert_eq!(find_cycle(&g), Some(vec![1, 1]));
    }

    #[test]
    fn test_back_edge_to_ancestor() {
        let g = graph(&[(1, &[2]), (2, &[3]), (3, &[4]), (4, &[2])]);
        assert_eq!(find_cycle(&g), Some(vec![2, 3, 4, 2]));
    }

    #[test]
    fn test_shared_descendant_is_not_a_cycle() {
        // 3 is reached from 1 and again from 2 after 1's subtree is finished.
        let g = graph(&[(1, &[3]), (2, &[3]), (3, &[])]);
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_isolated_nodes() {
        let g = graph(&[(1, &[]), (2, &[]), (3, &[])]);
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let g = graph(&[(1, &[2]), (2, &[]), (3, &[4]), (4, &[3])]);
        assert!(!is_acyclic(&g));
        assert_eq!(find_cycle(&g), Some(vec![3, 4, 3]));
    }

    #[test]
    fn test_cycle_reached_from_later_root() {
        // Node 1 is a sink; the cycle only shows up from root 2.
        let g = graph(&[(1, &[]), (2, &[3]), (3, &[2, 1])]);
        assert!(!is_acyclic(&g));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000u32;
        let g = DagGraph::from_adjacency(
            (0..n).map(|i| (i, if i + 1 < n { vec![i + 1] } else { vec![] })),
        )
        .unwrap();
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_deep_chain_closed_at_end() {
        let n = 100_000u32;
        let g = DagGraph::from_adjacency((0..n).map(|i| (i, vec![(i + 1) % n]))).unwrap();
        let path = find_cycle(&g).unwrap();
        assert_eq!(path.len(), n as usize + 1);
        assert_eq!(path.first(), path.last());
    }
}
