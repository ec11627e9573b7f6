//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected weighted graph for algorithm execution.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// The view is undirected: every edge appears in the neighbor slices of both endpoints,
/// with the same weight on each side.
#[derive(Debug, Clone)]
pub struct GraphView<K> {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the node key
    pub index_to_node: Vec<K>,
    /// Mapping from node key to dense index
    pub node_to_index: FxHashMap<K, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,
    /// Edge weights: aligned with `targets`
    pub weights: Vec<f64>,
}

impl<K: Clone + Eq + Hash> GraphView<K> {
    /// Number of neighbors of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbors of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Weights of the edges leaving a node, aligned with `neighbors`
    pub fn weights(&self, idx: usize) -> &[f64] {
        &self.weights[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Iterate `(neighbor, weight)` pairs of a node
    pub fn edges(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.neighbors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Dense index of a node key, if the node is part of the view
    pub fn index_of<Q>(&self, node: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_to_index.get(node).copied()
    }

    /// Node key at a dense index
    pub fn node(&self, idx: usize) -> &K {
        &self.index_to_node[idx]
    }

    /// Total number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Build a view from per-node adjacency lists of `(neighbor_index, weight)`.
    ///
    /// The caller supplies both directions of every undirected edge.
    pub fn from_adjacency_list(index_to_node: Vec<K>, adjacency: Vec<Vec<(usize, f64)>>) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.clone(), idx))
            .collect();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for neighbors in adjacency.into_iter().take(node_count) {
            for (target, weight) in neighbors {
                targets.push(target);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }
        // Nodes without an adjacency row are isolated
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_adjacency_list() {
        // a - b (2.0), b - c (1.0)
        let view = GraphView::from_adjacency_list(
            vec!["a", "b", "c"],
            vec![
                vec![(1, 2.0)],
                vec![(0, 2.0), (2, 1.0)],
                vec![(1, 1.0)],
            ],
        );

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.degree(1), 2);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.weights(1), &[2.0, 1.0]);
        assert_eq!(view.index_of("c"), Some(2));
        assert_eq!(view.index_of("z"), None);
        assert_eq!(*view.node(0), "a");
    }

    #[test]
    fn test_isolated_nodes_without_rows() {
        let view: GraphView<u64> = GraphView::from_adjacency_list(vec![1, 2, 3], vec![]);
        assert_eq!(view.offsets, vec![0, 0, 0, 0]);
        assert_eq!(view.degree(2), 0);
        assert_eq!(view.edges(0).count(), 0);
    }
}
