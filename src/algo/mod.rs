//! Graph algorithms module
//!
//! Search routines are implemented in the `citegraph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects the
//! co-affiliation graph into a [`GraphView`] and turns the node sequences the
//! searches return back into [`Connection`](crate::graph::Connection)s.

pub mod pathfinding;

use crate::graph::{AffiliationId, CoAffiliationGraph, Weight};
use citegraph_algorithms::GraphView;
use rustc_hash::FxHashMap;

// Re-export algorithms
pub use citegraph_algorithms::{bfs, dfs, dijkstra, widest_path, PathResult};
pub use pathfinding::RouteCriterion;

/// Build a GraphView from the co-affiliation graph for algorithm execution.
///
/// `edge_length` maps each edge `(from, to, co-authorship weight)` to the value
/// the search will see. It is called once per direction.
pub fn build_view<F>(graph: &CoAffiliationGraph, mut edge_length: F) -> GraphView<AffiliationId>
where
    F: FnMut(&AffiliationId, &AffiliationId, Weight) -> f64,
{
    // 1. Dense indices in registration order
    let index_to_node: Vec<AffiliationId> = graph.nodes().cloned().collect();
    let node_to_index: FxHashMap<&str, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect();

    // 2. Adjacency lists in first-connection order
    let adjacency: Vec<Vec<(usize, f64)>> = index_to_node
        .iter()
        .map(|from| {
            graph
                .neighbors(from.as_str())
                .filter_map(|to| {
                    let to_idx = *node_to_index.get(to.as_str())?;
                    let weight = graph.weight(from.as_str(), to.as_str())?;
                    Some((to_idx, edge_length(from, to, weight)))
                })
                .collect()
        })
        .collect();

    // 3. Pack into CSR
    GraphView::from_adjacency_list(index_to_node, adjacency)
}
