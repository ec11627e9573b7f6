//! Pathfinding algorithms
//!
//! Depth-first reachability, breadth-first fewest-hops, widest (bottleneck) path
//! and Dijkstra over an undirected [`GraphView`].

use super::common::GraphView;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<K> {
    pub source: K,
    pub target: K,
    /// Visited nodes, `source` first and `target` last
    pub path: Vec<K>,
    /// Algorithm-specific cost: hops, bottleneck weight or summed distance
    pub cost: f64,
}

impl<K> PathResult<K> {
    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

fn reconstruct<K: Clone + Eq + Hash>(
    view: &GraphView<K>,
    parent: &[Option<usize>],
    target_idx: usize,
) -> Vec<K> {
    let mut path = Vec::new();
    let mut curr = Some(target_idx);
    while let Some(idx) = curr {
        path.push(view.index_to_node[idx].clone());
        curr = parent[idx];
    }
    path.reverse();
    path
}

fn trivial<K: Clone>(source: &K, cost: f64) -> PathResult<K> {
    PathResult {
        source: source.clone(),
        target: source.clone(),
        path: vec![source.clone()],
        cost,
    }
}

/// Depth-First Search
///
/// Returns some simple path from `source` to `target`. Neighbors are explored in
/// view order; which of several valid paths is returned is not part of the contract.
pub fn dfs<K: Clone + Eq + Hash>(view: &GraphView<K>, source: &K, target: &K) -> Option<PathResult<K>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    if source_idx == target_idx {
        return Some(trivial(source, 0.0));
    }

    let mut visited = vec![false; view.node_count];
    // (node, position of the next neighbor to try)
    let mut stack: Vec<(usize, usize)> = vec![(source_idx, 0)];
    visited[source_idx] = true;

    while let Some(&(node, cursor)) = stack.last() {
        let neighbors = view.neighbors(node);
        if cursor >= neighbors.len() {
            stack.pop();
            continue;
        }
        let next = neighbors[cursor];
        let top = stack.len() - 1;
        stack[top].1 += 1;

        if visited[next] {
            continue;
        }
        visited[next] = true;

        if next == target_idx {
            let mut path: Vec<K> = stack
                .iter()
                .map(|&(idx, _)| view.index_to_node[idx].clone())
                .collect();
            path.push(target.clone());
            return Some(PathResult {
                source: source.clone(),
                target: target.clone(),
                cost: (path.len() - 1) as f64,
                path,
            });
        }
        stack.push((next, 0));
    }

    None
}

/// Breadth-first search that only crosses edges accepted by `admit`
fn bfs_filtered<K, F>(view: &GraphView<K>, source_idx: usize, target_idx: usize, admit: F) -> Option<Vec<K>>
where
    K: Clone + Eq + Hash,
    F: Fn(f64) -> bool,
{
    let mut queue = VecDeque::new();
    let mut visited = vec![false; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            return Some(reconstruct(view, &parent, target_idx));
        }

        for (next_idx, weight) in view.edges(current_idx) {
            if !visited[next_idx] && admit(weight) {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Every reachable node is enqueued at most once, so the search is O(V + E).
pub fn bfs<K: Clone + Eq + Hash>(view: &GraphView<K>, source: &K, target: &K) -> Option<PathResult<K>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let path = bfs_filtered(view, source_idx, target_idx, |_| true)?;
    Some(PathResult {
        source: source.clone(),
        target: target.clone(),
        cost: (path.len() - 1) as f64,
        path,
    })
}

/// State for the priority queues
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Widest Path (maximum bottleneck)
///
/// Finds the largest value `w` such that `source` and `target` are joined by a path
/// whose every edge weighs at least `w`, then returns the fewest-hops path among those.
/// `cost` holds the bottleneck weight; a trivial path has an infinite bottleneck.
pub fn widest_path<K: Clone + Eq + Hash>(view: &GraphView<K>, source: &K, target: &K) -> Option<PathResult<K>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    if source_idx == target_idx {
        return Some(trivial(source, f64::INFINITY));
    }

    let mut width = vec![f64::NEG_INFINITY; view.node_count];
    let mut heap = BinaryHeap::new();

    // Widths are pushed negated so the min-heap ordering of `State` pops the widest first
    width[source_idx] = f64::INFINITY;
    heap.push(State { cost: f64::NEG_INFINITY, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        let current = -cost;
        if current < width[node_idx] {
            continue;
        }
        if node_idx == target_idx {
            break;
        }

        for (next_idx, weight) in view.edges(node_idx) {
            let candidate = current.min(weight);
            if candidate > width[next_idx] {
                width[next_idx] = candidate;
                heap.push(State { cost: -candidate, node_idx: next_idx });
            }
        }
    }

    let bottleneck = width[target_idx];
    if bottleneck == f64::NEG_INFINITY {
        return None;
    }

    let path = bfs_filtered(view, source_idx, target_idx, |weight| weight >= bottleneck)?;
    Some(PathResult {
        source: source.clone(),
        target: target.clone(),
        path,
        cost: bottleneck,
    })
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Edge weights are used as lengths; negative weights are skipped.
pub fn dijkstra<K: Clone + Eq + Hash>(view: &GraphView<K>, source: &K, target: &K) -> Option<PathResult<K>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let mut dist = vec![f64::INFINITY; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if node_idx == target_idx {
            return Some(PathResult {
                source: source.clone(),
                target: target.clone(),
                path: reconstruct(view, &parent, target_idx),
                cost,
            });
        }

        if cost > dist[node_idx] {
            continue;
        }

        for (next_idx, weight) in view.edges(node_idx) {
            if weight < 0.0 {
                continue;
            }

            let next_cost = cost + weight;
            if next_cost < dist[next_idx] {
                dist[next_idx] = next_cost;
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    None
}
