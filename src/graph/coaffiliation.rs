//! Weighted co-affiliation graph
//!
//! Undirected, simple graph over affiliation identifiers. An edge's weight counts
//! the linking events in which both endpoints ended up on the same publication.
//! Each weight is stored once, under the lexicographically smaller endpoint;
//! per-node neighbor sets only record adjacency.
//!
//! Removing a publication does not decrement weights: a weight is a historical
//! co-authorship count, not the number of publications currently shared.

use super::types::{AffiliationId, Connection, Weight};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct CoAffiliationGraph {
    /// Neighbor sets, in first-connection order
    adjacency: IndexMap<AffiliationId, IndexSet<AffiliationId>>,

    /// Canonical weights: smaller id -> (bigger id -> weight)
    weights: BTreeMap<AffiliationId, BTreeMap<AffiliationId, Weight>>,
}

impl CoAffiliationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node so it appears in the graph even while isolated
    pub fn add_node(&mut self, id: &AffiliationId) {
        if !self.adjacency.contains_key(id.as_str()) {
            self.adjacency.insert(id.clone(), IndexSet::new());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Increment the weight of the edge between `a` and `b`, creating it at 1.
    ///
    /// Returns the new weight, or `None` for a self-loop.
    pub fn connect(&mut self, a: &AffiliationId, b: &AffiliationId) -> Option<Weight> {
        if a == b {
            return None;
        }
        let (small, big) = if a < b { (a, b) } else { (b, a) };

        let weight = self
            .weights
            .entry(small.clone())
            .or_default()
            .entry(big.clone())
            .or_insert(0);
        *weight += 1;
        let weight = *weight;

        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b.clone()).or_default().insert(a.clone());

        trace!("Connected {} <-> {} (weight {})", a, b, weight);
        Some(weight)
    }

    /// Connect `joining` to every member of `existing`, once per distinct pair
    pub fn connect_to_all<'a, I>(&mut self, joining: &AffiliationId, existing: I)
    where
        I: IntoIterator<Item = &'a AffiliationId>,
    {
        let mut seen = IndexSet::new();
        for other in existing {
            if other != joining && seen.insert(other) {
                self.connect(joining, other);
            }
        }
    }

    /// Connect every unordered pair of `members`, once per distinct pair
    pub fn connect_all(&mut self, members: &[AffiliationId]) {
        let distinct: IndexSet<&AffiliationId> = members.iter().collect();
        for (i, a) in distinct.iter().enumerate() {
            for b in distinct.iter().skip(i + 1) {
                self.connect(a, b);
            }
        }
    }

    /// Weight of the edge between `a` and `b`, if any
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        let (small, big) = if a < b { (a, b) } else { (b, a) };
        self.weights.get(small)?.get(big).copied()
    }

    /// Neighbors of a node, in first-connection order
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &AffiliationId> + '_ {
        self.adjacency.get(id).into_iter().flatten()
    }

    /// Every edge touching `id`, reported as `(id, neighbor, weight)`
    pub fn connections_of(&self, id: &str) -> Vec<Connection> {
        let Some((node, neighbors)) = self.adjacency.get_key_value(id) else {
            return Vec::new();
        };
        neighbors
            .iter()
            .filter_map(|neighbor| {
                self.weight(node.as_str(), neighbor.as_str())
                    .map(|w| Connection::new(node.clone(), neighbor.clone(), w))
            })
            .collect()
    }

    /// Every edge in the graph, each reported once with the smaller id first
    pub fn all_connections(&self) -> Vec<Connection> {
        self.weights
            .iter()
            .flat_map(|(small, row)| {
                row.iter()
                    .map(move |(big, &w)| Connection::new(small.clone(), big.clone(), w))
            })
            .collect()
    }

    /// Strike a node and all of its edges
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(neighbors) = self.adjacency.shift_remove(id) else {
            return false;
        };

        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.shift_remove(id);
            }
            let (small, big) = if id < neighbor.as_str() {
                (id, neighbor.as_str())
            } else {
                (neighbor.as_str(), id)
            };
            if let Some(row) = self.weights.get_mut(small) {
                row.remove(big);
                if row.is_empty() {
                    self.weights.remove(small);
                }
            }
        }

        trace!("Removed {} and {} edges from co-affiliation graph", id, neighbors.len());
        true
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &AffiliationId> + '_ {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.values().map(BTreeMap::len).sum()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.weights.clear();
    }
}
