//! Manager for affiliation secondary indices
//!
//! Keeps two ordered structures in step with the affiliation records:
//! - name -> set of ids, iterated in id order within a name bucket
//! - (coordinate, id), ordered by distance from the origin
//!
//! The flat listings derived from them are cached in [`LazyIndex`]es and
//! invalidated by every mutation.

use super::lazy::LazyIndex;
use crate::graph::{AffiliationId, Coord};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SecondaryIndexManager {
    by_name: BTreeMap<String, BTreeSet<AffiliationId>>,
    by_coord: BTreeSet<(Coord, AffiliationId)>,
    alphabetical: LazyIndex<AffiliationId>,
    distance_increasing: LazyIndex<AffiliationId>,
}

impl SecondaryIndexManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a newly added affiliation
    pub fn insert(&mut self, id: &AffiliationId, name: &str, coord: Coord) {
        self.by_name
            .entry(name.to_string())
            .or_default()
            .insert(id.clone());
        self.by_coord.insert((coord, id.clone()));
        self.invalidate();
    }

    /// Drop an affiliation from both structures outright
    pub fn remove(&mut self, id: &AffiliationId, name: &str, coord: Coord) {
        if let Some(ids) = self.by_name.get_mut(name) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_name.remove(name);
            }
        }
        self.by_coord.remove(&(coord, id.clone()));
        self.invalidate();
    }

    /// Move an affiliation to a new coordinate
    pub fn change_coord(&mut self, id: &AffiliationId, old: Coord, new: Coord) {
        self.by_coord.remove(&(old, id.clone()));
        self.by_coord.insert((new, id.clone()));
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.alphabetical.invalidate();
        self.distance_increasing.invalidate();
    }

    pub fn is_dirty(&self) -> bool {
        self.alphabetical.is_dirty() || self.distance_increasing.is_dirty()
    }

    /// Ids ordered by name; ids sharing a name are ordered by id
    pub fn alphabetical(&self) -> &[AffiliationId] {
        self.alphabetical.get_or_rebuild(|| {
            let ids: Vec<AffiliationId> = self.by_name.values().flatten().cloned().collect();
            debug!("Rebuilt alphabetical index ({} entries)", ids.len());
            ids
        })
    }

    /// Ids ordered by distance of their coordinate from the origin
    pub fn distance_increasing(&self) -> &[AffiliationId] {
        self.distance_increasing.get_or_rebuild(|| {
            let ids: Vec<AffiliationId> = self.by_coord.iter().map(|(_, id)| id.clone()).collect();
            debug!("Rebuilt distance index ({} entries)", ids.len());
            ids
        })
    }

    /// Affiliation located exactly at `coord`.
    ///
    /// If several affiliations share the coordinate, the smallest id wins.
    pub fn find_by_coord(&self, coord: Coord) -> Option<&AffiliationId> {
        self.by_coord
            .range((Bound::Included((coord, AffiliationId::default())), Bound::Unbounded))
            .next()
            .filter(|(c, _)| *c == coord)
            .map(|(_, id)| id)
    }

    pub fn clear(&mut self) {
        self.by_name.clear();
        self.by_coord.clear();
        self.invalidate();
    }
}

/// The `k` candidates closest to `origin` by squared Euclidean distance, nearest first.
///
/// Candidates at equal distance keep the order in which they were encountered.
pub fn nearest<'a, I>(candidates: I, origin: Coord, k: usize) -> Vec<AffiliationId>
where
    I: IntoIterator<Item = (&'a AffiliationId, Coord)>,
{
    let mut best: Vec<(i128, &AffiliationId)> = Vec::new();

    for (id, coord) in candidates {
        let dist = origin.distance_sq(&coord);
        let pos = best.partition_point(|&(d, _)| d <= dist);
        if pos < k {
            best.insert(pos, (dist, id));
            best.truncate(k);
        }
    }

    best.into_iter().map(|(_, id)| id.clone()).collect()
}
