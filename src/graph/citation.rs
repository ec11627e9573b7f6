//! Citation hierarchy operations
//!
//! Publications form a forest through their `parent`/`children` fields. Every
//! link goes through [`BibliographyStore::try_add_reference`], which keeps both
//! sides consistent, moves a re-parented child out of its old parent's list and
//! refuses links that would close a cycle. Walks are iterative.

use super::store::{accepted, BibliographyStore, StoreError, StoreResult};
use super::types::{PublicationId, NO_PUBLICATION};
use rustc_hash::FxHashSet;
use std::iter;
use tracing::debug;

impl BibliographyStore {
    /// Make `parent` the parent of `child`
    pub fn try_add_reference(&mut self, child: PublicationId, parent: PublicationId) -> StoreResult<()> {
        if !self.publications.contains_key(&child) {
            return Err(StoreError::PublicationNotFound(child));
        }
        if !self.publications.contains_key(&parent) {
            return Err(StoreError::PublicationNotFound(parent));
        }
        if child == parent {
            return Err(StoreError::SelfReference(child));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(StoreError::ReferenceCycle { child, parent });
        }

        let previous = self.publications.get(&child).and_then(|p| p.parent);
        if previous == Some(parent) {
            return Ok(());
        }
        if let Some(old) = previous.and_then(|p| self.publications.get_mut(&p)) {
            old.remove_child(child);
        }
        if let Some(record) = self.publications.get_mut(&child) {
            record.parent = Some(parent);
        }
        if let Some(record) = self.publications.get_mut(&parent) {
            record.children.push(child);
        }

        debug!("Linked {} under {}", child, parent);
        Ok(())
    }

    pub fn add_reference(&mut self, child: PublicationId, parent: PublicationId) -> bool {
        accepted("add_reference", self.try_add_reference(child, parent))
    }

    /// Parent of a publication; `NO_PUBLICATION` for roots and unknown ids
    pub fn get_parent(&self, id: PublicationId) -> PublicationId {
        self.publications
            .get(&id)
            .and_then(|p| p.parent)
            .unwrap_or(NO_PUBLICATION)
    }

    /// Immediate children, or `[NO_PUBLICATION]` if the publication is missing
    pub fn get_direct_children(&self, id: PublicationId) -> Vec<PublicationId> {
        self.publications
            .get(&id)
            .map_or_else(|| vec![NO_PUBLICATION], |p| p.children.clone())
    }

    /// Ancestors from the parent up to the root.
    ///
    /// The walk is bounded by the publication count, so it ends even if a cycle
    /// were ever present.
    fn ancestors(&self, id: PublicationId) -> impl Iterator<Item = PublicationId> + '_ {
        let first = self.publications.get(&id).and_then(|p| p.parent);
        iter::successors(first, move |current| {
            self.publications.get(current).and_then(|p| p.parent)
        })
        .take(self.publications.len())
    }

    /// Ancestors nearest first; empty for a root, `[NO_PUBLICATION]` if missing
    pub fn get_ancestor_chain(&self, id: PublicationId) -> Vec<PublicationId> {
        if !self.publications.contains_key(&id) {
            return vec![NO_PUBLICATION];
        }
        self.ancestors(id).collect()
    }

    /// Every publication below `id` in post-order, excluding `id` itself;
    /// `[NO_PUBLICATION]` if missing
    pub fn get_all_descendants(&self, id: PublicationId) -> Vec<PublicationId> {
        if !self.publications.contains_key(&id) {
            return vec![NO_PUBLICATION];
        }

        let mut result = Vec::new();
        // (publication, position of the next child to descend into)
        let mut stack: Vec<(PublicationId, usize)> = vec![(id, 0)];

        while let Some(&(node, cursor)) = stack.last() {
            let children = self
                .publications
                .get(&node)
                .map(|p| p.children.as_slice())
                .unwrap_or_default();

            if let Some(&child) = children.get(cursor) {
                let top = stack.len() - 1;
                stack[top].1 += 1;
                stack.push((child, 0));
            } else {
                stack.pop();
                if !stack.is_empty() {
                    result.push(node);
                }
            }
        }

        result
    }

    /// Closest publication that is `id1` or one of its ancestors and also `id2` or
    /// one of its ancestors; `NO_PUBLICATION` if either is missing or the two sit
    /// in different trees
    pub fn get_closest_common_ancestor(&self, id1: PublicationId, id2: PublicationId) -> PublicationId {
        if !self.publications.contains_key(&id1) || !self.publications.contains_key(&id2) {
            return NO_PUBLICATION;
        }

        let lineage: FxHashSet<PublicationId> = iter::once(id1).chain(self.ancestors(id1)).collect();
        iter::once(id2)
            .chain(self.ancestors(id2))
            .find(|candidate| lineage.contains(candidate))
            .unwrap_or(NO_PUBLICATION)
    }
}
