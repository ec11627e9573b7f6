//! Affiliation record
//!
//! An affiliation is a named organization located at a 2-D coordinate. The
//! publication list is maintained by the store together with the publication's
//! own affiliation list; callers only ever see shared references.

use super::types::{AffiliationId, Coord, PublicationId};
use serde::{Deserialize, Serialize};

/// An affiliation in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Unique identifier for this affiliation
    pub id: AffiliationId,

    /// Display name
    pub name: String,

    /// Location
    pub coord: Coord,

    /// Publications this affiliation contributed to, in linking order
    pub publications: Vec<PublicationId>,
}

impl Affiliation {
    pub fn new(id: impl Into<AffiliationId>, name: impl Into<String>, coord: Coord) -> Self {
        Affiliation {
            id: id.into(),
            name: name.into(),
            coord,
            publications: Vec::new(),
        }
    }

    pub fn has_publication(&self, publication: PublicationId) -> bool {
        self.publications.contains(&publication)
    }

    pub(crate) fn link_publication(&mut self, publication: PublicationId) {
        if !self.has_publication(publication) {
            self.publications.push(publication);
        }
    }

    /// Returns whether the publication was linked
    pub(crate) fn unlink_publication(&mut self, publication: PublicationId) -> bool {
        let before = self.publications.len();
        self.publications.retain(|&p| p != publication);
        self.publications.len() != before
    }
}
