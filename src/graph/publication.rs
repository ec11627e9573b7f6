//! Publication record
//!
//! A publication is a titled, dated work linked to affiliations and placed in the
//! citation hierarchy through its `parent` and `children` fields.

use super::types::{AffiliationId, PublicationId, Year};
use serde::{Deserialize, Serialize};

/// A publication in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique identifier for this publication
    pub id: PublicationId,

    /// Title
    pub title: String,

    /// Publication year
    pub year: Year,

    /// Linked affiliations, in linking order
    pub affiliations: Vec<AffiliationId>,

    /// Parent in the citation hierarchy (`None` for roots)
    pub parent: Option<PublicationId>,

    /// Direct children in the citation hierarchy, in linking order
    pub children: Vec<PublicationId>,
}

impl Publication {
    pub fn new(id: PublicationId, title: impl Into<String>, year: Year) -> Self {
        Publication {
            id,
            title: title.into(),
            year,
            affiliations: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_affiliation(&self, affiliation: &str) -> bool {
        self.affiliations.iter().any(|a| a.as_str() == affiliation)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn unlink_affiliation(&mut self, affiliation: &str) -> bool {
        let before = self.affiliations.len();
        self.affiliations.retain(|a| a.as_str() != affiliation);
        self.affiliations.len() != before
    }

    pub(crate) fn remove_child(&mut self, child: PublicationId) {
        self.children.retain(|&c| c != child);
    }
}
