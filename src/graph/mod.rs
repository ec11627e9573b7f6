//! Core bibliography data model
//!
//! This module implements the entity store and its derived structures:
//! - Affiliations located at 2-D coordinates
//! - Publications linked to affiliations and arranged in a citation hierarchy
//! - A weighted, undirected co-affiliation graph derived from shared publications

pub mod affiliation;
pub mod citation;
pub mod coaffiliation;
pub mod publication;
pub mod store;
pub mod types;

// Re-export main types
pub use affiliation::Affiliation;
pub use coaffiliation::CoAffiliationGraph;
pub use publication::Publication;
pub use store::{BibliographyStore, StoreError, StoreResult};
pub use types::{
    AffiliationId, Connection, Coord, Distance, Path, PathWithDist, PublicationId, Weight, Year, NO_AFFILIATION,
    NO_COORD, NO_DISTANCE, NO_NAME, NO_PUBLICATION, NO_WEIGHT, NO_YEAR,
};
