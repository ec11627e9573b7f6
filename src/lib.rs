//! Citegraph
//!
//! An in-memory store of research affiliations and the publications they
//! produce, with derived orderings, a citation hierarchy and a weighted
//! co-affiliation graph.
//!
//! # Features
//!
//! - Affiliations keyed by identifier, located at integer 2-D coordinates
//! - Lazily rebuilt alphabetical and distance-from-origin listings
//! - Exact coordinate lookup and nearest-affiliation queries
//! - Publications with year, affiliations and at most one parent publication
//! - Acyclic citation hierarchy: ancestor chains, post-order descendants,
//!   closest common ancestors and removal with re-linking
//! - Co-affiliation graph whose edge weights count shared publications
//! - Route queries: any route, fewest hops, least friction and shortest distance
//!
//! Missing identifiers are reported with sentinel values (see [`graph::types`]);
//! every mutation has a `try_*` form returning [`StoreResult`].
//!
//! ## Example Usage
//!
//! ```rust
//! use citegraph::{BibliographyStore, Connection, Coord, PublicationId};
//!
//! let mut store = BibliographyStore::new();
//! store.add_affiliation("A1", "Aalto", Coord::new(0, 0));
//! store.add_affiliation("A2", "Tampere", Coord::new(3, 4));
//!
//! store.add_publication(PublicationId::new(1), "Graphs", 2020, ["A1", "A2"]);
//! assert_eq!(store.get_connected_affiliations("A1"), vec![Connection::new("A1", "A2", 1)]);
//!
//! store.add_publication(PublicationId::new(2), "More graphs", 2021, ["A1", "A2"]);
//! assert!(store.add_reference(PublicationId::new(2), PublicationId::new(1)));
//! assert_eq!(store.get_ancestor_chain(PublicationId::new(2)), vec![PublicationId::new(1)]);
//!
//! let route = store.get_shortest_path("A1", "A2");
//! assert_eq!(route.len(), 1);
//! assert_eq!(route[0].1, 5);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod index;

// Re-export main types for convenience
pub use graph::{
    Affiliation, AffiliationId, BibliographyStore, CoAffiliationGraph, Connection, Coord, Distance, Path,
    PathWithDist, Publication, PublicationId, StoreError, StoreResult, Weight, Year, NO_AFFILIATION, NO_COORD,
    NO_DISTANCE, NO_NAME, NO_PUBLICATION, NO_WEIGHT, NO_YEAR,
};

pub use algo::RouteCriterion;

pub use config::{ConfigError, ConfigResult, StoreConfig, MAX_CAPACITY, MAX_NEAREST_LIMIT};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
