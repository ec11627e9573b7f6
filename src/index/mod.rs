//! Secondary indices over affiliations
//!
//! Name-ordered and coordinate-ordered views that are kept in step with the
//! affiliation records and materialized lazily.

pub mod lazy;
pub mod manager;

pub use lazy::LazyIndex;
pub use manager::{nearest, SecondaryIndexManager};
