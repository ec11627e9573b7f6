//! In-memory bibliography storage
//!
//! The store owns every affiliation and publication record and is the only place
//! that mutates them, so both directions of each relationship are updated
//! together. The secondary indices and the co-affiliation graph are derived from
//! the records and are updated before every mutating call returns.
//!
//! Lookups of missing ids answer with the sentinels from [`types`](super::types);
//! mutations come in a `try_*` form returning [`StoreResult`] and a plain form
//! returning `bool`.

use super::affiliation::Affiliation;
use super::coaffiliation::CoAffiliationGraph;
use super::publication::Publication;
use super::types::{
    AffiliationId, Connection, Coord, PublicationId, Year, NO_COORD, NO_NAME, NO_PUBLICATION, NO_YEAR,
};
use crate::config::{StoreConfig, MAX_CAPACITY};
use crate::index::{nearest, SecondaryIndexManager};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during store mutations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Affiliation {0} not found")]
    AffiliationNotFound(AffiliationId),

    #[error("Publication {0} not found")]
    PublicationNotFound(PublicationId),

    #[error("Affiliation {0} already exists")]
    AffiliationAlreadyExists(AffiliationId),

    #[error("Publication {0} already exists")]
    PublicationAlreadyExists(PublicationId),

    #[error("Affiliation id {0} is reserved")]
    ReservedAffiliationId(AffiliationId),

    #[error("Publication id {0} is reserved")]
    ReservedPublicationId(PublicationId),

    #[error("Publication {0} cannot reference itself")]
    SelfReference(PublicationId),

    #[error("Making {parent} the parent of {child} would create a reference cycle")]
    ReferenceCycle {
        child: PublicationId,
        parent: PublicationId,
    },

    #[error("Affiliation {affiliation} is already linked to {publication}")]
    AlreadyLinked {
        affiliation: AffiliationId,
        publication: PublicationId,
    },
}

impl StoreError {
    /// Whether the request was malformed rather than naming a missing or duplicate id
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            StoreError::SelfReference(_)
                | StoreError::ReferenceCycle { .. }
                | StoreError::ReservedAffiliationId(_)
                | StoreError::ReservedPublicationId(_)
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Collapse a mutation result into the boolean contract, logging the rejection
pub(super) fn accepted(operation: &str, result: StoreResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) if err.is_structural() => {
            warn!("{} rejected: {}", operation, err);
            false
        }
        Err(err) => {
            debug!("{} rejected: {}", operation, err);
            false
        }
    }
}

/// In-memory affiliation and publication storage
///
/// - affiliations: AffiliationId -> Affiliation, in insertion order
/// - publications: PublicationId -> Publication, in insertion order
/// - indices: name and coordinate orderings over affiliations
/// - graph: co-affiliation edges derived from shared publications
#[derive(Debug)]
pub struct BibliographyStore {
    config: StoreConfig,

    pub(super) affiliations: IndexMap<AffiliationId, Affiliation>,

    pub(super) publications: IndexMap<PublicationId, Publication>,

    indices: SecondaryIndexManager,

    graph: CoAffiliationGraph,
}

impl BibliographyStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        BibliographyStore {
            affiliations: IndexMap::with_capacity(config.affiliation_capacity.min(MAX_CAPACITY)),
            publications: IndexMap::with_capacity(config.publication_capacity.min(MAX_CAPACITY)),
            indices: SecondaryIndexManager::new(),
            graph: CoAffiliationGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Reset every record, index and graph edge
    pub fn clear_all(&mut self) {
        self.affiliations.clear();
        self.publications.clear();
        self.indices.clear();
        self.graph.clear();
        debug!("Cleared store");
    }

    // ============================================================
    // Affiliations
    // ============================================================

    pub fn affiliation_count(&self) -> usize {
        self.affiliations.len()
    }

    /// All affiliation ids in insertion order
    pub fn get_all_affiliations(&self) -> Vec<AffiliationId> {
        self.affiliations.keys().cloned().collect()
    }

    pub fn get_affiliation(&self, id: &str) -> Option<&Affiliation> {
        self.affiliations.get(id)
    }

    pub fn has_affiliation(&self, id: &str) -> bool {
        self.affiliations.contains_key(id)
    }

    pub fn try_add_affiliation(
        &mut self,
        id: impl Into<AffiliationId>,
        name: impl Into<String>,
        coord: Coord,
    ) -> StoreResult<()> {
        let id = id.into();
        if id.is_none() {
            return Err(StoreError::ReservedAffiliationId(id));
        }
        if self.affiliations.contains_key(id.as_str()) {
            return Err(StoreError::AffiliationAlreadyExists(id));
        }

        let affiliation = Affiliation::new(id.clone(), name, coord);
        self.indices.insert(&id, &affiliation.name, coord);
        self.graph.add_node(&id);
        debug!("Added affiliation {} at {}", id, coord);
        self.affiliations.insert(id, affiliation);
        Ok(())
    }

    /// Add an affiliation; false if the id is taken
    pub fn add_affiliation(&mut self, id: impl Into<AffiliationId>, name: impl Into<String>, coord: Coord) -> bool {
        accepted("add_affiliation", self.try_add_affiliation(id, name, coord))
    }

    pub fn get_affiliation_name(&self, id: &str) -> &str {
        self.affiliations.get(id).map_or(NO_NAME, |a| a.name.as_str())
    }

    pub fn get_affiliation_coord(&self, id: &str) -> Coord {
        self.affiliations.get(id).map_or(NO_COORD, |a| a.coord)
    }

    /// Affiliation ids ordered by name
    pub fn get_affiliations_alphabetically(&self) -> &[AffiliationId] {
        self.indices.alphabetical()
    }

    /// Affiliation ids ordered by distance of their coordinate from the origin
    pub fn get_affiliations_distance_increasing(&self) -> &[AffiliationId] {
        self.indices.distance_increasing()
    }

    /// The affiliation at exactly `coord`, or the `NO_AFFILIATION` sentinel
    pub fn find_affiliation_with_coord(&self, coord: Coord) -> AffiliationId {
        self.indices
            .find_by_coord(coord)
            .cloned()
            .unwrap_or_else(AffiliationId::none)
    }

    pub fn try_change_affiliation_coord(&mut self, id: &str, coord: Coord) -> StoreResult<()> {
        let affiliation = self
            .affiliations
            .get_mut(id)
            .ok_or_else(|| StoreError::AffiliationNotFound(id.into()))?;

        let old = std::mem::replace(&mut affiliation.coord, coord);
        self.indices.change_coord(&affiliation.id, old, coord);
        debug!("Moved affiliation {} from {} to {}", id, old, coord);
        Ok(())
    }

    pub fn change_affiliation_coord(&mut self, id: &str, coord: Coord) -> bool {
        accepted("change_affiliation_coord", self.try_change_affiliation_coord(id, coord))
    }

    /// Up to `nearest_limit` affiliations closest to `coord`, nearest first.
    ///
    /// Affiliations at equal distance are reported in insertion order.
    pub fn get_affiliations_closest_to(&self, coord: Coord) -> Vec<AffiliationId> {
        nearest(
            self.affiliations.values().map(|a| (&a.id, a.coord)),
            coord,
            self.config.nearest_limit,
        )
    }

    /// Remove an affiliation, detaching it from its publications and the graph
    pub fn try_remove_affiliation(&mut self, id: &str) -> StoreResult<()> {
        let affiliation = self
            .affiliations
            .shift_remove(id)
            .ok_or_else(|| StoreError::AffiliationNotFound(id.into()))?;

        for publication_id in &affiliation.publications {
            if let Some(publication) = self.publications.get_mut(publication_id) {
                publication.unlink_affiliation(id);
            }
        }
        self.indices.remove(&affiliation.id, &affiliation.name, affiliation.coord);
        self.graph.remove_node(id);

        debug!(
            "Removed affiliation {} (detached from {} publications)",
            id,
            affiliation.publications.len()
        );
        Ok(())
    }

    pub fn remove_affiliation(&mut self, id: &str) -> bool {
        accepted("remove_affiliation", self.try_remove_affiliation(id))
    }

    /// Publications linked to an affiliation, or `[NO_PUBLICATION]` if it is missing
    pub fn get_publications(&self, id: &str) -> Vec<PublicationId> {
        self.affiliations
            .get(id)
            .map_or_else(|| vec![NO_PUBLICATION], |a| a.publications.clone())
    }

    /// `(year, id)` of the affiliation's publications from `year` onwards,
    /// ordered by year then id; `[(NO_YEAR, NO_PUBLICATION)]` if it is missing
    pub fn get_publications_after(&self, id: &str, year: Year) -> Vec<(Year, PublicationId)> {
        let Some(affiliation) = self.affiliations.get(id) else {
            return vec![(NO_YEAR, NO_PUBLICATION)];
        };

        let mut result: Vec<(Year, PublicationId)> = affiliation
            .publications
            .iter()
            .filter_map(|pid| self.publications.get(pid))
            .filter(|p| p.year >= year)
            .map(|p| (p.year, p.id))
            .collect();
        result.sort_unstable();
        result
    }

    // ============================================================
    // Publications
    // ============================================================

    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    /// All publication ids in insertion order
    pub fn all_publications(&self) -> Vec<PublicationId> {
        self.publications.keys().copied().collect()
    }

    pub fn get_publication(&self, id: PublicationId) -> Option<&Publication> {
        self.publications.get(&id)
    }

    pub fn has_publication(&self, id: PublicationId) -> bool {
        self.publications.contains_key(&id)
    }

    /// Add a publication linked to the given affiliations.
    ///
    /// Unknown and repeated affiliation ids are skipped. Every distinct pair of
    /// linked affiliations gains one unit of co-affiliation weight.
    pub fn try_add_publication<I, A>(
        &mut self,
        id: PublicationId,
        title: impl Into<String>,
        year: Year,
        affiliations: I,
    ) -> StoreResult<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<AffiliationId>,
    {
        if id.is_none() {
            return Err(StoreError::ReservedPublicationId(id));
        }
        if self.publications.contains_key(&id) {
            return Err(StoreError::PublicationAlreadyExists(id));
        }

        let mut linked: IndexSet<AffiliationId> = IndexSet::new();
        for affiliation_id in affiliations.into_iter().map(Into::into) {
            match self.affiliations.get_mut(affiliation_id.as_str()) {
                Some(affiliation) => {
                    if linked.insert(affiliation_id) {
                        affiliation.link_publication(id);
                    }
                }
                None => warn!("Skipping unknown affiliation {} for {}", affiliation_id, id),
            }
        }

        let mut publication = Publication::new(id, title, year);
        publication.affiliations = linked.into_iter().collect();
        self.graph.connect_all(&publication.affiliations);

        debug!(
            "Added publication {} with {} affiliations",
            id,
            publication.affiliations.len()
        );
        self.publications.insert(id, publication);
        Ok(())
    }

    pub fn add_publication<I, A>(&mut self, id: PublicationId, title: impl Into<String>, year: Year, affiliations: I) -> bool
    where
        I: IntoIterator<Item = A>,
        A: Into<AffiliationId>,
    {
        accepted("add_publication", self.try_add_publication(id, title, year, affiliations))
    }

    pub fn get_publication_title(&self, id: PublicationId) -> &str {
        self.publications.get(&id).map_or(NO_NAME, |p| p.title.as_str())
    }

    pub fn get_publication_year(&self, id: PublicationId) -> Year {
        self.publications.get(&id).map_or(NO_YEAR, |p| p.year)
    }

    /// Affiliations linked to a publication, or `[NO_AFFILIATION]` if it is missing
    pub fn get_affiliations(&self, id: PublicationId) -> Vec<AffiliationId> {
        self.publications
            .get(&id)
            .map_or_else(|| vec![AffiliationId::none()], |p| p.affiliations.clone())
    }

    /// Link an existing affiliation to an existing publication
    pub fn try_add_affiliation_to_publication(&mut self, affiliation: &str, publication: PublicationId) -> StoreResult<()> {
        let Some(record) = self.publications.get_mut(&publication) else {
            return Err(StoreError::PublicationNotFound(publication));
        };
        let Some(joining) = self.affiliations.get_mut(affiliation) else {
            return Err(StoreError::AffiliationNotFound(affiliation.into()));
        };
        if record.has_affiliation(affiliation) {
            return Err(StoreError::AlreadyLinked {
                affiliation: joining.id.clone(),
                publication,
            });
        }

        self.graph.connect_to_all(&joining.id, record.affiliations.iter());
        joining.link_publication(publication);
        record.affiliations.push(joining.id.clone());

        debug!("Linked affiliation {} to {}", affiliation, publication);
        Ok(())
    }

    pub fn add_affiliation_to_publication(&mut self, affiliation: &str, publication: PublicationId) -> bool {
        accepted(
            "add_affiliation_to_publication",
            self.try_add_affiliation_to_publication(affiliation, publication),
        )
    }

    /// Remove a publication.
    ///
    /// Its affiliations forget it, its children become roots and its parent drops
    /// it from the child list. Co-affiliation weights are left as they are.
    pub fn try_remove_publication(&mut self, id: PublicationId) -> StoreResult<()> {
        let publication = self
            .publications
            .shift_remove(&id)
            .ok_or(StoreError::PublicationNotFound(id))?;

        if let Some(parent) = publication.parent.and_then(|p| self.publications.get_mut(&p)) {
            parent.remove_child(id);
        }
        for child_id in &publication.children {
            if let Some(child) = self.publications.get_mut(child_id) {
                child.parent = None;
            }
        }
        for affiliation_id in &publication.affiliations {
            if let Some(affiliation) = self.affiliations.get_mut(affiliation_id.as_str()) {
                affiliation.unlink_publication(id);
            }
        }

        debug!(
            "Removed publication {} (orphaned {} children)",
            id,
            publication.children.len()
        );
        Ok(())
    }

    pub fn remove_publication(&mut self, id: PublicationId) -> bool {
        accepted("remove_publication", self.try_remove_publication(id))
    }

    // ============================================================
    // Co-affiliation graph
    // ============================================================

    pub fn co_affiliation_graph(&self) -> &CoAffiliationGraph {
        &self.graph
    }

    /// Edges of an affiliation as `(id, neighbor, weight)`; empty if unknown or isolated
    pub fn get_connected_affiliations(&self, id: &str) -> Vec<Connection> {
        self.graph.connections_of(id)
    }

    /// Every co-affiliation edge, each reported once
    pub fn get_all_connections(&self) -> Vec<Connection> {
        self.graph.all_connections()
    }
}

impl Default for BibliographyStore {
    fn default() -> Self {
        Self::new()
    }
}
