use citegraph::{
    AffiliationId, BibliographyStore, Connection, Coord, PublicationId, StoreError, NO_AFFILIATION, NO_COORD,
    NO_NAME, NO_PUBLICATION, NO_YEAR,
};

fn pid(id: u64) -> PublicationId {
    PublicationId::new(id)
}

#[test]
fn test_shared_publications_build_weights() {
    let mut store = BibliographyStore::new();
    assert!(store.add_affiliation("A1", "First", Coord::new(0, 0)));
    assert!(store.add_affiliation("A2", "Second", Coord::new(3, 4)));

    assert!(store.add_publication(pid(1), "P1", 2001, ["A1", "A2"]));
    assert_eq!(store.get_connected_affiliations("A1"), vec![Connection::new("A1", "A2", 1)]);

    assert!(store.add_publication(pid(2), "P2", 2002, ["A1", "A2"]));
    assert_eq!(store.get_connected_affiliations("A1"), vec![Connection::new("A1", "A2", 2)]);
    assert_eq!(store.get_connected_affiliations("A2"), vec![Connection::new("A2", "A1", 2)]);
    assert_eq!(store.get_all_connections(), vec![Connection::new("A1", "A2", 2)]);
}

#[test]
fn test_weight_symmetry_over_mixed_linking() {
    let mut store = BibliographyStore::new();
    for (id, x) in [("A", 0), ("B", 1), ("C", 2)] {
        store.add_affiliation(id, id, Coord::new(x, 0));
    }

    // Two publications created with both, one joined afterwards
    store.add_publication(pid(1), "P1", 2000, ["A", "B", "C"]);
    store.add_publication(pid(2), "P2", 2000, ["B", "A"]);
    store.add_publication(pid(3), "P3", 2000, ["A"]);
    assert!(store.add_affiliation_to_publication("B", pid(3)));

    let graph = store.co_affiliation_graph();
    assert_eq!(graph.weight("A", "B"), Some(3));
    assert_eq!(graph.weight("B", "A"), Some(3));
    assert_eq!(graph.weight("A", "C"), Some(1));
    assert_eq!(graph.weight("C", "B"), Some(1));

    // Linking the same pair again is refused and does not count
    assert_eq!(
        store.try_add_affiliation_to_publication("B", pid(3)),
        Err(StoreError::AlreadyLinked {
            affiliation: AffiliationId::new("B"),
            publication: pid(3),
        })
    );
    assert_eq!(store.co_affiliation_graph().weight("A", "B"), Some(3));
}

#[test]
fn test_citation_chain_scenario() {
    let mut store = BibliographyStore::new();
    for id in 1..=3 {
        store.add_publication(pid(id), format!("P{}", id), 2000 + id as u16, Vec::<&str>::new());
    }
    assert!(store.add_reference(pid(2), pid(1)));
    assert!(store.add_reference(pid(3), pid(2)));

    assert_eq!(store.get_ancestor_chain(pid(3)), vec![pid(2), pid(1)]);
    assert_eq!(store.get_closest_common_ancestor(pid(2), pid(3)), pid(2));
    assert_eq!(store.get_direct_children(pid(1)), vec![pid(2)]);
    assert_eq!(store.get_all_descendants(pid(1)), vec![pid(3), pid(2)]);
}

#[test]
fn test_parent_membership() {
    let mut store = BibliographyStore::new();
    for id in 1..=5 {
        store.add_publication(pid(id), "P", 2000, Vec::<&str>::new());
    }
    let links = [(2, 1), (3, 1), (4, 3), (5, 4)];
    for (child, parent) in links {
        assert!(store.add_reference(pid(child), pid(parent)));
    }
    for (child, parent) in links {
        assert!(store.get_ancestor_chain(pid(child)).contains(&pid(parent)));
        assert!(store.get_direct_children(pid(parent)).contains(&pid(child)));
    }
}

#[test]
fn test_remove_affiliation_everywhere() {
    let mut store = BibliographyStore::new();
    store.add_affiliation("A", "Alpha", Coord::new(1, 1));
    store.add_affiliation("B", "Beta", Coord::new(2, 2));
    store.add_affiliation("C", "Gamma", Coord::new(3, 3));
    store.add_publication(pid(1), "P1", 2000, ["A", "B"]);
    store.add_publication(pid(2), "P2", 2001, ["A", "C"]);

    assert!(store.remove_affiliation("A"));
    assert!(!store.remove_affiliation("A"));

    assert_eq!(store.get_affiliations(pid(1)), vec![AffiliationId::new("B")]);
    assert_eq!(store.get_affiliations(pid(2)), vec![AffiliationId::new("C")]);
    assert!(store.get_connected_affiliations("A").is_empty());
    assert!(store.get_all_connections().is_empty());
    assert!(!store.get_affiliations_alphabetically().iter().any(|id| id == "A"));
    assert!(!store.get_affiliations_distance_increasing().iter().any(|id| id == "A"));
    assert_eq!(store.find_affiliation_with_coord(Coord::new(1, 1)), NO_AFFILIATION);
}

#[test]
fn test_remove_publication_relinks_and_keeps_weights() {
    let mut store = BibliographyStore::new();
    store.add_affiliation("A", "Alpha", Coord::new(0, 0));
    store.add_affiliation("B", "Beta", Coord::new(1, 0));
    for id in 1..=4 {
        store.add_publication(pid(id), "P", 2000, ["A", "B"]);
    }
    store.add_reference(pid(2), pid(1));
    store.add_reference(pid(3), pid(2));
    store.add_reference(pid(4), pid(2));

    assert!(store.remove_publication(pid(2)));

    assert_eq!(store.get_parent(pid(3)), NO_PUBLICATION);
    assert_eq!(store.get_parent(pid(4)), NO_PUBLICATION);
    assert!(store.get_direct_children(pid(1)).is_empty());
    assert_eq!(store.get_publications("A"), vec![pid(1), pid(3), pid(4)]);
    // Historical co-authorship count survives the removal
    assert_eq!(store.co_affiliation_graph().weight("A", "B"), Some(4));
}

#[test]
fn test_missing_ids_answer_with_sentinels() {
    let store = BibliographyStore::new();

    assert_eq!(store.get_affiliation_name("nope"), NO_NAME);
    assert_eq!(store.get_affiliation_coord("nope"), NO_COORD);
    assert_eq!(store.get_publications("nope"), vec![NO_PUBLICATION]);
    assert_eq!(store.get_publications_after("nope", 2000), vec![(NO_YEAR, NO_PUBLICATION)]);
    assert_eq!(store.get_publication_title(pid(1)), NO_NAME);
    assert_eq!(store.get_publication_year(pid(1)), NO_YEAR);
    assert_eq!(store.get_affiliations(pid(1)), vec![AffiliationId::none()]);
    assert_eq!(store.get_direct_children(pid(1)), vec![NO_PUBLICATION]);
    assert_eq!(store.get_ancestor_chain(pid(1)), vec![NO_PUBLICATION]);
    assert_eq!(store.get_all_descendants(pid(1)), vec![NO_PUBLICATION]);
    assert_eq!(store.get_closest_common_ancestor(pid(1), pid(2)), NO_PUBLICATION);
    assert_eq!(store.find_affiliation_with_coord(Coord::new(0, 0)), NO_AFFILIATION);
}

#[test]
fn test_duplicates_rejected_without_mutation() {
    let mut store = BibliographyStore::new();
    assert!(store.add_affiliation("A", "Alpha", Coord::new(0, 0)));
    assert!(!store.add_affiliation("A", "Other", Coord::new(9, 9)));
    assert_eq!(store.get_affiliation_name("A"), "Alpha");
    assert_eq!(store.get_affiliation_coord("A"), Coord::new(0, 0));

    assert!(store.add_publication(pid(1), "First", 2000, ["A"]));
    assert_eq!(
        store.try_add_publication(pid(1), "Again", 2001, ["A"]),
        Err(StoreError::PublicationAlreadyExists(pid(1)))
    );
    assert_eq!(store.get_publication_title(pid(1)), "First");
    assert_eq!(store.get_publications("A"), vec![pid(1)]);
}

#[test]
fn test_publications_after_year() {
    let mut store = BibliographyStore::new();
    store.add_affiliation("A", "Alpha", Coord::new(0, 0));
    store.add_publication(pid(7), "Late", 2020, ["A"]);
    store.add_publication(pid(3), "Early", 2010, ["A"]);
    store.add_publication(pid(5), "Same year", 2020, ["A"]);
    store.add_publication(pid(4), "Middle", 2015, ["A"]);

    assert_eq!(
        store.get_publications_after("A", 2015),
        vec![(2015, pid(4)), (2020, pid(5)), (2020, pid(7))]
    );
    assert!(store.get_publications_after("A", 2021).is_empty());
}

#[test]
fn test_clear_all() {
    let mut store = BibliographyStore::new();
    store.add_affiliation("A", "Alpha", Coord::new(0, 0));
    store.add_affiliation("B", "Beta", Coord::new(1, 0));
    store.add_publication(pid(1), "P", 2000, ["A", "B"]);

    store.clear_all();

    assert_eq!(store.affiliation_count(), 0);
    assert_eq!(store.publication_count(), 0);
    assert!(store.get_affiliations_alphabetically().is_empty());
    assert!(store.get_all_connections().is_empty());
    assert!(store.add_affiliation("A", "Alpha again", Coord::new(0, 0)));
}
