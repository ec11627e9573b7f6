use anyhow::{Context, Result};
use citegraph::{BibliographyStore, Coord, PublicationId, RouteCriterion, StoreConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    println!("Citegraph v{}", citegraph::version());
    println!("==========================================");
    println!();

    let config = load_config()?;
    let mut store = BibliographyStore::with_config(config);

    // Demo 1: Affiliations and indices
    demo_affiliations(&mut store);

    // Demo 2: Citation hierarchy
    demo_citations(&mut store);

    // Demo 3: Co-affiliation graph and routes
    demo_routes(&store)?;

    Ok(())
}

/// Configuration from the YAML file named by the first argument, or defaults
fn load_config() -> Result<StoreConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(StoreConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    StoreConfig::from_yaml_str(&text).with_context(|| format!("parsing {}", path))
}

fn demo_affiliations(store: &mut BibliographyStore) {
    println!("=== Demo 1: Affiliations ===");

    let sites = [
        ("TUNI", "Tampere University", Coord::new(3, 4)),
        ("AALTO", "Aalto University", Coord::new(0, 0)),
        ("OULU", "University of Oulu", Coord::new(2, 40)),
        ("UH", "University of Helsinki", Coord::new(1, 1)),
        ("JYU", "University of Jyvaskyla", Coord::new(4, 12)),
    ];
    for (id, name, coord) in sites {
        if store.add_affiliation(id, name, coord) {
            println!("✓ Added {} {} at {}", id, name, coord);
        }
    }

    println!("\nAlphabetical:");
    for id in store.get_affiliations_alphabetically() {
        println!("  {:<6} {}", id, store.get_affiliation_name(id.as_str()));
    }

    println!("\nBy distance from origin:");
    for id in store.get_affiliations_distance_increasing() {
        println!("  {:<6} {}", id, store.get_affiliation_coord(id.as_str()));
    }

    let probe = Coord::new(3, 3);
    println!("\nClosest to {}: {:?}", probe, store.get_affiliations_closest_to(probe));
    println!();
}

fn demo_citations(store: &mut BibliographyStore) {
    println!("=== Demo 2: Citation Hierarchy ===");

    let papers: [(u64, &str, u16, &[&str]); 6] = [
        (1, "Graph stores", 2015, &["AALTO", "TUNI"]),
        (2, "Lazy indices", 2017, &["TUNI", "UH"]),
        (3, "Citation forests", 2019, &["UH", "JYU"]),
        (4, "Co-affiliation weights", 2018, &["AALTO", "TUNI", "OULU"]),
        (5, "Bottleneck routes", 2021, &["OULU", "JYU"]),
        (6, "Survey", 2022, &["AALTO"]),
    ];
    for (id, title, year, affiliations) in papers {
        store.add_publication(PublicationId::new(id), title, year, affiliations.iter().copied());
    }
    store.add_affiliation_to_publication("UH", PublicationId::new(6));

    for (child, parent) in [(2, 1), (3, 2), (4, 1), (5, 4)] {
        store.add_reference(PublicationId::new(child), PublicationId::new(parent));
    }
    // Closing a cycle is refused
    let refused = !store.add_reference(PublicationId::new(1), PublicationId::new(3));
    println!("✓ Cycle 1 -> 3 refused: {}", refused);

    let leaf = PublicationId::new(3);
    println!("Ancestors of {}: {:?}", leaf, store.get_ancestor_chain(leaf));
    println!(
        "Descendants of {}: {:?}",
        PublicationId::new(1),
        store.get_all_descendants(PublicationId::new(1))
    );
    println!(
        "Closest common ancestor of 3 and 5: {}",
        store.get_closest_common_ancestor(PublicationId::new(3), PublicationId::new(5))
    );
    println!("TUNI since 2017: {:?}", store.get_publications_after("TUNI", 2017));
    println!();
}

fn demo_routes(store: &BibliographyStore) -> Result<()> {
    println!("=== Demo 3: Co-affiliation Routes ===");

    for connection in store.get_all_connections() {
        println!("  {}", connection);
    }

    for criterion in [
        RouteCriterion::Any,
        RouteCriterion::FewestHops,
        RouteCriterion::LeastFriction,
        RouteCriterion::ShortestDistance,
    ] {
        let route = store.find_route(criterion, "AALTO", "JYU");
        println!("\n{}:", serde_json::to_string(&criterion)?);
        println!("{}", serde_json::to_string_pretty(&route)?);
    }

    Ok(())
}
