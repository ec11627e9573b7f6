use citegraph::{BibliographyStore, Coord, PublicationId};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Affiliations on a grid, each publication shared by a run of neighbours
fn populated_store(size: usize) -> BibliographyStore {
    let mut store = BibliographyStore::new();
    let side = (size as f64).sqrt().ceil() as i32;
    for i in 0..size {
        let i = i as i32;
        store.add_affiliation(format!("A{}", i), format!("Affiliation {}", i), Coord::new(i % side, i / side));
    }
    for p in 0..size {
        let members: Vec<String> = (0..3).map(|k| format!("A{}", (p + k * 7) % size)).collect();
        store.add_publication(PublicationId::new(p as u64), format!("P{}", p), 2000 + (p % 20) as u16, members);
    }
    store
}

/// Benchmark affiliation insertion throughput
fn bench_affiliation_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("affiliation_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = BibliographyStore::new();
                for i in 0..size {
                    store.add_affiliation(format!("A{}", i), "Affiliation", Coord::new(i as i32, -(i as i32)));
                }
                store
            });
        });
    }
    group.finish();
}

/// Benchmark lazy index rebuild after a single mutation
fn bench_index_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_rebuild");

    for size in [100, 1000, 10_000].iter() {
        let mut store = populated_store(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut flip = 0;
            b.iter(|| {
                flip = 1 - flip;
                store.change_affiliation_coord("A0", Coord::new(flip, flip));
                black_box(store.get_affiliations_distance_increasing().len())
            });
        });
    }
    group.finish();
}

/// Benchmark cached listing reads
fn bench_cached_listing(c: &mut Criterion) {
    let store = populated_store(10_000);
    let _ = store.get_affiliations_alphabetically();

    c.bench_function("cached_alphabetical_10k", |b| {
        b.iter(|| black_box(store.get_affiliations_alphabetically().len()))
    });
}

/// Benchmark nearest-affiliation scan
fn bench_nearest(c: &mut Criterion) {
    let store = populated_store(10_000);
    c.bench_function("nearest_10k", |b| {
        b.iter(|| store.get_affiliations_closest_to(black_box(Coord::new(42, 17))))
    });
}

/// Benchmark route queries over the co-affiliation graph
fn bench_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("routes");
    let store = populated_store(1000);

    group.bench_function("fewest_hops", |b| {
        b.iter(|| store.get_path_with_least_affiliations(black_box("A0"), black_box("A999")))
    });
    group.bench_function("least_friction", |b| {
        b.iter(|| store.get_path_of_least_friction(black_box("A0"), black_box("A999")))
    });
    group.bench_function("shortest", |b| {
        b.iter(|| store.get_shortest_path(black_box("A0"), black_box("A999")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_affiliation_insertion,
    bench_index_rebuild,
    bench_cached_listing,
    bench_nearest,
    bench_routes
);
criterion_main!(benches);
