mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use listing_rtree::{BoundsPolicy, IndexOptions, SpatialIndex, DEFAULT_EXTENT};
use utils::get_random_listings;

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for &n in [1_000, 10_000].iter() {
        let listings = get_random_listings(DEFAULT_EXTENT, n, 17);
        for &bounds in [BoundsPolicy::Fixed, BoundsPolicy::Grow].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("spatial_index_{:?}", bounds), n),
                &listings,
                |b, listings| {
                    b.iter(|| {
                        let mut index =
                            SpatialIndex::with_options(IndexOptions::default().with_bounds(bounds));
                        for listing in listings {
                            index.insert(listing.clone());
                        }
                        index
                    })
                },
            );
        }
        group.bench_with_input(BenchmarkId::new("build_rstar", n), &listings, |b, listings| {
            b.iter(|| utils::other_impls::build_rstar(listings))
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
