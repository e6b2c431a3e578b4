pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use listing_rtree::{Coordinate, Listing, Rectangle};

//// Utility functions

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

pub(crate) fn get_random_rects(
    rect: Rectangle,
    n: usize,
    max_side: f64,
    seed: u64,
) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let corner = Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        );
        let size = Coordinate::new(rng.gen_range(0., max_side), rng.gen_range(0., max_side));
        results.push(Rectangle::new(corner, corner + size));
    }

    results
}

pub(crate) fn get_random_listings(rect: Rectangle, n: usize, seed: u64) -> Vec<Listing> {
    let mut rng = SmallRng::seed_from_u64(seed);
    get_random_rects(rect, n, 2., seed)
        .into_iter()
        .enumerate()
        .map(|(i, bbox)| {
            Listing::new(
                format!("listing-{}", i),
                rng.gen_range(50_000., 1_000_000.),
                rng.gen_range(30., 400.),
                rng.gen_range(0, 6),
                bbox,
            )
        })
        .collect()
}
