use listing_rtree::{Listing, Rectangle};
use rstar::{RTree, RTreeObject, AABB};

pub struct Footprint {
    index: usize,
    bbox: Rectangle,
}

impl RTreeObject for Footprint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.x_min, self.bbox.y_min],
            [self.bbox.x_max, self.bbox.y_max],
        )
    }
}

pub(crate) fn build_rstar(listings: &[Listing]) -> RTree<Footprint> {
    RTree::bulk_load(
        listings
            .iter()
            .enumerate()
            .map(|(index, listing)| Footprint {
                index,
                bbox: listing.bbox,
            })
            .collect(),
    )
}

pub(crate) fn query_rstar(rect: Rectangle, rtree: &RTree<Footprint>) -> Vec<usize> {
    let query = AABB::from_corners([rect.x_min, rect.y_min], [rect.x_max, rect.y_max]);
    let mut results: Vec<usize> = rtree
        .locate_in_envelope_intersecting(&query)
        .map(|f| f.index)
        .collect();
    // rstar gives no ordering guarantee.
    results.sort_unstable();
    results
}
