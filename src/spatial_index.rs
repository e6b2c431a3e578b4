use tracing::{debug, trace};

use crate::index_node::IndexNode;
use crate::listing::{Listing, ListingId};
use crate::near_query::NearQuery;
use crate::options::{BoundsPolicy, IndexOptions};
use crate::{HasEnvelope, Rectangle};

/// An append-only store of listings with range and radius lookups.
///
/// Listings live in `listings`; the root node holds handles into it. The
/// root is a leaf and stays one, so every query is a box check against the
/// root followed by an in-order scan. Under `BoundsPolicy::Fixed` the root
/// box never changes, and a listing lying wholly outside the initial extent
/// can be inserted but is never returned.
#[derive(Debug)]
pub struct SpatialIndex {
    options: IndexOptions,
    listings: Vec<Listing>,
    root: IndexNode,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        SpatialIndex::with_options(IndexOptions::default())
    }
}

impl HasEnvelope for SpatialIndex {
    fn envelope(&self) -> Rectangle {
        self.root.bounding_box()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        SpatialIndex::default()
    }

    pub fn with_options(options: IndexOptions) -> Self {
        SpatialIndex {
            options,
            listings: Vec::new(),
            root: IndexNode::new_leaf(options.initial_extent),
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn root(&self) -> &IndexNode {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.get(id.0)
    }

    /// All stored listings in insertion order, reachable or not.
    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    /// Store a listing. Never fails; the caller is responsible for having
    /// validated it (see `Listing::try_new`).
    pub fn insert(&mut self, listing: Listing) -> ListingId {
        let id = ListingId(self.listings.len());
        let bbox = listing.bbox;
        debug!(id = id.0, location = %listing.location, %bbox, "inserting listing");
        self.listings.push(listing);
        self.root.insert_listing(id, bbox);
        if self.options.bounds == BoundsPolicy::Grow {
            self.root.expand(bbox);
        }
        id
    }

    /// Listings whose bbox intersects `range`, in insertion order.
    ///
    /// `range` must not be inverted; an inverted range gives an arbitrary
    /// (but deterministic) result.
    pub fn query(&self, range: Rectangle) -> Vec<&Listing> {
        let mut results = Vec::new();
        self.root.search(range, &self.listings, &mut results);
        trace!(%range, matches = results.len(), "range query");
        results
    }

    /// Listings whose centroid lies within `radius` of `(x, y)` and which
    /// pass the price, area and bedroom thresholds.
    ///
    /// Candidates come from a range query over the enclosing square, so the
    /// root pruning of `query` applies here too. Under the default
    /// `DistanceMode::Truncated` the centroid distance is truncated to a
    /// whole number before comparison: a listing at distance 5.9 passes a
    /// radius of 5.
    pub fn query_near(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        max_price: f64,
        min_area: f64,
        min_bedrooms: u32,
    ) -> Vec<&Listing> {
        let query = NearQuery {
            origin: (x, y).into(),
            radius,
            max_price,
            min_area,
            min_bedrooms,
        };
        self.query_near_with(&query)
    }

    pub fn query_near_with(&self, query: &NearQuery) -> Vec<&Listing> {
        let candidates = self.query(query.search_rect());
        let n_candidates = candidates.len();
        let results: Vec<&Listing> = candidates
            .into_iter()
            .filter(|listing| query.accepts(listing, self.options.distance))
            .collect();
        trace!(
            origin = %query.origin,
            radius = query.radius,
            candidates = n_candidates,
            matches = results.len(),
            "near query"
        );
        results
    }
}
