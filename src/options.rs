use crate::Rectangle;

/// How a leaf's bounding box responds to inserts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// The box keeps its construction-time value. Listings falling wholly
    /// outside it are stored but never returned by range queries.
    Fixed,
    /// The box is widened to cover every inserted listing.
    Grow,
}

/// How the centroid distance is compared against a search radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceMode {
    /// Truncate the distance toward zero before comparing, so 5.9 passes a
    /// radius of 5.
    Truncated,
    Exact,
}

impl DistanceMode {
    pub fn apply(self, distance: f64) -> f64 {
        match self {
            DistanceMode::Truncated => distance.trunc(),
            DistanceMode::Exact => distance,
        }
    }
}

pub const DEFAULT_EXTENT: Rectangle = Rectangle {
    x_min: 0.,
    y_min: 0.,
    x_max: 100.,
    y_max: 100.,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexOptions {
    pub initial_extent: Rectangle,
    pub bounds: BoundsPolicy,
    pub distance: DistanceMode,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            initial_extent: DEFAULT_EXTENT,
            bounds: BoundsPolicy::Fixed,
            distance: DistanceMode::Truncated,
        }
    }
}

impl IndexOptions {
    pub fn with_initial_extent(mut self, extent: Rectangle) -> Self {
        self.initial_extent = extent;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_distance(mut self, distance: DistanceMode) -> Self {
        self.distance = distance;
        self
    }
}
