mod coordinate;
mod index_node;
mod listing;
mod near_query;
mod options;
mod rectangle;
mod spatial_index;

pub mod errors;
pub mod footprint;

pub use coordinate::Coordinate;
pub use index_node::IndexNode;
pub use listing::{Listing, ListingId};
pub use near_query::NearQuery;
pub use options::{BoundsPolicy, DistanceMode, IndexOptions, DEFAULT_EXTENT};
pub use rectangle::{HasEnvelope, Rectangle};
pub use spatial_index::SpatialIndex;
