use std::fmt;

use crate::errors::ListingError;
use crate::{Coordinate, HasEnvelope, Rectangle};

/// Handle to a listing stored in a `SpatialIndex`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(pub(crate) usize);

impl ListingId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A property for sale, with its footprint on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub location: String,
    pub price: f64,
    pub area: f64,
    pub bedrooms: u32,
    pub bbox: Rectangle,
}

impl HasEnvelope for Listing {
    fn envelope(&self) -> Rectangle {
        self.bbox
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.location, self.price, self.area, self.bedrooms, self.bbox
        )
    }
}

impl Listing {
    /// Build a listing without checking its fields. The caller guarantees
    /// non-negative price and area and a non-inverted bbox.
    pub fn new(
        location: impl Into<String>,
        price: f64,
        area: f64,
        bedrooms: u32,
        bbox: Rectangle,
    ) -> Self {
        Listing {
            location: location.into(),
            price,
            area,
            bedrooms,
            bbox,
        }
    }

    pub fn try_new(
        location: impl Into<String>,
        price: f64,
        area: f64,
        bedrooms: u32,
        bbox: Rectangle,
    ) -> Result<Self, ListingError> {
        if !price.is_finite() {
            return Err(ListingError::NonFinite { field: "price" });
        }
        if price < 0. {
            return Err(ListingError::NegativePrice(price));
        }
        if !area.is_finite() {
            return Err(ListingError::NonFinite { field: "area" });
        }
        if area < 0. {
            return Err(ListingError::NegativeArea(area));
        }
        bbox.validate()?;
        Ok(Listing::new(location, price, area, bedrooms, bbox))
    }

    pub fn centroid(&self) -> Coordinate {
        self.bbox.center()
    }
}
