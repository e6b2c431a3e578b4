use crate::errors::ListingError;
use crate::options::DistanceMode;
use crate::{Coordinate, Listing, Rectangle};

/// A radius and attribute-threshold lookup around a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearQuery {
    pub origin: Coordinate,
    pub radius: f64,
    pub max_price: f64,
    pub min_area: f64,
    pub min_bedrooms: u32,
}

impl NearQuery {
    /// A query with no price, area or bedroom limits.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        NearQuery {
            origin: Coordinate::new(x, y),
            radius,
            max_price: f64::INFINITY,
            min_area: 0.,
            min_bedrooms: 0,
        }
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_min_bedrooms(mut self, min_bedrooms: u32) -> Self {
        self.min_bedrooms = min_bedrooms;
        self
    }

    pub fn validate(&self) -> Result<(), ListingError> {
        if !self.origin.x.is_finite() {
            return Err(ListingError::NonFinite { field: "x" });
        }
        if !self.origin.y.is_finite() {
            return Err(ListingError::NonFinite { field: "y" });
        }
        if !self.radius.is_finite() {
            return Err(ListingError::NonFinite { field: "radius" });
        }
        if self.radius < 0. {
            return Err(ListingError::NegativeRadius(self.radius));
        }
        // An infinite max_price is the "no limit" default.
        if self.max_price.is_nan() {
            return Err(ListingError::NonFinite { field: "max_price" });
        }
        if self.max_price < 0. {
            return Err(ListingError::NegativeMaxPrice(self.max_price));
        }
        if !self.min_area.is_finite() {
            return Err(ListingError::NonFinite { field: "min_area" });
        }
        if self.min_area < 0. {
            return Err(ListingError::NegativeMinArea(self.min_area));
        }
        Ok(())
    }

    /// The square candidate window handed to the range query.
    pub fn search_rect(&self) -> Rectangle {
        Rectangle::around(self.origin, self.radius)
    }

    /// Whether a candidate's centroid is within the radius and its
    /// attributes pass every threshold.
    pub fn accepts(&self, listing: &Listing, mode: DistanceMode) -> bool {
        let distance = mode.apply(self.origin.distance(listing.centroid()));
        distance <= self.radius
            && listing.price <= self.max_price
            && listing.area >= self.min_area
            && listing.bedrooms >= self.min_bedrooms
    }
}
