use crate::Rectangle;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ListingError {
    #[error("Price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("Area must be non-negative, got {0}")]
    NegativeArea(f64),

    #[error("Field {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Inverted rectangle {rect}: expected x_min <= x_max and y_min <= y_max")]
    InvertedRectangle { rect: Rectangle },

    #[error("Search radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("Minimum area must be non-negative, got {0}")]
    NegativeMinArea(f64),

    #[error("Maximum price must be non-negative, got {0}")]
    NegativeMaxPrice(f64),

    #[error("Could not parse WKT: {0}")]
    Wkt(String),

    #[error("Geometry has no coordinates")]
    EmptyGeometry,

    #[error("Unsupported geometry type {0}")]
    UnsupportedGeometry(&'static str),
}
