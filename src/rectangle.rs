use std::fmt;

use crate::errors::ListingError;
use crate::Coordinate;

/// Anything with an axis-aligned bounding rectangle.
pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

/// An axis-aligned rectangle.
///
/// Callers are expected to keep `x_min <= x_max` and `y_min <= y_max`.
/// This is not checked on the hot path: an inverted rectangle still gives a
/// deterministic answer from `intersects`, just not a meaningful one. Use
/// `try_from_bounds` at input boundaries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

impl Rectangle {
    /// Rectangle spanned by two corners, in any order.
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    /// Rectangle with the bounds exactly as given; no normalization.
    pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Rectangle {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn try_from_bounds(
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<Self, ListingError> {
        let rect = Rectangle::from_bounds(x_min, y_min, x_max, y_max);
        rect.validate()?;
        Ok(rect)
    }

    /// Smallest rectangle covering all of `rects`, or None if there are none.
    pub fn of(rects: &[Rectangle]) -> Option<Self> {
        let (first, rest) = rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(*r)))
    }

    pub fn validate(&self) -> Result<(), ListingError> {
        let bounds = [
            ("x_min", self.x_min),
            ("y_min", self.y_min),
            ("x_max", self.x_max),
            ("y_max", self.y_max),
        ];
        if let Some((field, _)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ListingError::NonFinite { field: *field });
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(ListingError::InvertedRectangle { rect: *self });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x_max + self.x_min) / 2.,
            y: (self.y_max + self.y_min) / 2.,
        }
    }

    /// Closed-interval overlap test: rectangles touching at an edge or a
    /// corner intersect.
    pub fn intersects(&self, other: Rectangle) -> bool {
        !(self.x_min > other.x_max
            || self.x_max < other.x_min
            || self.y_min > other.y_max
            || self.y_max < other.y_min)
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.x_min..=self.x_max).contains(&point.x)
            && (self.y_min..=self.y_max).contains(&point.y)
    }

    /// A new rectangle covering both self and other.
    pub fn union(&self, other: Rectangle) -> Rectangle {
        Rectangle {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Square of half-width `radius` centered on `center`.
    pub fn around(center: Coordinate, radius: f64) -> Rectangle {
        let delta = Coordinate::new(1., 1.) * radius;
        let low = center - delta;
        let high = center + delta;
        Rectangle::from_bounds(low.x, low.y, high.x, high.y)
    }
}
