use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point on the flat listing map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Euclidean distance between self and other, as the square root of the
    /// summed squares. Radius checks truncate this value, so it must stay
    /// bit-for-bit this formula rather than `hypot`.
    pub fn distance(&self, other: Coordinate) -> f64 {
        let delta = other - *self;
        (delta.x * delta.x + delta.y * delta.y).sqrt()
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Scale both axes, e.g. a unit diagonal by a search radius.
impl Mul<f64> for Coordinate {
    type Output = Self;

    fn mul(self, scale: f64) -> Self::Output {
        Coordinate::new(self.x * scale, self.y * scale)
    }
}
