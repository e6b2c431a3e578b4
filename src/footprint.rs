//! Listing footprints from Well-Known Text.
//!
//! A footprint may be given as any point, line or polygon geometry; the
//! index only ever keeps its bounding rectangle.
use crate::errors::ListingError;
use crate::{Coordinate, Rectangle};
use wkt::types;
use wkt::types::Coord;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

fn point_to_position(point: types::Point<f64>) -> Option<Coordinate> {
    Some(point.0?.into())
}

fn linestring_to_positions(linestring: types::LineString<f64>) -> Vec<Coordinate> {
    linestring.0.into_iter().map(Coordinate::from).collect()
}

fn polygon_to_positions(poly: types::Polygon<f64>) -> Vec<Coordinate> {
    poly.0.into_iter().flat_map(linestring_to_positions).collect()
}

fn geometry_positions(geom: wkt::Geometry<f64>) -> Result<Vec<Coordinate>, ListingError> {
    let positions = match geom {
        wkt::Geometry::Point(p) => point_to_position(p).into_iter().collect(),
        wkt::Geometry::LineString(ls) => linestring_to_positions(ls),
        wkt::Geometry::Polygon(p) => polygon_to_positions(p),
        wkt::Geometry::MultiPoint(mp) => mp.0.into_iter().filter_map(point_to_position).collect(),
        wkt::Geometry::MultiLineString(mls) => mls
            .0
            .into_iter()
            .flat_map(linestring_to_positions)
            .collect(),
        wkt::Geometry::MultiPolygon(mpoly) => mpoly
            .0
            .into_iter()
            .flat_map(polygon_to_positions)
            .collect(),
        _ => return Err(ListingError::UnsupportedGeometry("GEOMETRYCOLLECTION")),
    };
    Ok(positions)
}

/// Bounding rectangle of the single geometry in `wkt_str`.
pub fn footprint_from_wkt(wkt_str: &str) -> Result<Rectangle, ListingError> {
    let mut geoms = wkt::Wkt::from_str(wkt_str)
        .map_err(|e| ListingError::Wkt(e.to_owned()))?
        .items;
    if geoms.len() != 1 {
        return Err(ListingError::Wkt(format!(
            "expected one geometry, found {}",
            geoms.len()
        )));
    }
    let positions = geometry_positions(geoms.remove(0))?;
    let points: Vec<Rectangle> = positions.iter().map(|&p| Rectangle::new(p, p)).collect();
    let envelope = Rectangle::of(&points).ok_or(ListingError::EmptyGeometry)?;
    envelope.validate()?;
    Ok(envelope)
}
