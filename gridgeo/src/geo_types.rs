//! Conversions between this crate's value types and [`geo_types`]
//! geometries, available with the `geo-types` cargo feature.
//!
//! `geo_types` stores positions as x/y; the x axis maps to longitude and the
//! y axis to latitude. Elevation values are dropped on the way out and come
//! back as unset.

use geo_types::{Coord, LineString as GeoLineString, Point, Polygon};

use crate::line_string::LineString;
use crate::point::Coordinate;
use crate::ring::Ring;

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lon(),
            y: value.lat(),
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lon(), value.lat())
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Coordinate::new(value.y(), value.x())
    }
}

impl From<&LineString> for GeoLineString<f64> {
    fn from(value: &LineString) -> Self {
        GeoLineString::new(value.points().iter().map(|&c| c.into()).collect())
    }
}

impl From<GeoLineString<f64>> for LineString {
    fn from(value: GeoLineString<f64>) -> Self {
        LineString::new(value.into_iter().map(Coordinate::from).collect())
    }
}

impl From<&Ring> for GeoLineString<f64> {
    fn from(value: &Ring) -> Self {
        GeoLineString::new(value.points().iter().map(|&c| c.into()).collect())
    }
}

impl From<&Ring> for Polygon<f64> {
    fn from(value: &Ring) -> Self {
        Polygon::new(value.into(), vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;

    #[test]
    fn coordinate_axes_map_to_lon_lat() {
        let coord: Coord<f64> = latlon!(51.5, 7.4).into();
        assert_eq!(coord.x, 7.4);
        assert_eq!(coord.y, 51.5);

        let back: Coordinate = coord.into();
        assert_eq!(back, latlon!(51.5, 7.4));
    }

    #[test]
    fn line_string_round_trip() {
        let path = LineString::new(vec![latlon!(0.0, 0.0), latlon!(1.0, 2.0)]);
        let converted: GeoLineString<f64> = (&path).into();
        let back: LineString = converted.into();
        assert_eq!(back, path);
    }

    #[test]
    fn ring_becomes_polygon_exterior() {
        let ring = Ring::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
        ]);
        let polygon: Polygon<f64> = (&ring).into();
        assert_eq!(polygon.exterior().0.len(), ring.len());
        assert!(polygon.interiors().is_empty());
    }
}
