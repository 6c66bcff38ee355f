//! Great-circle distances on the spherical earth model.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::datum::Datum;
use crate::point::Coordinate;
use crate::quantity::Length;

/// Calculates the great-circle distance between two positions given in
/// degrees, using the haversine formula.
///
/// Any finite input is accepted, including out-of-range latitudes and
/// longitudes. The result is symmetric in its arguments, zero for identical
/// positions and valid up to antipodal separation.
pub fn haversine(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64, datum: &Datum) -> Length {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    datum.radius() * central_angle
}

/// [`haversine`] between two coordinates.
pub fn distance(a: &Coordinate, b: &Coordinate, datum: &Datum) -> Length {
    haversine(a.lat(), a.lon(), b.lat(), b.lon(), datum)
}

/// An origin and target coordinate together with the distance between them.
///
/// The ordering of coordinate distances considers the distance magnitude
/// alone and is therefore intentionally inconsistent with equality: two
/// values with different targets at the same distance compare as equal for
/// ordering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateDistance {
    origin: Coordinate,
    target: Coordinate,
    distance: Length,
}

impl CoordinateDistance {
    /// Measures the distance from `origin` to `target`.
    pub fn new(origin: Coordinate, target: Coordinate, datum: &Datum) -> Self {
        Self {
            origin,
            target,
            distance: distance(&origin, &target, datum),
        }
    }

    /// The origin coordinate.
    pub fn origin(&self) -> &Coordinate {
        &self.origin
    }

    /// The target coordinate.
    pub fn target(&self) -> &Coordinate {
        &self.target
    }

    /// The distance from origin to target.
    pub fn distance(&self) -> Length {
        self.distance
    }
}

// Required by `Ord`. Equality itself stays the derived full-value comparison.
impl Eq for CoordinateDistance {}

impl PartialOrd for CoordinateDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoordinateDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .as_meters()
            .total_cmp(&other.distance.as_meters())
    }
}

/// Measures the distance from `origin` to every candidate and returns the
/// results sorted ascending by distance.
///
/// The sort is stable, so candidates at equal distance keep their input
/// order.
pub fn coordinate_distances(
    origin: &Coordinate,
    candidates: &[Coordinate],
    datum: &Datum,
) -> Vec<CoordinateDistance> {
    let mut distances: Vec<_> = candidates
        .iter()
        .map(|target| CoordinateDistance::new(*origin, *target, datum))
        .collect();
    distances.sort();
    distances
}
