//! Open coordinate paths and repair of degenerate ones.

use serde::{Deserialize, Serialize};

use crate::datum::Datum;
use crate::distance::distance;
use crate::point::Coordinate;
use crate::quantity::Length;

/// Perturbation applied to coincident coordinates, in degrees.
///
/// Far below any meaningful geographic precision, but large enough to survive
/// floating-point cancellation when two coordinates are subtracted.
pub const COORDINATE_NUDGE: f64 = 1e-13;

/// Suggested collinearity tolerance for [`is_on_segment`].
pub const SEGMENT_EPSILON: f64 = 1e-12;

/// An ordered, open sequence of coordinates describing a path.
///
/// A meaningful line string has at least two coordinates. This is not
/// enforced on construction; operations that cannot handle shorter input
/// document their behavior instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString(Vec<Coordinate>);

impl LineString {
    /// Creates a line string from the given coordinates.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    /// The coordinates of the path.
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// Consumes the line string, returning its coordinates.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.0
    }

    /// Number of coordinates in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no coordinates at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total path length, summing the haversine distance of consecutive
    /// coordinate pairs.
    ///
    /// An approximation by straight small-circle segments rather than true
    /// geodesics, which is fine as long as individual segments are short
    /// relative to the earth radius.
    pub fn length(&self, datum: &Datum) -> Length {
        self.0
            .windows(2)
            .map(|pair| distance(&pair[0], &pair[1], datum))
            .fold(Length::meters(0.0), |total, d| total + d)
    }

    /// Returns a copy of the path that is safe for algorithms which cannot
    /// tolerate two exactly coincident coordinates.
    ///
    /// A two-point path of equal coordinates gets its second coordinate
    /// perturbed by [`COORDINATE_NUDGE`]. A longer path has exact duplicates
    /// removed (first occurrence wins); if that collapses the path to a
    /// single distinct coordinate, the perturbation rule is applied to the
    /// original first and last coordinates instead.
    ///
    /// Applying this twice yields the same result as applying it once.
    pub fn sanitized(&self) -> LineString {
        if self.0.len() == 2 && self.0[0] == self.0[1] {
            return Self(vec![self.0[0], nudge(&self.0[1])]);
        }

        if self.0.len() > 2 {
            let mut distinct: Vec<Coordinate> = Vec::with_capacity(self.0.len());
            for point in &self.0 {
                if !distinct.contains(point) {
                    distinct.push(*point);
                }
            }

            if distinct.len() == 1 {
                let first = self.0[0];
                let last = self.0[self.0.len() - 1];
                return Self(vec![first, nudge(&last)]);
            }

            return Self(distinct);
        }

        self.clone()
    }
}

fn nudge(c: &Coordinate) -> Coordinate {
    match c.elevation() {
        Some(elevation) => Coordinate::with_elevation(
            c.lat() + COORDINATE_NUDGE,
            c.lon() + COORDINATE_NUDGE,
            elevation + COORDINATE_NUDGE,
        ),
        None => Coordinate::new(c.lat() + COORDINATE_NUDGE, c.lon() + COORDINATE_NUDGE),
    }
}

/// Checks whether `c` lies on the segment between `a` and `b`.
///
/// `epsilon` bounds the cross product under which the three points are still
/// considered aligned; [`SEGMENT_EPSILON`] is a reasonable value for
/// coordinates in degrees.
pub fn is_on_segment(a: &Coordinate, b: &Coordinate, c: &Coordinate, epsilon: f64) -> bool {
    let cross = (c.lat() - a.lat()) * (b.lon() - a.lon()) - (c.lon() - a.lon()) * (b.lat() - a.lat());
    if cross.abs() > epsilon {
        return false;
    }

    let dot = (c.lon() - a.lon()) * (b.lon() - a.lon()) + (c.lat() - a.lat()) * (b.lat() - a.lat());
    if dot < 0.0 {
        return false;
    }

    let segment_length_sq =
        (b.lon() - a.lon()) * (b.lon() - a.lon()) + (b.lat() - a.lat()) * (b.lat() - a.lat());
    dot <= segment_length_sq
}
