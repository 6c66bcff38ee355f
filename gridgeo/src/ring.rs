//! Closed polygon boundaries and point containment.

use serde::{Deserialize, Serialize};

use crate::datum::Datum;
use crate::point::Coordinate;
use crate::quantity::Length;

/// Additive latitude nudge resolving the ray-casting vertex ambiguity, in
/// degrees.
const VERTEX_EPSILON: f64 = 1e-4;

/// An ordered coordinate sequence describing a simple closed polygon
/// boundary.
///
/// A well-formed ring repeats its first coordinate at the end. Construction
/// does not enforce this; operations that require closure fail with a
/// descriptive error instead. Rings are value objects, no operation mutates
/// one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring(Vec<Coordinate>);

impl Ring {
    /// Creates a ring from the given coordinates as-is.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    /// Creates a ring from the given coordinates, appending the first
    /// coordinate at the end when it is not repeated there already.
    pub fn closed(mut points: Vec<Coordinate>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self(points)
    }

    /// The coordinates of the boundary, including the closing repetition.
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// Consumes the ring, returning its coordinates.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.0
    }

    /// Number of coordinates, the closing repetition included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ring has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinate are identical.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() > 1 => first == last,
            _ => false,
        }
    }

    /// Ray-casting containment test.
    ///
    /// Counts the boundary edges crossed by a ray cast from the point; an odd
    /// crossing count means the point is inside. A point's latitude exactly
    /// matching an edge endpoint is nudged by a small epsilon, which resolves
    /// the classic vertex ambiguity. The result for points exactly on the
    /// boundary is unspecified.
    pub fn contains(&self, point: &Coordinate) -> bool {
        let crossings = self
            .0
            .windows(2)
            .filter(|edge| ray_intersects(&edge[0], &edge[1], point))
            .count();
        crossings % 2 == 1
    }

    /// Builds a circle of the given radius around `center`, with one boundary
    /// point per degree of bearing.
    ///
    /// Each point is placed with the spherical destination-point formula, so
    /// the circle stays accurate at any latitude. Useful standalone and as
    /// the disposable search region of the fragment chainer.
    pub fn circle(center: &Coordinate, radius: Length, datum: &Datum) -> Self {
        let lat = center.lat_rad();
        let lon = center.lon_rad();
        let angular_radius = radius / datum.radius();

        let mut points = Vec::with_capacity(361);
        for bearing_deg in 0..360 {
            let bearing = f64::from(bearing_deg).to_radians();

            let point_lat = (lat.sin() * angular_radius.cos()
                + lat.cos() * angular_radius.sin() * bearing.cos())
            .asin();
            let point_lon = lon
                + (bearing.sin() * angular_radius.sin() * lat.cos())
                    .atan2(angular_radius.cos() - lat.sin() * point_lat.sin());

            points.push(Coordinate::new(
                point_lat.to_degrees(),
                point_lon.to_degrees(),
            ));
        }

        Self::closed(points)
    }
}

fn ray_intersects(a: &Coordinate, b: &Coordinate, point: &Coordinate) -> bool {
    // Order the edge endpoints bottom-up by latitude.
    let (a, b) = if a.lat() > b.lat() { (b, a) } else { (a, b) };

    let mut point_lat = point.lat();
    if point_lat == a.lat() || point_lat == b.lat() {
        point_lat += VERTEX_EPSILON;
    }

    if point_lat > b.lat() || point_lat < a.lat() || point.lon() > a.lon().max(b.lon()) {
        return false;
    }
    if point.lon() < a.lon().min(b.lon()) {
        return true;
    }

    let slope_to_point = (point_lat - a.lat()) / (point.lon() - a.lon());
    let edge_slope = (b.lat() - a.lat()) / (b.lon() - a.lon());
    slope_to_point >= edge_slope
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::distance::distance;
    use crate::latlon;

    fn square() -> Ring {
        Ring::new(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 10.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
            latlon!(0.0, 0.0),
        ])
    }

    #[test]
    fn point_inside_square() {
        assert!(square().contains(&latlon!(5.0, 5.0)));
    }

    #[test]
    fn point_outside_square() {
        assert!(!square().contains(&latlon!(50.0, 50.0)));
        assert!(!square().contains(&latlon!(-5.0, 5.0)));
    }

    #[test]
    fn closing_a_ring() {
        let ring = Ring::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
        ]);
        assert!(ring.is_closed());
        assert_eq!(ring.len(), 4);

        // Already closed input is left alone.
        assert_eq!(Ring::closed(square().into_points()), square());
    }

    #[test]
    fn open_ring_is_detected() {
        let open = Ring::new(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(1.0, 1.0)]);
        assert!(!open.is_closed());
        assert!(!Ring::new(vec![]).is_closed());
    }

    #[test]
    fn circle_points_sit_on_the_radius() {
        let datum = Datum::WGS84;
        let center = latlon!(51.5, 7.4);
        let radius = Length::kilometers(25.0);

        let circle = Ring::circle(&center, radius, &datum);
        assert!(circle.is_closed());
        assert_eq!(circle.len(), 361);

        for point in circle.points() {
            let d = distance(&center, point, &datum);
            assert_relative_eq!(d.as_meters(), radius.as_meters(), max_relative = 1e-9);
        }
    }

    #[test]
    fn circle_contains_its_center() {
        let datum = Datum::WGS84;
        let center = latlon!(51.5, 7.4);
        let circle = Ring::circle(&center, Length::kilometers(5.0), &datum);

        assert!(circle.contains(&center));
        assert!(!circle.contains(&latlon!(52.5, 7.4)));
    }
}
