//! Polygon area by trapezoid decomposition.

use crate::bounds::GeoBounds;
use crate::datum::Datum;
use crate::distance::haversine;
use crate::error::GeometryError;
use crate::point::Coordinate;
use crate::quantity::Area;
use crate::ring::Ring;

/// Calculates the area enclosed by a closed ring.
///
/// The polygon is decomposed into trapezoids referenced against the ring's
/// minimum longitude: for each boundary edge, the haversine distance from the
/// edge's mean longitude to the minimum longitude forms the width and the
/// haversine distance between the edge's latitudes forms the height. Edges
/// descending in latitude contribute positively, ascending edges negatively,
/// so the partial areas of the far side of the polygon cancel against the
/// near side.
///
/// The boundary is first canonicalized: duplicates removed, traversal
/// restarted at the maximum-latitude coordinate and forced clockwise. The
/// result is therefore invariant to the ring's starting vertex, and reversing
/// the winding direction changes at most the sign of the result.
///
/// This is a planar approximation projected through haversine distances, not
/// a spherical-polygon integral. It is accurate at building-footprint scale
/// and degrades for polygons spanning large fractions of the globe.
///
/// # Errors
///
/// [`GeometryError::RingNotClosed`] when the ring does not repeat its first
/// coordinate at the end, [`GeometryError::NotEnoughPoints`] when fewer than
/// 3 distinct coordinates remain, and
/// [`GeometryError::MissingLatitudeExtreme`] when no coordinate attains the
/// computed maximum latitude (unreachable for well-formed rings, checked
/// defensively).
pub fn ring_area(ring: &Ring, datum: &Datum) -> Result<Area, GeometryError> {
    if !ring.is_closed() {
        return Err(GeometryError::RingNotClosed);
    }

    let bounds =
        GeoBounds::from_coordinates(ring.points().iter()).ok_or(GeometryError::EmptyInput)?;
    let lat_max = bounds.lat_max;
    let lon_min = bounds.lon_min;

    // Drop duplicate coordinates, keeping the last occurrence of each. This
    // removes the closing repetition as well; closure is re-established on
    // the canonical start coordinate below.
    let all = ring.points();
    let mut coords: Vec<Coordinate> = Vec::with_capacity(all.len());
    for (idx, c) in all.iter().enumerate() {
        if !all[idx + 1..].contains(c) {
            coords.push(*c);
        }
    }

    if coords.len() < 3 {
        return Err(GeometryError::NotEnoughPoints(coords.len()));
    }

    let idx_start = coords
        .iter()
        .position(|c| c.lat() == lat_max)
        .ok_or(GeometryError::MissingLatitudeExtreme(lat_max))?;
    let idx_next = if idx_start + 1 == coords.len() {
        0
    } else {
        idx_start + 1
    };

    // Restart the traversal at the maximum-latitude coordinate, walking
    // clockwise. Whether the given order already is clockwise follows from
    // the longitude of the next coordinate.
    let mut ordered: Vec<Coordinate> = Vec::with_capacity(coords.len() + 1);
    if coords[idx_next].lon() > coords[idx_start].lon() {
        ordered.extend_from_slice(&coords[idx_start..]);
        ordered.extend_from_slice(&coords[..idx_start]);
    } else {
        ordered.extend(coords[..idx_next].iter().rev());
        ordered.extend(coords[idx_next..].iter().rev());
    }
    let start = ordered[0];
    ordered.push(start);

    let mut area = Area::square_meters(0.0);
    let mut idx_prev = ordered.len() - 1;
    for idx in 0..ordered.len() {
        let coord = ordered[idx];
        let prev = ordered[idx_prev];
        idx_prev = idx;

        let lat_hi = coord.lat().max(prev.lat());
        let lat_lo = coord.lat().min(prev.lat());
        if lat_hi == lat_lo {
            // Zero-height trapezoid.
            continue;
        }

        let mean_lon = (coord.lon() + prev.lon()) / 2.0;
        let width = haversine(lat_hi, mean_lon, lat_hi, lon_min, datum);
        let height = haversine(lat_hi, mean_lon, lat_lo, mean_lon, datum);
        let partial = width * height;

        if coord.lat() < prev.lat() {
            area = area + partial;
        } else {
            area = area - partial;
        }
    }

    Ok(area)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::latlon;

    const DATUM: Datum = Datum::WGS84;

    fn unit_square(start: usize, reversed: bool) -> Ring {
        let mut corners = vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
            latlon!(1.0, 0.0),
        ];
        if reversed {
            corners.reverse();
        }
        corners.rotate_left(start);
        Ring::closed(corners)
    }

    #[test]
    fn unit_square_area() {
        let area = ring_area(&unit_square(0, false), &DATUM).expect("area calculation failed");
        // One degree square at the equator, roughly 111.3 km on a side.
        assert_relative_eq!(
            area.abs().as_square_meters(),
            1.24e10,
            max_relative = 0.01
        );
    }

    #[test]
    fn area_is_invariant_to_start_vertex() {
        let reference = ring_area(&unit_square(0, false), &DATUM)
            .expect("area calculation failed")
            .abs();

        for start in 1..4 {
            let rotated = ring_area(&unit_square(start, false), &DATUM)
                .expect("area calculation failed")
                .abs();
            assert_relative_eq!(
                rotated.as_square_meters(),
                reference.as_square_meters(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn area_is_invariant_to_winding() {
        let forward = ring_area(&unit_square(0, false), &DATUM).expect("area calculation failed");
        let backward = ring_area(&unit_square(0, true), &DATUM).expect("area calculation failed");
        assert_relative_eq!(
            forward.abs().as_square_meters(),
            backward.abs().as_square_meters(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn triangle_is_half_the_square() {
        let triangle = Ring::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
        ]);
        let area = ring_area(&triangle, &DATUM).expect("area calculation failed");
        assert_relative_eq!(
            area.abs().as_square_meters(),
            1.24e10 / 2.0,
            max_relative = 0.01
        );
    }

    #[test]
    fn open_ring_is_rejected() {
        let open = Ring::new(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(1.0, 1.0)]);
        assert!(matches!(
            ring_area(&open, &DATUM),
            Err(GeometryError::RingNotClosed)
        ));
    }

    #[test]
    fn degenerate_ring_is_rejected() {
        let collapsed = Ring::closed(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0)]);
        assert!(matches!(
            ring_area(&collapsed, &DATUM),
            Err(GeometryError::NotEnoughPoints(2))
        ));
    }
}
