//! Greedy stitching of disconnected path fragments.

use log::debug;

use crate::datum::Datum;
use crate::distance::distance;
use crate::error::GeometryError;
use crate::line_string::LineString;
use crate::point::Coordinate;
use crate::quantity::Length;
use crate::ring::Ring;

/// Stitches disjoint path fragments belonging to one logical route into a
/// single continuous line string.
///
/// Starting from the first fragment, the chainer repeatedly draws a
/// disposable circle of `search_radius` around the path's current end point
/// and picks, among the coordinates of all unconsumed fragments inside that
/// circle, the one closest by great-circle distance. The matched fragment is
/// appended whole, reversed when it was matched at its tail, with
/// coordinates coinciding with the current end point dropped so the joint is
/// not duplicated. Distance ties go to the first candidate encountered in
/// fragment order.
///
/// Greedy and quadratic in the number of fragments; fine for the small
/// fragment counts found in map relations, expensive beyond that.
///
/// # Errors
///
/// [`GeometryError::EmptyInput`] when `fragments` is empty and
/// [`GeometryError::NoFragmentInReach`] when no unconsumed fragment has a
/// coordinate inside the search circle, which means chaining cannot proceed
/// with the given radius.
pub fn chain_fragments(
    fragments: &[LineString],
    search_radius: Length,
    datum: &Datum,
) -> Result<LineString, GeometryError> {
    let Some((first, rest)) = fragments.split_first() else {
        return Err(GeometryError::EmptyInput);
    };

    let mut path: Vec<Coordinate> = first.points().to_vec();
    let mut remaining: Vec<&LineString> = rest.iter().collect();

    while !remaining.is_empty() {
        let last = *path.last().ok_or(GeometryError::EmptyInput)?;
        let circle = Ring::circle(&last, search_radius, datum);

        let mut best: Option<(usize, usize, Length)> = None;
        for (fragment_idx, fragment) in remaining.iter().enumerate() {
            for (coord_idx, coord) in fragment.points().iter().enumerate() {
                if !circle.contains(coord) {
                    continue;
                }
                let d = distance(&last, coord, datum);
                if best.map_or(true, |(_, _, best_distance)| d < best_distance) {
                    best = Some((fragment_idx, coord_idx, d));
                }
            }
        }

        let Some((fragment_idx, coord_idx, _)) = best else {
            return Err(GeometryError::NoFragmentInReach {
                radius: search_radius,
                lat: last.lat(),
                lon: last.lon(),
            });
        };

        let fragment = remaining.remove(fragment_idx);
        debug!(
            "chaining fragment of {} coordinates, matched at index {coord_idx}",
            fragment.len()
        );

        let matched_at_tail = coord_idx == fragment.len().saturating_sub(1);
        if matched_at_tail {
            append_skipping_joint(&mut path, fragment.points().iter().rev().copied());
        } else {
            append_skipping_joint(&mut path, fragment.points().iter().copied());
        }
    }

    Ok(LineString::new(path))
}

fn append_skipping_joint(path: &mut Vec<Coordinate>, fragment: impl Iterator<Item = Coordinate>) {
    for coord in fragment {
        if path.last() == Some(&coord) {
            continue;
        }
        path.push(coord);
    }
}
