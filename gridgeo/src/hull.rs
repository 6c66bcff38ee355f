//! Convex hull construction over geographic point sets.
//!
//! Points are first rescaled to an integer grid so that all comparisons
//! during the scan are exact. An Akl–Toussaint pre-filter discards points
//! that provably cannot lie on the hull before the O(n log n) Graham scan
//! runs.

use std::cmp::Ordering as CmpOrdering;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::point::Coordinate;
use crate::ring::Ring;

/// Default decimal precision of the scan grid.
///
/// Six decimal degrees resolve to about 10 cm on the ground, which is well
/// below the accuracy of harvested map data.
pub const DEFAULT_HULL_PRECISION: u32 = 6;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines the orientation of the triplet `p`, `q`, `r` given as
    /// (x, y) pairs.
    pub fn triplet<Num: num_traits::Num + PartialOrd + Copy>(
        p: (Num, Num),
        q: (Num, Num),
        r: (Num, Num),
    ) -> Self {
        let v = (q.1 - p.1) * (r.0 - q.0) - (q.0 - p.0) * (r.1 - q.1);
        match v {
            v if v == Num::zero() => Self::Collinear,
            v if v > Num::zero() => Self::Clockwise,
            _ => Self::Counterclockwise,
        }
    }
}

/// A coordinate rescaled to the integer scan grid. x is longitude, y is
/// latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct HullPoint {
    x: i64,
    y: i64,
}

impl HullPoint {
    fn from_coordinate(c: &Coordinate, scale: f64) -> Self {
        Self {
            x: (c.lon() * scale) as i64,
            y: (c.lat() * scale) as i64,
        }
    }

    fn to_coordinate(self, scale: f64) -> Coordinate {
        Coordinate::new(self.y as f64 / scale, self.x as f64 / scale)
    }

    fn xy(self) -> (i64, i64) {
        (self.x, self.y)
    }

    fn distance_sq(self, other: Self) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Builds the convex hull of the given points as a closed ring.
///
/// `precision` is the number of decimal digits kept when the points are cast
/// onto the integer comparison grid; precisions above 8 risk overflowing the
/// grid arithmetic for worldwide coordinates. Points that coincide on the
/// grid collapse into one.
///
/// The returned ring starts at the bottom-most hull point and winds
/// counterclockwise (with latitude up).
///
/// # Errors
///
/// [`GeometryError::EmptyInput`] for an empty point set,
/// [`GeometryError::NotEnoughPoints`] when fewer than 3 distinct grid points
/// remain, and [`GeometryError::CollinearPoints`] when all points lie on one
/// line.
pub fn convex_hull(points: &[Coordinate], precision: u32) -> Result<Ring, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput);
    }

    let scale = 10f64.powi(precision as i32);
    let mut grid: Vec<HullPoint> = points
        .iter()
        .map(|c| HullPoint::from_coordinate(c, scale))
        .collect();
    grid.sort();
    grid.dedup();

    if grid.len() < 3 {
        return Err(GeometryError::NotEnoughPoints(grid.len()));
    }

    akl_toussaint_filter(&mut grid);
    let hull = graham_scan(grid)?;

    let ring: Vec<Coordinate> = hull.into_iter().map(|p| p.to_coordinate(scale)).collect();
    Ok(Ring::closed(ring))
}

/// Discards every point strictly inside the quadrilateral spanned by the
/// four bounding extremes; such a point cannot be part of the hull.
fn akl_toussaint_filter(points: &mut Vec<HullPoint>) {
    let (Some(&x_min), Some(&x_max), Some(&y_min), Some(&y_max)) = (
        points.iter().min_by_key(|p| p.x),
        points.iter().max_by_key(|p| p.x),
        points.iter().min_by_key(|p| p.y),
        points.iter().max_by_key(|p| p.y),
    ) else {
        return;
    };

    // Left, bottom, right, top: counterclockwise with latitude up.
    let mut quad: Vec<HullPoint> = Vec::with_capacity(4);
    for extreme in [x_min, y_min, x_max, y_max] {
        if !quad.contains(&extreme) {
            quad.push(extreme);
        }
    }
    if quad.len() < 3 {
        return;
    }

    points.retain(|p| !strictly_inside(&quad, *p));
}

fn strictly_inside(convex: &[HullPoint], point: HullPoint) -> bool {
    (0..convex.len()).all(|i| {
        let a = convex[i];
        let b = convex[(i + 1) % convex.len()];
        Orientation::triplet(a.xy(), b.xy(), point.xy()) == Orientation::Counterclockwise
    })
}

fn graham_scan(mut points: Vec<HullPoint>) -> Result<Vec<HullPoint>, GeometryError> {
    let pivot_idx = points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(idx, _)| idx)
        .ok_or(GeometryError::EmptyInput)?;
    let pivot = points.swap_remove(pivot_idx);

    // Sort by polar angle around the pivot; collinear points nearest first.
    points.sort_by(|a, b| match Orientation::triplet(pivot.xy(), a.xy(), b.xy()) {
        Orientation::Counterclockwise => CmpOrdering::Less,
        Orientation::Clockwise => CmpOrdering::Greater,
        Orientation::Collinear => pivot.distance_sq(*a).cmp(&pivot.distance_sq(*b)),
    });

    let mut stack = vec![pivot];
    for point in points {
        // Pop until the last two stack points and the new one make a left
        // turn.
        while stack.len() >= 2 {
            let last = stack[stack.len() - 1];
            let before_last = stack[stack.len() - 2];
            if Orientation::triplet(before_last.xy(), last.xy(), point.xy())
                == Orientation::Counterclockwise
            {
                break;
            }
            stack.pop();
        }
        stack.push(point);
    }

    if stack.len() < 3 {
        return Err(GeometryError::CollinearPoints);
    }

    Ok(stack)
}
