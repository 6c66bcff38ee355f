//! Error type used by the crate.

use thiserror::Error;

use crate::quantity::Length;

/// Failure of a geometry operation.
///
/// Every variant describes the invariant that was violated. Inputs that are
/// merely suspicious (out-of-range coordinates, self-intersecting rings) are
/// deliberately not validated; callers are trusted to supply topologically
/// simple geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Bounding extremes were requested of an empty point set.
    #[error("cannot determine bounding extremes of an empty point set")]
    EmptyInput,

    /// Too few distinct points for the requested operation.
    #[error("operation needs at least 3 distinct points, but only {0} remained")]
    NotEnoughPoints(usize),

    /// All input points lie on one line, so no hull ring can be built.
    #[error("input points are collinear, the convex hull is degenerate")]
    CollinearPoints,

    /// A ring operation requires the first and last coordinate to be equal.
    #[error("polygon ring is not closed")]
    RingNotClosed,

    /// Defensive check of the area reordering step failed.
    #[error("no ring coordinate attains the computed maximum latitude {0}")]
    MissingLatitudeExtreme(f64),

    /// The greedy fragment search found no candidate inside the search circle.
    #[error(
        "no path fragment has a coordinate within {radius} of ({lat}, {lon}), cannot continue chaining"
    )]
    NoFragmentInReach {
        /// Search radius that was exhausted.
        radius: Length,
        /// Latitude of the path's current end point.
        lat: f64,
        /// Longitude of the path's current end point.
        lon: f64,
    },
}
