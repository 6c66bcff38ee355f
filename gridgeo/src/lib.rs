//! Geospatial computational-geometry primitives for power-grid planning.
//!
//! This crate reasons about coordinates harvested from map data:
//!
//! * great-circle distances via the haversine formula ([`distance`]),
//! * convex hulls around point clusters ([`hull`]),
//! * areas enclosed by latitude/longitude polygons ([`area`]),
//! * point-in-polygon containment tests ([`Ring::contains`]),
//! * repair of degenerate line geometry ([`LineString::sanitized`]),
//! * stitching of disconnected path fragments into routes ([`chain`]).
//!
//! All operations are pure functions over immutable value types; there is no
//! shared state and no I/O, so independent invocations may run in parallel
//! without coordination. Distances and areas are reported as [`Length`] and
//! [`Area`] quantities, and everything distance-derived takes an explicit
//! [`Datum`] describing the spherical earth model.
//!
//! ```
//! use gridgeo::{latlon, Datum};
//! use gridgeo::distance::distance;
//!
//! let dortmund = latlon!(51.51, 7.46);
//! let munich = latlon!(48.14, 11.58);
//!
//! let d = distance(&dortmund, &munich, &Datum::WGS84);
//! assert!((d.as_kilometers() - 480.0).abs() < 10.0);
//! ```

pub mod area;
pub mod bounds;
pub mod chain;
pub mod datum;
pub mod distance;
pub mod error;
pub mod hull;
pub mod line_string;
pub mod point;
pub mod quantity;
pub mod ring;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounds::GeoBounds;
pub use datum::Datum;
pub use error::GeometryError;
pub use line_string::LineString;
pub use point::Coordinate;
pub use quantity::{Area, Length};
pub use ring::Ring;
