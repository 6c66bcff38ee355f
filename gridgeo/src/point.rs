//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

/// A position on the earth's surface in degrees of latitude and longitude.
///
/// Coordinates compare equal only on exact value match. An optional elevation
/// can be carried along but takes no part in any geometry calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
    elevation: Option<f64>,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: None,
        }
    }

    /// Creates a coordinate carrying an elevation value.
    pub fn with_elevation(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: Some(elevation),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Elevation, if one was set.
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use gridgeo::latlon;
///
/// let point = latlon!(51.51, 7.46);
/// assert_eq!(point.lat(), 51.51);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::point::Coordinate::new($lat, $lon)
    };
}
