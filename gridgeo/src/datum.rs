//! Reference earth model used by all distance-derived calculations.

use serde::{Deserialize, Serialize};

use crate::quantity::Length;

/// Spherical earth model.
///
/// Geometry operations approximate the earth as a sphere of a fixed radius.
/// The radius is process-wide immutable data, so a `Datum` is passed
/// explicitly to every operation that needs it instead of living in a global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    radius_m: f64,
}

impl Datum {
    /// Sphere with the WGS84 semi-major axis as its radius (6 378 137 m).
    pub const WGS84: Self = Datum {
        radius_m: 6_378_137.0,
    };

    /// Creates a datum with the given sphere radius in meters.
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> Length {
        Length::meters(self.radius_m)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
