//! Latitude/longitude extremes of a coordinate sequence.

use serde::{Deserialize, Serialize};

use crate::point::Coordinate;

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Smallest latitude of the sequence.
    pub lat_min: f64,
    /// Largest latitude of the sequence.
    pub lat_max: f64,
    /// Smallest longitude of the sequence.
    pub lon_min: f64,
    /// Largest longitude of the sequence.
    pub lon_max: f64,
}

impl GeoBounds {
    /// Computes the bounds of the given coordinates, or `None` when the
    /// iterator is empty.
    pub fn from_coordinates<'a>(
        mut coordinates: impl Iterator<Item = &'a Coordinate>,
    ) -> Option<Self> {
        let first = coordinates.next()?;
        let mut bounds = Self {
            lat_min: first.lat(),
            lat_max: first.lat(),
            lon_min: first.lon(),
            lon_max: first.lon(),
        };

        for c in coordinates {
            if c.lat() < bounds.lat_min {
                bounds.lat_min = c.lat();
            }
            if c.lat() > bounds.lat_max {
                bounds.lat_max = c.lat();
            }
            if c.lon() < bounds.lon_min {
                bounds.lon_min = c.lon();
            }
            if c.lon() > bounds.lon_max {
                bounds.lon_max = c.lon();
            }
        }

        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;

    #[test]
    fn bounds_of_points() {
        let points = [latlon!(1.0, -3.0), latlon!(-2.0, 8.0), latlon!(0.5, 0.0)];
        let bounds = GeoBounds::from_coordinates(points.iter()).expect("non-empty input");
        assert_eq!(bounds.lat_min, -2.0);
        assert_eq!(bounds.lat_max, 1.0);
        assert_eq!(bounds.lon_min, -3.0);
        assert_eq!(bounds.lon_max, 8.0);
    }

    #[test]
    fn bounds_of_nothing() {
        let points: [Coordinate; 0] = [];
        assert!(GeoBounds::from_coordinates(points.iter()).is_none());
    }
}
