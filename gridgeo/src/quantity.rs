//! Length and area quantities with unit conversion.
//!
//! The geometry operations in this crate report their results as quantities
//! rather than bare floats, so that a caller never has to guess whether a
//! distance came back in meters or kilometers. Values are stored in base SI
//! units internally.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A linear distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Length {
    meters: f64,
}

impl Length {
    /// Creates a length from a value in meters.
    pub fn meters(value: f64) -> Self {
        Self { meters: value }
    }

    /// Creates a length from a value in kilometers.
    pub fn kilometers(value: f64) -> Self {
        Self {
            meters: value * 1000.0,
        }
    }

    /// Value of the length in meters.
    pub fn as_meters(&self) -> f64 {
        self.meters
    }

    /// Value of the length in kilometers.
    pub fn as_kilometers(&self) -> f64 {
        self.meters / 1000.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            meters: self.meters + rhs.meters,
        }
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            meters: self.meters - rhs.meters,
        }
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            meters: self.meters * rhs,
        }
    }
}

impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Self) -> Self::Output {
        Area {
            square_meters: self.meters * rhs.meters,
        }
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.meters / rhs.meters
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.meters)
    }
}

/// An area, stored as square meters.
///
/// The value may be negative when it comes out of a signed partial-area sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Area {
    square_meters: f64,
}

impl Area {
    /// Creates an area from a value in square meters.
    pub fn square_meters(value: f64) -> Self {
        Self {
            square_meters: value,
        }
    }

    /// Creates an area from a value in square kilometers.
    pub fn square_kilometers(value: f64) -> Self {
        Self {
            square_meters: value * 1e6,
        }
    }

    /// Value of the area in square meters.
    pub fn as_square_meters(&self) -> f64 {
        self.square_meters
    }

    /// Value of the area in square kilometers.
    pub fn as_square_kilometers(&self) -> f64 {
        self.square_meters / 1e6
    }

    /// Absolute value of the area.
    pub fn abs(&self) -> Self {
        Self {
            square_meters: self.square_meters.abs(),
        }
    }
}

impl Add for Area {
    type Output = Area;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            square_meters: self.square_meters + rhs.square_meters,
        }
    }
}

impl Sub for Area {
    type Output = Area;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            square_meters: self.square_meters - rhs.square_meters,
        }
    }
}

impl Neg for Area {
    type Output = Area;

    fn neg(self) -> Self::Output {
        Self {
            square_meters: -self.square_meters,
        }
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m²", self.square_meters)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn length_unit_conversion() {
        assert_relative_eq!(Length::kilometers(1.5).as_meters(), 1500.0);
        assert_relative_eq!(Length::meters(250.0).as_kilometers(), 0.25);
    }

    #[test]
    fn length_arithmetic() {
        let sum = Length::meters(100.0) + Length::kilometers(1.0);
        assert_relative_eq!(sum.as_meters(), 1100.0);

        let ratio = Length::kilometers(2.0) / Length::meters(500.0);
        assert_relative_eq!(ratio, 4.0);
    }

    #[test]
    fn length_product_is_area() {
        let area = Length::meters(200.0) * Length::kilometers(1.0);
        assert_relative_eq!(area.as_square_meters(), 200_000.0);
        assert_relative_eq!(area.as_square_kilometers(), 0.2);
    }

    #[test]
    fn signed_area() {
        let area = Area::square_meters(10.0) - Area::square_meters(25.0);
        assert_relative_eq!(area.as_square_meters(), -15.0);
        assert_relative_eq!(area.abs().as_square_meters(), 15.0);
        assert_relative_eq!((-area).as_square_meters(), 15.0);
    }
}
