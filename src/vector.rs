//! Small 2D/3D vector type shared by the path and sign detectors.

use std::ops::{Add, Div, Mul, Sub};

use kurbo::Point;

use crate::error::DetectError;
use crate::Pixel;

/// A real-valued `{x, y, z}` triple. 2D sources convert with `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Scale to unit length.
    ///
    /// A zero vector yields non-finite components; callers that can see
    /// one must check first (see [`distance_to_line`]).
    pub fn normalise(self) -> Self {
        self / self.magnitude()
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y, 0.0)
    }
}

impl From<Pixel> for Vector {
    fn from(p: Pixel) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y), 0.0)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Self::Output {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// `p` is projected onto the unit direction of `ab`; the result is the
/// distance from `p` to that foot point. Coincident `a` and `b` do not
/// define a line and are rejected.
pub fn distance_to_line(p: Vector, a: Vector, b: Vector) -> Result<f64, DetectError> {
    let ab = b - a;
    if ab.magnitude_squared() == 0.0 {
        return Err(DetectError::DegenerateGeometry(
            "reference segment has zero length",
        ));
    }
    let direction = ab.normalise();
    let ap = p - a;
    let foot = a + direction * ap.dot(direction);
    Ok(p.distance(foot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vector::new(3.0, 4.0, 0.0);
        let b = Vector::new(1.0, -2.0, 2.0);

        assert_eq!(a + b, Vector::new(4.0, 2.0, 2.0));
        assert_eq!(a - b, Vector::new(2.0, 6.0, -2.0));
        assert_eq!(a * 2.0, Vector::new(6.0, 8.0, 0.0));
        assert_eq!(a / 2.0, Vector::new(1.5, 2.0, 0.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.magnitude_squared(), 25.0);
        assert_eq!(a.magnitude(), 5.0);
    }

    #[test]
    fn cross_of_unit_axes() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalise_and_distance() {
        let n = Vector::new(0.0, 3.0, 4.0).normalise();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(Vector::new(1.0, 1.0, 0.0).distance(Vector::new(4.0, 5.0, 0.0)), 5.0);

        let zero = Vector::ZERO.normalise();
        assert!(!zero.x.is_finite(), "zero vector normalises to non-finite");
    }

    #[test]
    fn two_dimensional_sources_have_zero_z() {
        let v = Vector::from(Point::new(2.5, -1.0));
        assert_eq!(v, Vector::new(2.5, -1.0, 0.0));
        let v = Vector::from(Pixel::new(7, 3));
        assert_eq!(v, Vector::new(7.0, 3.0, 0.0));
    }

    #[test]
    fn distance_to_horizontal_line() {
        let a = Vector::new(0.0, 0.0, 0.0);
        let b = Vector::new(10.0, 0.0, 0.0);
        let d = distance_to_line(Vector::new(3.0, 4.0, 0.0), a, b).unwrap();
        assert!((d - 4.0).abs() < 1e-12);
        // Projection beyond the segment still measures against the line.
        let d = distance_to_line(Vector::new(20.0, -2.0, 0.0), a, b).unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_degenerate_line_fails() {
        let a = Vector::new(1.0, 1.0, 0.0);
        let err = distance_to_line(Vector::new(3.0, 4.0, 0.0), a, a).unwrap_err();
        assert!(matches!(err, DetectError::DegenerateGeometry(_)));
    }
}
