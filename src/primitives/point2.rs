//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point in the plane.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact
/// coordinate equality; callers that need fuzzy comparison go through the
/// tolerance predicates instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates the origin point.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`. Values
    /// outside [0, 1] extrapolate along the line through both points.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_lerp() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 10.0, epsilon = 1e-12);

        let start = a.lerp(b, 0.0);
        assert_eq!(start.x, 0.0);
        let end = a.lerp(b, 1.0);
        assert_eq!(end.x, 10.0);
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);

        let v = b - a;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);

        let moved = a + v;
        assert_eq!(moved, b);

        let back = b - v;
        assert_eq!(back, a);
    }

    #[test]
    fn test_exact_equality() {
        let a: Point2<f64> = Point2::new(0.1 + 0.2, 0.0);
        let b = Point2::new(0.3, 0.0);
        // Exact comparison by design: 0.1 + 0.2 != 0.3 in binary floating point.
        assert_ne!(a, b);
    }
}
