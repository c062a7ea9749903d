//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment collapses to its start point.
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
