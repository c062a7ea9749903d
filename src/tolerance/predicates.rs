//! Orientation and incidence predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn counter-clockwise (positive area).
    CounterClockwise,
    /// Points turn clockwise (negative area).
    Clockwise,
    /// Points are collinear within tolerance.
    Collinear,
}

/// Computes the orientation of the triangle `a`, `b`, `c`.
///
/// Returns `CounterClockwise` if `c` lies to the left of the directed line
/// from `a` to `b`, `Clockwise` if it lies to the right, and `Collinear`
/// when the doubled signed area of the triangle is within `eps` of zero.
///
/// # Arguments
///
/// * `a`, `b`, `c` - The three points to test
/// * `eps` - Collinearity tolerance, compared against the cross product
///   (twice the signed triangle area)
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether point `p` lies on `segment` within distance `eps`.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}
