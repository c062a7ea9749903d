//! Core polygon type and basic operations.

use crate::error::ClipError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{orient2d, point_on_segment, Orientation};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first, and no repeated closing point is stored. Vertices may wind either
/// way; operations that care about winding say so.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The boundary vertices in order.
    pub vertices: Vec<Point2<F>>,
}

/// Where a point sits relative to a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Strictly interior.
    Inside,
    /// Within the boundary tolerance band.
    OnBoundary,
    /// Strictly exterior.
    Outside,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from coordinate pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use ringclip::polygon::Polygon;
    ///
    /// let square = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// assert_eq!(square.len(), 4);
    /// ```
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the bounding box as `(min, max)` corner points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;

        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Some((min, max))
    }

    /// Tests whether the polygon is convex.
    ///
    /// All non-collinear vertex triples must turn the same way. Degenerate
    /// polygons (fewer than 3 vertices) count as convex.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut turn: Option<Orientation> = None;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];

            match orient2d(a, b, c, F::epsilon()) {
                Orientation::Collinear => {}
                o => match turn {
                    None => turn = Some(o),
                    Some(prev) if prev != o => return false,
                    Some(_) => {}
                },
            }
        }

        true
    }

    /// Ensures counter-clockwise winding, reversing in place if needed.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a copy with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Tests if a point is strictly inside the polygon (even-odd rule).
    ///
    /// Points on the boundary may report either way; use
    /// [`containment`](Self::containment) when boundary cases matter.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Classifies a point as inside, on the boundary, or outside.
    ///
    /// The boundary is an `eps`-wide band around the polygon edges; points
    /// within it report [`Containment::OnBoundary`]. Outside the band the
    /// even-odd rule decides.
    ///
    /// # Example
    ///
    /// ```
    /// use ringclip::polygon::{Containment, Polygon};
    /// use ringclip::Point2;
    ///
    /// let square = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    /// assert_eq!(square.containment(Point2::new(1.0, 1.0), 1e-9), Containment::Inside);
    /// assert_eq!(square.containment(Point2::new(2.0, 1.0), 1e-9), Containment::OnBoundary);
    /// assert_eq!(square.containment(Point2::new(3.0, 1.0), 1e-9), Containment::Outside);
    /// ```
    pub fn containment(&self, point: Point2<F>, eps: F) -> Containment {
        polygon_containment(&self.vertices, point, eps)
    }

    /// Validates the polygon as clipping input.
    ///
    /// Rejects polygons with fewer than three vertices and polygons with
    /// coincident consecutive vertices (the wrap-around pair included).
    pub fn validate(&self) -> Result<(), ClipError> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(ClipError::DegenerateInput { found: n });
        }

        for i in 0..n {
            if self.vertices[i] == self.vertices[(i + 1) % n] {
                return Err(ClipError::CoincidentVertices { index: i });
            }
        }

        Ok(())
    }
}

/// Computes the signed area of a vertex sequence (shoelace formula).
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    if n < 3 {
        return F::zero();
    }

    let mut twice_area = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area = twice_area + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }

    twice_area / F::from(2.0).unwrap()
}

/// Tests if a point is inside a vertex sequence using even-odd ray casting.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Classifies a point against a vertex sequence with an `eps` boundary band.
pub fn polygon_containment<F: Float>(
    vertices: &[Point2<F>],
    point: Point2<F>,
    eps: F,
) -> Containment {
    let n = vertices.len();
    if n < 3 {
        return Containment::Outside;
    }

    for i in 0..n {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);
        if point_on_segment(point, edge, eps) {
            return Containment::OnBoundary;
        }
    }

    if polygon_contains(vertices, point) {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Computes the crossing point of two line segments, if any.
///
/// Solves the 2x2 linear system for the segment parameters `t` (along
/// `p1 -> p2`) and `u` (along `p3 -> p4`). The denominator is compared
/// exactly against zero: parallel and collinear segment pairs yield `None`,
/// so collinear overlap is never reported as a crossing. Both parameters
/// must lie in the closed interval [0, 1]; endpoint touches count.
pub(crate) fn segment_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<(Point2<F>, F, F)> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let den = d1.cross(d2);
    if den == F::zero() {
        return None;
    }

    let w = p3 - p1;
    let t = w.cross(d2) / den;
    let u = w.cross(d1) / den;

    if t < F::zero() || t > F::one() || u < F::zero() || u > F::one() {
        return None;
    }

    Some((p1 + d1 * t, t, u))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon<f64> {
        Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square();
        assert_relative_eq!(ccw.signed_area(), 4.0, epsilon = 1e-12);

        let cw = ccw.reversed();
        assert_relative_eq!(cw.signed_area(), -4.0, epsilon = 1e-12);
        assert_relative_eq!(cw.area(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ensure_ccw() {
        let mut p = square().reversed();
        assert!(p.signed_area() < 0.0);
        p.ensure_ccw();
        assert!(p.signed_area() > 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let p = Polygon::from_coords(&[(1.0, 2.0), (3.0, 1.0), (4.0, 3.0), (2.0, 4.0)]);
        let (min, max) = p.bounding_box().unwrap();
        assert_eq!((min.x, min.y), (1.0, 1.0));
        assert_eq!((max.x, max.y), (4.0, 4.0));

        assert!(Polygon::<f64>::empty().bounding_box().is_none());
    }

    #[test]
    fn test_is_convex() {
        assert!(square().is_convex());

        let l_shape = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert!(!l_shape.is_convex());
    }

    #[test]
    fn test_contains() {
        let p = square();
        assert!(p.contains(Point2::new(1.0, 1.0)));
        assert!(!p.contains(Point2::new(3.0, 1.0)));
        assert!(!p.contains(Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_contains_concave() {
        let l_shape = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert!(l_shape.contains(Point2::new(0.5, 1.5)));
        // The notch is outside.
        assert!(!l_shape.contains(Point2::new(1.5, 1.5)));
    }

    #[test]
    fn test_containment_boundary() {
        let p = square();
        assert_eq!(p.containment(Point2::new(1.0, 1.0), 1e-9), Containment::Inside);
        assert_eq!(
            p.containment(Point2::new(2.0, 1.0), 1e-9),
            Containment::OnBoundary
        );
        assert_eq!(
            p.containment(Point2::new(0.0, 0.0), 1e-9),
            Containment::OnBoundary
        );
        assert_eq!(
            p.containment(Point2::new(2.1, 1.0), 1e-9),
            Containment::Outside
        );
    }

    #[test]
    fn test_validate_too_few() {
        let p = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(p.validate(), Err(ClipError::DegenerateInput { found: 2 }));
    }

    #[test]
    fn test_validate_coincident() {
        let p = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(p.validate(), Err(ClipError::CoincidentVertices { index: 1 }));

        // Wrap-around pair: an explicit closing point is rejected too.
        let closed = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(
            closed.validate(),
            Err(ClipError::CoincidentVertices { index: 3 })
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(square().validate().is_ok());
    }

    #[test]
    fn test_segment_intersection_crossing() {
        let (p, t, u) = segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(u, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_intersection_endpoint_touch() {
        // Touching at an endpoint counts: closed-interval acceptance.
        let hit = segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        );
        let (p, t, u) = hit.unwrap();
        assert_eq!(p, Point2::new(2.0, 0.0));
        assert_eq!(t, 1.0);
        assert_eq!(u, 0.0);
    }

    #[test]
    fn test_segment_intersection_miss() {
        // Lines cross, segments don't.
        assert!(segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, -1.0),
            Point2::new(3.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn test_segment_intersection_parallel() {
        assert!(segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn test_segment_intersection_collinear_overlap() {
        // Collinear overlap is reported as no crossing by design.
        assert!(segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
        )
        .is_none());
    }
}
