//! Convex clipping via the Sutherland-Hodgman half-plane filter.

use crate::polygon::core::Polygon;
use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// Clips `subject` against a convex `clip` polygon.
///
/// Each clip edge cuts the running vertex list against its half-plane, so
/// the result is always a single polygon (possibly empty). The subject may
/// be concave; the clip polygon must be convex and may wind either way.
/// Points on a clip edge count as inside.
///
/// For non-convex clip regions use the general engine in
/// [`clip()`](crate::polygon::clip()) instead.
///
/// # Example
///
/// ```
/// use ringclip::polygon::{sutherland_hodgman, Polygon};
///
/// let subject = Polygon::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
/// let clip = Polygon::from_coords(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);
///
/// let result = sutherland_hodgman(&subject, &clip);
/// assert_eq!(result.len(), 4);
/// ```
pub fn sutherland_hodgman<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>) -> Polygon<F> {
    if subject.is_empty() || clip.is_empty() {
        return Polygon::empty();
    }

    // A clockwise clip polygon flips which side of each edge is "inside".
    let interior = if clip.signed_area() >= F::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    };

    let mut output = subject.vertices.clone();
    let clip_n = clip.vertices.len();

    for i in 0..clip_n {
        if output.is_empty() {
            break;
        }

        let edge_start = clip.vertices[i];
        let edge_end = clip.vertices[(i + 1) % clip_n];

        let input = std::mem::take(&mut output);
        let input_n = input.len();

        for j in 0..input_n {
            let current = input[j];
            let next = input[(j + 1) % input_n];

            let current_in = inside_half_plane(current, edge_start, edge_end, interior);
            let next_in = inside_half_plane(next, edge_start, edge_end, interior);

            if current_in {
                output.push(current);
            }
            if current_in != next_in {
                if let Some(crossing) = line_intersection(current, next, edge_start, edge_end) {
                    output.push(crossing);
                }
            }
        }
    }

    Polygon::new(output)
}

/// Tests whether `point` lies on the interior side of a directed clip edge.
#[inline]
fn inside_half_plane<F: Float>(
    point: Point2<F>,
    edge_start: Point2<F>,
    edge_end: Point2<F>,
    interior: Orientation,
) -> bool {
    match orient2d(edge_start, edge_end, point, F::epsilon()) {
        Orientation::Collinear => true,
        o => o == interior,
    }
}

/// Intersects the infinite lines through two point pairs.
fn line_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let den = d1.cross(d2);
    if den == F::zero() {
        return None;
    }

    let t = (p3 - p1).cross(d2) / den;
    Some(p1 + d1 * t)
}
