//! ringclip - general polygon clipping on linked vertex rings.
//!
//! Clips a subject polygon against a clip polygon, convex or not, producing
//! the overlap region as zero or more simple polygons. The engine splices
//! intersection vertices into a pair of doubly-linked vertex rings,
//! classifies them, and walks output polygons by switching rings at shared
//! crossing points; two classification rules are available via
//! [`polygon::ClipMode`].
//!
//! ```
//! use ringclip::polygon::{clip, ClipMode, Polygon};
//!
//! let subject = Polygon::from_coords(&[(0.0f64, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
//! let window = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
//!
//! let result = clip(&subject, &window, ClipMode::EntryExit).unwrap();
//! assert_eq!(result.len(), 1);
//! assert!((result[0].area() - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::ClipError;
pub use polygon::{clip, polygon_intersection, ClipMode, Containment, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{orient2d, point_on_segment, Orientation};
