//! Polygon type and clipping operations.
//!
//! The general engine in [`clip()`] intersects two simple polygons of any
//! shape; [`sutherland_hodgman`] is the fast path when the clip region is
//! convex, and [`polygon_intersection`] picks between them.
//!
//! # Example
//!
//! ```
//! use ringclip::polygon::{clip, ClipMode, Polygon};
//!
//! // Two overlapping squares.
//! let subject = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
//! let window = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
//!
//! let result = clip(&subject, &window, ClipMode::EntryExit).unwrap();
//! assert_eq!(result.len(), 1);
//! ```

mod clip;
mod convex;
mod core;
mod ring;

pub use clip::{clip, clip_with_tolerance, polygon_intersection, ClipMode};
pub use convex::sutherland_hodgman;
pub use core::{
    polygon_containment, polygon_contains, polygon_signed_area, Containment, Polygon,
};
