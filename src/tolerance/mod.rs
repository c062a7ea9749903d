//! Epsilon-aware geometric predicates.
//!
//! Every function here takes its tolerance as an explicit parameter; no
//! hidden epsilons. The clip engine's segment-crossing solver is exact and
//! lives with the polygon code — only boundary classification is
//! tolerance-based.

mod predicates;

pub use predicates::{orient2d, point_on_segment, Orientation};
