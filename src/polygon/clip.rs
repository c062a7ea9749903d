//! General polygon clipping on linked vertex rings.
//!
//! Computes the intersection of two simple polygons, convex or not, as a
//! set of output polygons. The engine runs in three passes over a pair of
//! doubly-linked vertex rings:
//!
//! 1. **Insertion** - every subject edge is tested against every clip edge;
//!    each crossing spawns a paired intersection vertex in both rings,
//!    spliced in at its parametric position along the edge.
//! 2. **Classification** - intersection vertices receive a traversal
//!    directive, either entry/exit toggling ([`ClipMode::EntryExit`]) or
//!    successor-inside marking ([`ClipMode::InboundOutbound`]).
//! 3. **Traversal** - output polygons are walked out of the two rings,
//!    switching rings at each intersection vertex and closing when a
//!    coordinate repeats.
//!
//! Known limitation: collinear overlapping edge pairs produce no crossing
//! (the solver's denominator test rejects them exactly), so inputs whose
//! boundaries share a collinear segment are not resolved specially. Inputs
//! that merely share isolated vertices or touch at edge endpoints are fine.

use std::collections::HashMap;

use crate::error::ClipError;
use crate::polygon::convex::sutherland_hodgman;
use crate::polygon::core::{segment_intersection, Containment, Polygon};
use crate::polygon::ring::{Classification, Ring, RingBuilder};
use crate::primitives::Point2;
use num_traits::Float;

/// Selects the classification rule driving ring traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// Toggle-based classification in the Greiner-Hormann style:
    /// intersection vertices alternate between entering and leaving the
    /// clip region along each ring. Insensitive to winding order.
    EntryExit,
    /// Successor-based classification in the Weiler-Atherton style: an
    /// intersection vertex is inbound when its ring-successor lies inside
    /// (or on) the clip polygon. Its direction convention expects the clip
    /// ring to wind opposite to the subject (subject counter-clockwise,
    /// clip clockwise) for partially overlapping inputs, and the successor
    /// test only sees original vertices, so subject edges carrying more
    /// than one crossing can defeat it. [`EntryExit`](ClipMode::EntryExit)
    /// is the robust choice for such inputs.
    InboundOutbound,
}

/// Clips `subject` against `clip`, returning the overlap region(s).
///
/// Both polygons may be concave. The result is a sequence of closed simple
/// polygons without repeated closing points; an empty sequence means the
/// inputs do not overlap. When one input fully contains the other, the
/// inner polygon is returned unchanged.
///
/// Uses a boundary tolerance of `F::epsilon().sqrt()` for the containment
/// tests of the classification pass; [`clip_with_tolerance`] accepts an
/// explicit value.
///
/// # Errors
///
/// [`ClipError::DegenerateInput`] if either polygon has fewer than three
/// vertices, [`ClipError::CoincidentVertices`] if either carries coincident
/// consecutive points.
///
/// # Example
///
/// ```
/// use ringclip::polygon::{clip, ClipMode, Polygon};
///
/// let subject = Polygon::from_coords(&[(0.0f64, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
/// let window = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
///
/// let result = clip(&subject, &window, ClipMode::EntryExit).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!((result[0].area() - 1.0).abs() < 1e-9);
/// ```
pub fn clip<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    mode: ClipMode,
) -> Result<Vec<Polygon<F>>, ClipError> {
    clip_with_tolerance(subject, clip, mode, F::epsilon().sqrt())
}

/// [`clip`] with an explicit boundary tolerance for containment tests.
pub fn clip_with_tolerance<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    mode: ClipMode,
    boundary_eps: F,
) -> Result<Vec<Polygon<F>>, ClipError> {
    subject.validate()?;
    clip.validate()?;

    // Pass 1: crossings are computed over the original edges only, so the
    // edge list is snapshotted by construction before any splicing happens.
    let crossings = find_crossings(subject, clip);
    if crossings.is_empty() {
        return Ok(resolve_no_crossings(subject, clip, boundary_eps));
    }

    let mut subject_ring = Ring::from_vertices(&subject.vertices);
    let mut clip_ring = Ring::from_vertices(&clip.vertices);

    // Inbound/outbound marking tests only original vertices, so it runs
    // before the rings grow.
    if mode == ClipMode::InboundOutbound {
        mark_inside(&mut subject_ring, clip, boundary_eps);
    }

    let neighbors = insert_crossings(&mut subject_ring, &mut clip_ring, &crossings);

    // Pass 2.
    match mode {
        ClipMode::EntryExit => {
            classify_entry_exit(&mut clip_ring, subject, boundary_eps);
            classify_entry_exit(&mut subject_ring, clip, boundary_eps);
        }
        ClipMode::InboundOutbound => classify_inbound(&mut subject_ring),
    }

    // Pass 3.
    Ok(trace(&subject_ring, &clip_ring, &neighbors, mode))
}

/// Intersection of two polygons, with fast paths.
///
/// Empty inputs yield an empty result; disjoint bounding boxes are rejected
/// without touching an edge; a convex clip (or subject) goes through the
/// Sutherland-Hodgman filter; only the general concave-concave case runs
/// the ring engine in entry/exit mode.
///
/// # Example
///
/// ```
/// use ringclip::polygon::{polygon_intersection, Polygon};
///
/// let a = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
/// let b = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
///
/// let result = polygon_intersection(&a, &b).unwrap();
/// assert_eq!(result.len(), 1);
/// ```
pub fn polygon_intersection<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Result<Vec<Polygon<F>>, ClipError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    a.validate()?;
    b.validate()?;

    if let (Some((min_a, max_a)), Some((min_b, max_b))) = (a.bounding_box(), b.bounding_box()) {
        if max_a.x < min_b.x || max_b.x < min_a.x || max_a.y < min_b.y || max_b.y < min_a.y {
            return Ok(Vec::new());
        }
    }

    if b.is_convex() {
        let clipped = sutherland_hodgman(a, b);
        return Ok(if clipped.len() < 3 { Vec::new() } else { vec![clipped] });
    }
    if a.is_convex() {
        let clipped = sutherland_hodgman(b, a);
        return Ok(if clipped.len() < 3 { Vec::new() } else { vec![clipped] });
    }

    clip(a, b, ClipMode::EntryExit)
}

/// One crossing between a subject edge and a clip edge.
#[derive(Debug, Clone)]
struct Crossing<F> {
    s_edge: usize,
    c_edge: usize,
    point: Point2<F>,
    alpha_s: F,
    alpha_c: F,
}

/// Mutual pairing between the two rings' intersection vertices, kept as a
/// side mapping of arena indices rather than links on the vertices.
struct NeighborMap {
    subject_to_clip: HashMap<usize, usize>,
    clip_to_subject: HashMap<usize, usize>,
}

/// Enumerates every subject-edge x clip-edge crossing.
fn find_crossings<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>) -> Vec<Crossing<F>> {
    let n_s = subject.vertices.len();
    let n_c = clip.vertices.len();
    let mut crossings = Vec::new();

    for i in 0..n_s {
        let s0 = subject.vertices[i];
        let s1 = subject.vertices[(i + 1) % n_s];

        for j in 0..n_c {
            let c0 = clip.vertices[j];
            let c1 = clip.vertices[(j + 1) % n_c];

            if let Some((point, alpha_s, alpha_c)) = segment_intersection(s0, s1, c0, c1) {
                crossings.push(Crossing {
                    s_edge: i,
                    c_edge: j,
                    point,
                    alpha_s,
                    alpha_c,
                });
            }
        }
    }

    crossings
}

/// Splices all crossings into both rings and returns the neighbor pairing.
fn insert_crossings<F: Float>(
    subject_ring: &mut Ring<F>,
    clip_ring: &mut Ring<F>,
    crossings: &[Crossing<F>],
) -> NeighborMap {
    let mut subject_to_clip = HashMap::with_capacity(crossings.len());
    let mut clip_to_subject = HashMap::with_capacity(crossings.len());

    for c in crossings {
        let in_subject = insert_on_edge(subject_ring, c.s_edge, c.point, c.alpha_s);
        let in_clip = insert_on_edge(clip_ring, c.c_edge, c.point, c.alpha_c);
        subject_to_clip.insert(in_subject, in_clip);
        clip_to_subject.insert(in_clip, in_subject);
    }

    NeighborMap {
        subject_to_clip,
        clip_to_subject,
    }
}

/// Splices one crossing into its edge at alpha-sorted position.
///
/// An edge can carry several crossings, discovered in any order; inserting
/// each one after the already-present intersection vertices with smaller
/// alpha keeps the edge monotonic in ring order. The walk from the edge's
/// start vertex only ever crosses intersection vertices spliced into this
/// same edge before it reaches the edge's original end vertex, which is
/// never an intersection and stops the scan.
fn insert_on_edge<F: Float>(
    ring: &mut Ring<F>,
    edge_start: usize,
    point: Point2<F>,
    alpha: F,
) -> usize {
    let mut anchor = ring.vertex(edge_start).next;
    while ring.vertex(anchor).is_intersection && ring.vertex(anchor).alpha <= alpha {
        anchor = ring.vertex(anchor).next;
    }
    ring.insert_before(anchor, point, alpha)
}

/// No crossings: the inputs either nest or are disjoint, decided by two
/// containment-or-touching tests of each polygon's first vertex.
fn resolve_no_crossings<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    eps: F,
) -> Vec<Polygon<F>> {
    if clip.containment(subject.vertices[0], eps) != Containment::Outside {
        vec![subject.clone()]
    } else if subject.containment(clip.vertices[0], eps) != Containment::Outside {
        vec![clip.clone()]
    } else {
        Vec::new()
    }
}

/// Marks original vertices inside (or on) the clip polygon.
fn mark_inside<F: Float>(ring: &mut Ring<F>, clip: &Polygon<F>, eps: F) {
    for i in 0..ring.len() {
        let p = ring.vertex(i).point;
        if clip.containment(p, eps) != Containment::Outside {
            ring.vertex_mut(i).inside = true;
        }
    }
}

/// Entry/exit classification of one ring's intersection vertices.
///
/// The initial status comes from testing the ring's first vertex against
/// the opposite polygon: a ring starting inside it must exit first. Each
/// intersection vertex in ring order takes the current status, which then
/// toggles.
fn classify_entry_exit<F: Float>(ring: &mut Ring<F>, opposite: &Polygon<F>, eps: F) {
    let first = ring.vertex(0).point;
    let mut status = if opposite.containment(first, eps) == Containment::Inside {
        Classification::Exit
    } else {
        Classification::Entry
    };

    let order: Vec<usize> = ring.ring_order().collect();
    for i in order {
        if ring.vertex(i).is_intersection {
            ring.vertex_mut(i).classification = status;
            status = match status {
                Classification::Entry => Classification::Exit,
                _ => Classification::Entry,
            };
        }
    }
}

/// Inbound marking of the subject ring's intersection vertices.
///
/// An intersection vertex is inbound when its ring-successor was marked
/// inside the clip polygon. Only original vertices carry that mark, so an
/// intersection whose successor is another intersection vertex counts as
/// outbound.
fn classify_inbound<F: Float>(ring: &mut Ring<F>) {
    for i in 0..ring.len() {
        if !ring.vertex(i).is_intersection {
            continue;
        }
        let inbound = ring.vertex(ring.vertex(i).next).inside;
        ring.vertex_mut(i).inbound = inbound;
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Subject,
    Clip,
}

/// Whether traversal leaves `index` walking forward along its ring.
fn walks_forward<F: Float>(ring: &Ring<F>, index: usize, mode: ClipMode) -> bool {
    match mode {
        ClipMode::EntryExit => ring.vertex(index).classification == Classification::Entry,
        ClipMode::InboundOutbound => ring.vertex(index).inbound,
    }
}

/// Walks output polygons out of the linked rings.
///
/// Each polygon starts at the first unprocessed subject intersection vertex
/// in arena (insertion) order, follows its ring forward or backward per the
/// traversal directive until the next intersection vertex, hops to the
/// paired ring there, and closes when it appends a coordinate it already
/// holds. Subject intersection vertices are marked processed as they are
/// visited on either ring, so the outer scan strictly shrinks its work and
/// terminates.
fn trace<F: Float>(
    subject_ring: &Ring<F>,
    clip_ring: &Ring<F>,
    neighbors: &NeighborMap,
    mode: ClipMode,
) -> Vec<Polygon<F>> {
    let mut processed = vec![false; subject_ring.len()];
    let mut results = Vec::new();

    while let Some(seed) = next_unprocessed(subject_ring, &processed) {
        processed[seed] = true;

        let mut builder = RingBuilder::new();
        builder.push(subject_ring.vertex(seed).point);

        let mut side = Side::Subject;
        let mut current = seed;

        loop {
            let ring = match side {
                Side::Subject => subject_ring,
                Side::Clip => clip_ring,
            };
            let forward = walks_forward(ring, current, mode);

            loop {
                current = if forward {
                    ring.vertex(current).next
                } else {
                    ring.vertex(current).prev
                };
                let v = ring.vertex(current);
                builder.push(v.point);

                match side {
                    Side::Subject => processed[current] = true,
                    Side::Clip => {
                        if v.is_intersection {
                            if let Some(&twin) = neighbors.clip_to_subject.get(&current) {
                                processed[twin] = true;
                            }
                        }
                    }
                }

                if v.is_intersection {
                    break;
                }
            }

            current = match side {
                Side::Subject => neighbors.subject_to_clip[&current],
                Side::Clip => neighbors.clip_to_subject[&current],
            };
            side = match side {
                Side::Subject => Side::Clip,
                Side::Clip => Side::Subject,
            };

            if builder.is_closed() {
                break;
            }
        }

        results.push(Polygon::new(builder.into_points()));
    }

    results
}

/// First unprocessed subject intersection vertex in arena order.
fn next_unprocessed<F: Float>(ring: &Ring<F>, processed: &[bool]) -> Option<usize> {
    (0..ring.len()).find(|&i| ring.vertex(i).is_intersection && !processed[i])
}
