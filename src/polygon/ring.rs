//! Linked vertex rings backing the general clipping engine.
//!
//! A ring stores its vertices in an arena (`Vec`) and links them into a
//! cycle through `next`/`prev` indices, so splicing in intersection
//! vertices never moves existing ones and cross-ring references stay
//! stable. Arena order is insertion order: original vertices first, then
//! intersection vertices in the order the insertion pass created them.

use crate::primitives::Point2;
use num_traits::Float;

/// Entry/exit directive carried by intersection vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    Unset,
    Entry,
    Exit,
}

/// One arena slot of a ring.
#[derive(Debug, Clone)]
pub(crate) struct RingVertex<F> {
    pub point: Point2<F>,
    pub next: usize,
    pub prev: usize,
    /// True for vertices created by the intersection-insertion pass.
    pub is_intersection: bool,
    pub classification: Classification,
    /// Inbound/outbound directive; only meaningful on intersection vertices.
    pub inbound: bool,
    /// Inside/outside marking of original vertices (inbound/outbound mode).
    pub inside: bool,
    /// Parametric position along the originating edge, for ordering
    /// multiple intersections that share an edge.
    pub alpha: F,
}

/// A closed polygon boundary as a cyclic doubly-linked vertex arena.
///
/// Invariant: `verts[verts[i].next].prev == i` for every live index `i`.
/// Mutation is insertion-only.
#[derive(Debug, Clone)]
pub(crate) struct Ring<F> {
    verts: Vec<RingVertex<F>>,
}

impl<F: Float> Ring<F> {
    /// Builds a ring from an ordered vertex sequence (at least 3 points,
    /// already validated).
    pub fn from_vertices(points: &[Point2<F>]) -> Self {
        let n = points.len();
        debug_assert!(n >= 3);

        let verts = points
            .iter()
            .enumerate()
            .map(|(i, &point)| RingVertex {
                point,
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
                is_intersection: false,
                classification: Classification::Unset,
                inbound: false,
                inside: false,
                alpha: F::zero(),
            })
            .collect();

        Self { verts }
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn vertex(&self, index: usize) -> &RingVertex<F> {
        &self.verts[index]
    }

    pub fn vertex_mut(&mut self, index: usize) -> &mut RingVertex<F> {
        &mut self.verts[index]
    }

    /// Splices a new intersection vertex immediately before `anchor` in
    /// ring order and returns its arena index.
    pub fn insert_before(&mut self, anchor: usize, point: Point2<F>, alpha: F) -> usize {
        let index = self.verts.len();
        let prev = self.verts[anchor].prev;

        self.verts.push(RingVertex {
            point,
            next: anchor,
            prev,
            is_intersection: true,
            classification: Classification::Unset,
            inbound: false,
            inside: false,
            alpha,
        });

        self.verts[prev].next = index;
        self.verts[anchor].prev = index;
        index
    }

    /// Visits every arena index once, in ring order, starting from the
    /// first original vertex.
    pub fn ring_order(&self) -> RingOrder<'_, F> {
        RingOrder {
            ring: self,
            current: 0,
            remaining: self.verts.len(),
        }
    }

    #[cfg(test)]
    pub fn check_cycle(&self) -> bool {
        let n = self.verts.len();
        let mut seen = 0usize;
        let mut i = 0usize;
        loop {
            if self.verts[self.verts[i].next].prev != i {
                return false;
            }
            seen += 1;
            i = self.verts[i].next;
            if i == 0 {
                break;
            }
            if seen > n {
                return false;
            }
        }
        seen == n
    }
}

pub(crate) struct RingOrder<'a, F> {
    ring: &'a Ring<F>,
    current: usize,
    remaining: usize,
}

impl<F: Float> Iterator for RingOrder<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.current;
        self.current = self.ring.verts[index].next;
        Some(index)
    }
}

/// Accumulates the coordinates of one output polygon during traversal.
///
/// Pushing a coordinate already present marks the ring closed instead of
/// appending; the traversal pass uses that as its completion signal. The
/// membership test is exact coordinate equality, which suffices because
/// paired intersection vertices carry bit-identical coordinates.
#[derive(Debug)]
pub(crate) struct RingBuilder<F> {
    points: Vec<Point2<F>>,
    closed: bool,
}

impl<F: Float> RingBuilder<F> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            closed: false,
        }
    }

    pub fn push(&mut self, point: Point2<F>) {
        if self.points.iter().any(|&p| p == point) {
            self.closed = true;
        } else {
            self.points.push(point);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }
}
