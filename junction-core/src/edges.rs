//! Pairwise edge generation for point sets.
//!
//! Every unordered pair of points becomes an [`Edge`]. The [`EdgeQueue`]
//! yields them smallest-first; equal distances fall back to the lower `a`
//! index and then the lower `b` index so the drain order is fully
//! deterministic.
//!
//! Ordering is driven by the exact integer squared distance rather than the
//! rounded square root, which preserves the Euclidean order without any
//! floating-point coincidences.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::point::Point;

/// A candidate connection between two points, in canonical form (`a < b`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    squared_distance: u128,
    a: usize,
    b: usize,
}

impl Edge {
    /// Builds the edge between `points[a]` and `points[b]`.
    ///
    /// Callers must pass `a < b`, both in range for `points`.
    pub(crate) fn between(points: &[Point], a: usize, b: usize) -> Self {
        debug_assert!(a < b, "edges are canonicalised with a < b");
        Self {
            squared_distance: points[a].squared_distance(&points[b]),
            a,
            b,
        }
    }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn a(&self) -> usize { self.a }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn b(&self) -> usize { self.b }

    /// Returns the exact squared Euclidean length of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn squared_distance(&self) -> u128 { self.squared_distance }

    /// Returns the Euclidean length of the edge.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.squared_distance as f64).sqrt()
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squared_distance
            .cmp(&other.squared_distance)
            .then_with(|| self.a.cmp(&other.a))
            .then_with(|| self.b.cmp(&other.b))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered queue over every pairwise edge of a point set.
///
/// # Examples
/// ```
/// use junction_core::{EdgeQueue, Point};
///
/// let points = [Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(0, 0, 0)];
/// let order: Vec<(usize, usize)> = EdgeQueue::from_points(&points)
///     .map(|edge| (edge.a(), edge.b()))
///     .collect();
/// assert_eq!(order, [(0, 2), (0, 1), (1, 2)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeQueue {
    heap: BinaryHeap<Reverse<Edge>>,
}

impl EdgeQueue {
    /// Generates the edge for every pair `i < j` of `points`.
    ///
    /// Fewer than two points produce an empty queue.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let count = points.len();
        let mut edges = Vec::with_capacity(count.saturating_mul(count.saturating_sub(1)) / 2);
        for a in 0..count {
            for b in (a + 1)..count {
                edges.push(Reverse(Edge::between(points, a, b)));
            }
        }
        Self {
            heap: BinaryHeap::from(edges),
        }
    }

    /// Removes and returns the shortest remaining edge.
    pub fn pop(&mut self) -> Option<Edge> {
        self.heap.pop().map(|Reverse(edge)| edge)
    }

    /// Returns the shortest remaining edge without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Edge> {
        self.heap.peek().map(|Reverse(edge)| edge)
    }

    /// Returns the number of edges still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether every edge has been drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Iterator for EdgeQueue {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for EdgeQueue {}
