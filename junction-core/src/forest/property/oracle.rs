//! Naive relabelling oracle for forest property verification.
//!
//! Sorts every pair by `(squared distance, a, b)` and tracks circuits with a
//! flat label vector, relabelling a whole circuit on every merge. Quadratic,
//! but obviously correct.

use crate::Point;

/// Circuit state after replaying a prefix of the sorted edges.
pub(super) struct OracleForest {
    labels: Vec<usize>,
}

impl OracleForest {
    fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    /// Returns `true` when `a` and `b` were in different circuits.
    fn merge(&mut self, a: usize, b: usize) -> bool {
        let (keep, drop) = (self.labels[a], self.labels[b]);
        if keep == drop {
            return false;
        }
        for label in &mut self.labels {
            if *label == drop {
                *label = keep;
            }
        }
        true
    }

    /// Returns circuit sizes sorted largest first.
    pub(super) fn sizes_descending(&self) -> Vec<usize> {
        let mut counts = vec![0_usize; self.labels.len()];
        for &label in &self.labels {
            counts[label] += 1;
        }
        let mut sizes: Vec<usize> = counts.into_iter().filter(|&count| count > 0).collect();
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        sizes
    }
}

/// Returns every pair as `(squared distance, a, b)` in drain order.
pub(super) fn sorted_pairs(points: &[Point]) -> Vec<(u128, usize, usize)> {
    let mut pairs = Vec::new();
    for a in 0..points.len() {
        for b in (a + 1)..points.len() {
            pairs.push((points[a].squared_distance(&points[b]), a, b));
        }
    }
    pairs.sort_unstable();
    pairs
}

/// Replays the first `connections` pairs.
pub(super) fn oracle_clusters(points: &[Point], connections: usize) -> OracleForest {
    let mut forest = OracleForest::new(points.len());
    for (_, a, b) in sorted_pairs(points).into_iter().take(connections) {
        forest.merge(a, b);
    }
    forest
}

/// Returns the pair whose merge leaves a single circuit.
pub(super) fn oracle_spanning_pair(points: &[Point]) -> Option<(usize, usize)> {
    let mut forest = OracleForest::new(points.len());
    let mut remaining = points.len().checked_sub(1)?;
    for (_, a, b) in sorted_pairs(points) {
        if forest.merge(a, b) {
            remaining -= 1;
            if remaining == 0 {
                return Some((a, b));
            }
        }
    }
    None
}
