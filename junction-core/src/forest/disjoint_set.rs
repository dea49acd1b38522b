//! Union-find (disjoint set union) used by the forest builders.
//!
//! The builders drain edges in non-decreasing order and merge the groups of
//! each endpoint. This module tracks group membership with union by size and
//! full path compression, so both `find` and `union` run in near-constant
//! amortised time.

use std::collections::HashMap;

/// Partition of `0..len` into disjoint groups.
///
/// # Examples
/// ```
/// use junction_core::DisjointSet;
///
/// let mut groups = DisjointSet::new(4);
/// assert!(groups.union(0, 1));
/// assert!(!groups.union(1, 0));
/// assert!(groups.connected(0, 1));
/// assert_eq!(groups.component_count(), 3);
///
/// let mut sizes = groups.component_sizes();
/// sizes.sort_unstable();
/// assert_eq!(sizes, [1, 1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton groups.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked by the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the set tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of distinct groups.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the group containing `node`.
    ///
    /// Every node visited on the way to the root is relinked directly to it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the groups containing `left` and `right`.
    ///
    /// Returns `false` without mutating anything when both already share a
    /// group. The smaller group is attached beneath the larger one; on equal
    /// sizes `right`'s root goes under `left`'s root.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut root = self.find(left);
        let mut child = self.find(right);
        if root == child {
            return false;
        }

        if self.size[root] < self.size[child] {
            std::mem::swap(&mut root, &mut child);
        }
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        true
    }

    /// Returns whether `left` and `right` share a group.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Returns the size of the group containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn group_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Returns the size of every distinct group, in no particular order.
    ///
    /// Sizes are tallied by resolving the root of every element.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut tally: HashMap<usize, usize> = HashMap::with_capacity(self.components);
        for node in 0..self.len() {
            let root = self.find(node);
            *tally.entry(root).or_insert(0) += 1;
        }
        tally.into_values().collect()
    }

    #[cfg(test)]
    pub(super) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    pub(super) fn root_size(&self, root: usize) -> usize {
        self.size[root]
    }
}
