//! Property-based tests for the disjoint set and the forest builders.
//!
//! Checks the disjoint-set invariants under random union sequences and
//! compares both builders against a naive relabelling oracle across
//! point layouts that stress distance ties.

mod oracle;
mod properties;
mod strategies;
mod types;
