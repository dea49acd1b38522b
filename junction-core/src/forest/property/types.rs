//! Fixture types for forest property tests.

use test_strategy::Arbitrary;

use crate::Point;

/// Spatial layout used when synthesising a point set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum PointLayout {
    /// Points sampled uniformly from a cube.
    #[weight(3)]
    Scattered,
    /// Tight groups around a few far-apart centres.
    #[weight(3)]
    Clustered,
    /// Evenly spaced points on the x axis; every neighbour gap ties.
    #[weight(2)]
    Collinear,
    /// Scattered points with exact duplicates mixed in.
    #[weight(2)]
    Duplicates,
}

/// Generated point set together with the builder parameters under test.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Input-ordered points.
    pub points: Vec<Point>,
    /// Edge extraction budget handed to the cluster builder.
    pub connections: usize,
    /// Layout used during generation.
    pub layout: PointLayout,
}
