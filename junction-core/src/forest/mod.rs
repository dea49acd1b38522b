//! Kruskal-style forest construction over a point set.
//!
//! Both builders drain the [`EdgeQueue`] in ascending order and feed each
//! edge to a fresh [`DisjointSet`]. They differ in when they stop:
//!
//! - [`cluster_product`] spends a fixed budget of edge extractions. Every
//!   extraction counts, including those whose endpoints already share a
//!   circuit.
//! - [`spanning_edge`] counts only merges that join two circuits and stops
//!   on the merge that leaves a single circuit.
//!
//! When the `metrics` feature is enabled the builders emit the
//! `forest_edges_popped` and `forest_merges` counters.

mod disjoint_set;

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    edges::{Edge, EdgeQueue},
    error::ForestError,
    point::Point,
};

pub use self::disjoint_set::DisjointSet;

/// Parameters for [`cluster_product`].
///
/// # Examples
/// ```
/// use junction_core::ClusterConfig;
///
/// let config = ClusterConfig::new(1000, 3);
/// assert_eq!(config.connections(), 1000);
/// assert_eq!(config.pick(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClusterConfig {
    connections: usize,
    pick: usize,
}

impl ClusterConfig {
    /// Creates a configuration that extracts up to `connections` edges and
    /// multiplies the `pick` largest component sizes.
    #[must_use]
    pub const fn new(connections: usize, pick: usize) -> Self {
        Self { connections, pick }
    }

    /// Returns the edge extraction budget.
    #[must_use]
    #[rustfmt::skip]
    pub const fn connections(&self) -> usize { self.connections }

    /// Returns how many of the largest components are multiplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pick(&self) -> usize { self.pick }
}

/// The edge whose merge connected the whole point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanningEdge {
    edge: Edge,
    left: Point,
    right: Point,
    popped: usize,
}

impl SpanningEdge {
    /// Returns the completing edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the point at the edge's smaller index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> Point { self.left }

    /// Returns the point at the edge's larger index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> Point { self.right }

    /// Returns how many edges were extracted, including the completing one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn popped(&self) -> usize { self.popped }

    /// Returns the product of the two endpoints' x coordinates.
    #[must_use]
    pub fn x_product(&self) -> i64 {
        i64::from(self.left.x()) * i64::from(self.right.x())
    }
}

/// Connects the closest pairs and multiplies the largest circuit sizes.
///
/// Extracts up to `config.connections()` edges (fewer when the queue runs
/// dry), unions each edge's endpoints, then multiplies the
/// `config.pick()` largest component sizes. Picking zero components yields
/// the empty product `1`.
///
/// # Errors
/// Returns [`ForestError::PickExceedsComponents`] when fewer than
/// `config.pick()` components remain, and [`ForestError::ProductOverflow`]
/// when the product does not fit in a `u64`.
///
/// # Examples
/// ```
/// use junction_core::{ClusterConfig, Point, cluster_product};
///
/// let points: Vec<Point> = (0..4).map(|x| Point::new(x, 0, 0)).collect();
/// let product = cluster_product(&points, ClusterConfig::new(2, 2))?;
/// assert_eq!(product, 3);
/// # Ok::<(), junction_core::ForestError>(())
/// ```
pub fn cluster_product(points: &[Point], config: ClusterConfig) -> Result<u64> {
    cluster_product_from_edges(points.len(), EdgeQueue::from_points(points), config)
}

#[instrument(
    name = "forest.cluster_product",
    err,
    skip(edges),
    fields(points = point_count, connections = config.connections, pick = config.pick),
)]
pub(crate) fn cluster_product_from_edges(
    point_count: usize,
    edges: impl IntoIterator<Item = Edge>,
    config: ClusterConfig,
) -> Result<u64> {
    let mut forest = DisjointSet::new(point_count);
    let mut merges = 0_usize;

    for edge in edges.into_iter().take(config.connections) {
        record_pop();
        if forest.union(edge.a(), edge.b()) {
            merges += 1;
            record_merge();
            debug!(a = edge.a(), b = edge.b(), merges, "joined circuits");
        }
    }

    let mut sizes = forest.component_sizes();
    sizes.sort_unstable_by(|left, right| right.cmp(left));
    let product = multiply_largest(&sizes, config.pick)?;

    info!(
        merges,
        components = sizes.len(),
        product,
        "cluster product computed"
    );
    Ok(product)
}

/// Finds the edge whose merge leaves every point in one circuit.
///
/// Edges are extracted in ascending order; only unions that join two
/// circuits count towards the `points.len() - 1` merges a spanning tree
/// needs.
///
/// # Errors
/// Returns [`ForestError::InsufficientPoints`] for fewer than two points and
/// [`ForestError::Disconnected`] when the edges run out first.
///
/// # Examples
/// ```
/// use junction_core::{Point, spanning_edge};
///
/// let points = [Point::new(2, 0, 0), Point::new(3, 0, 0), Point::new(10, 0, 0)];
/// let spanning = spanning_edge(&points)?;
/// assert_eq!((spanning.edge().a(), spanning.edge().b()), (1, 2));
/// assert_eq!(spanning.x_product(), 30);
/// # Ok::<(), junction_core::ForestError>(())
/// ```
pub fn spanning_edge(points: &[Point]) -> Result<SpanningEdge> {
    spanning_edge_from_edges(points, EdgeQueue::from_points(points))
}

#[instrument(
    name = "forest.spanning_edge",
    err,
    skip(points, edges),
    fields(points = points.len()),
)]
pub(crate) fn spanning_edge_from_edges(
    points: &[Point],
    edges: impl IntoIterator<Item = Edge>,
) -> Result<SpanningEdge> {
    let point_count = points.len();
    if point_count < 2 {
        return Err(ForestError::InsufficientPoints {
            points: point_count,
        });
    }

    let required = point_count - 1;
    let mut forest = DisjointSet::new(point_count);
    let mut merges = 0_usize;
    let mut popped = 0_usize;

    for edge in edges {
        popped += 1;
        record_pop();
        if !forest.union(edge.a(), edge.b()) {
            continue;
        }
        merges += 1;
        record_merge();
        debug!(a = edge.a(), b = edge.b(), merges, "joined circuits");

        if merges == required {
            let spanning = SpanningEdge {
                edge,
                left: points[edge.a()],
                right: points[edge.b()],
                popped,
            };
            info!(
                a = edge.a(),
                b = edge.b(),
                popped,
                x_product = spanning.x_product(),
                "forest fully connected"
            );
            return Ok(spanning);
        }
    }

    let components = forest.component_count();
    warn!(components, merges, popped, "edges exhausted before the forest connected");
    Err(ForestError::Disconnected { components, merges })
}

fn multiply_largest(sorted_sizes: &[usize], pick: usize) -> Result<u64> {
    if pick > sorted_sizes.len() {
        return Err(ForestError::PickExceedsComponents {
            pick,
            components: sorted_sizes.len(),
        });
    }

    sorted_sizes.iter().take(pick).try_fold(1_u64, |product, &size| {
        u64::try_from(size)
            .ok()
            .and_then(|size| product.checked_mul(size))
            .ok_or(ForestError::ProductOverflow { pick })
    })
}

#[cfg(feature = "metrics")]
fn record_pop() {
    metrics::counter!("forest_edges_popped").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_pop() {}

#[cfg(feature = "metrics")]
fn record_merge() {
    metrics::counter!("forest_merges").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_merge() {}

#[cfg(test)]
mod property;
