//! Junction core library.
//!
//! Wires 3D junction boxes into circuits by repeatedly connecting the
//! closest remaining pair, using a size-balanced, path-compressed
//! [`DisjointSet`] to track which boxes already share a circuit.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edges;
mod error;
mod forest;
mod point;
#[cfg(test)]
mod test_utils;

pub use crate::{
    edges::{Edge, EdgeQueue},
    error::{ForestError, ForestErrorCode, Result},
    forest::{ClusterConfig, DisjointSet, SpanningEdge, cluster_product, spanning_edge},
    point::Point,
};
