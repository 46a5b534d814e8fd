//! Minimum spanning tree computation over weighted undirected graphs.
//!
//! Two independent engines compute the same tree from the same vertex/edge
//! universe:
//! - [`kruskal`]: sorts all edges by weight and unions endpoints through a
//!   [`DisjointSet`], skipping edges that would close a cycle.
//! - [`prim`]: grows a single tree from a start vertex with a min-priority
//!   queue of candidate edges.
//!
//! [`compare`] cross-validates the two totals and prices the savings against
//! the original graph. Vertices are dense indices in `0..V`; arbitrary input
//! identifiers are remapped by [`crate::input`] before the engines run.

use num_traits::Float;

use crate::error::{Error, Result};

pub mod compare;
pub mod dsu;
pub mod kruskal;
pub mod prim;

pub use compare::{costs_match, savings, Savings, Verdict, COST_TOLERANCE};
pub use dsu::DisjointSet;

/// An undirected weighted edge between two dense vertex indices.
///
/// `(src, dst, w)` and `(dst, src, w)` denote the same edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src: usize, dst: usize, weight: W) -> Self {
        Self { src, dst, weight }
    }
}

/// Adjacency representation: vertex index to (neighbor, weight) pairs.
///
/// Symmetric for undirected graphs; built with [`adjacency_from_edges`].
/// Row count defines the vertex universe.
pub type AdjacencyList<W> = Vec<Vec<(usize, W)>>;

/// Outcome of one MST engine run.
///
/// `connected` is `false` when the engine exhausted its input with fewer than
/// `V - 1` edges selected; `total_cost` and `edges` then describe the partial
/// forest that was reachable. Callers decide whether that is acceptable.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<W> {
    pub total_cost: W,
    pub edges: Vec<Edge<W>>,
    pub connected: bool,
}

/// Builds the symmetric adjacency list over `num_vertices` dense-indexed
/// vertices. Every edge appears in both endpoints' rows.
///
/// # Errors
/// `Error::InvalidInput` if an edge references a vertex outside
/// `0..num_vertices`.
pub fn adjacency_from_edges<W: Float>(
    num_vertices: usize,
    edges: &[Edge<W>],
) -> Result<AdjacencyList<W>> {
    let mut adjacency = vec![Vec::new(); num_vertices];
    for edge in edges {
        if edge.src >= num_vertices || edge.dst >= num_vertices {
            return Err(Error::invalid_input(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                edge.src, edge.dst, num_vertices
            )));
        }
        adjacency[edge.src].push((edge.dst, edge.weight));
        adjacency[edge.dst].push((edge.src, edge.weight));
    }
    Ok(adjacency)
}
