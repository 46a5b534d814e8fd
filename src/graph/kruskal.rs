use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, warn};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::graph::dsu::DisjointSet;
use crate::graph::{Edge, MstResult};

/// Computes the minimum spanning tree of an undirected graph using Kruskal's
/// algorithm.
///
/// Edges are sorted by weight ascending (stable, so equal weights keep their
/// input order and repeated runs select the same tree) and greedily unioned
/// through a [`DisjointSet`]; an edge whose endpoints already share a root
/// would close a cycle and is skipped. The scan stops early once `V - 1`
/// edges are selected.
///
/// # Arguments
/// * `num_vertices` - Number of vertices; edges must reference indices in
///   `0..num_vertices`.
/// * `edges` - Candidate edges. The slice is never mutated; sorting happens
///   on a private copy.
///
/// # Returns
/// * `Ok(MstResult)` - Total cost and selected edges. If the graph is
///   disconnected, `connected` is `false` and the result is the minimum
///   spanning forest of the reachable components.
/// * `Err(Error)` - If an edge references an out-of-range vertex or carries a
///   negative or NaN weight.
///
/// # Examples
/// ```
/// use netspan::graph::{kruskal, Edge};
///
/// let edges = vec![
///     Edge::new(0, 1, 4.0),
///     Edge::new(0, 2, 2.0),
///     Edge::new(1, 2, 1.0),
/// ];
///
/// let mst = kruskal::minimum_spanning_tree(3, &edges).unwrap();
/// assert_eq!(mst.total_cost, 3.0);
/// ```
///
/// # Complexity
/// * Time: O(E log E) for the sort; union/find is inverse-Ackermann amortized
/// * Space: O(V + E)
pub fn minimum_spanning_tree<W>(num_vertices: usize, edges: &[Edge<W>]) -> Result<MstResult<W>>
where
    W: Float + Debug,
{
    for edge in edges {
        if edge.src >= num_vertices || edge.dst >= num_vertices {
            return Err(Error::invalid_input(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                edge.src, edge.dst, num_vertices
            )));
        }
        if edge.weight < W::zero() || edge.weight.is_nan() {
            return Err(Error::invalid_input(
                "Kruskal's algorithm requires non-negative weights",
            ));
        }
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let expected = num_vertices.saturating_sub(1);
    let mut dsu = DisjointSet::new(num_vertices);
    let mut total_cost = W::zero();
    let mut mst = Vec::with_capacity(expected);

    for edge in sorted {
        if dsu.union(edge.src, edge.dst) {
            total_cost = total_cost + edge.weight;
            debug!(
                "kruskal: taking edge ({}, {}) = {:?}",
                edge.src, edge.dst, edge.weight
            );
            mst.push(edge);
            if mst.len() == expected {
                break;
            }
        }
    }

    let connected = mst.len() == expected;
    if !connected {
        warn!(
            "kruskal: graph is disconnected, selected {} of {} edges",
            mst.len(),
            expected
        );
    }

    Ok(MstResult {
        total_cost,
        edges: mst,
        connected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let mst = minimum_spanning_tree::<f64>(0, &[]).unwrap();
        assert_eq!(mst.total_cost, 0.0);
        assert!(mst.edges.is_empty());
        assert!(mst.connected);
    }

    #[test]
    fn test_single_vertex_no_edges() {
        // Trivially connected: a one-vertex tree has zero edges.
        let mst = minimum_spanning_tree::<f64>(1, &[]).unwrap();
        assert_eq!(mst.total_cost, 0.0);
        assert!(mst.edges.is_empty());
        assert!(mst.connected);
    }

    #[test]
    fn test_isolated_vertices_no_edges() {
        let mst = minimum_spanning_tree::<f64>(3, &[]).unwrap();
        assert_eq!(mst.total_cost, 0.0);
        assert!(mst.edges.is_empty());
        assert!(!mst.connected);
    }

    #[test]
    fn test_single_edge() {
        let edges = vec![Edge::new(0, 1, 2.0)];
        let mst = minimum_spanning_tree(2, &edges).unwrap();
        assert_eq!(mst.edges, vec![Edge::new(0, 1, 2.0)]);
        assert_eq!(mst.total_cost, 2.0);
        assert!(mst.connected);
    }

    #[test]
    fn test_standard_graph() {
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 3.0),
            Edge::new(0, 3, 10.0),
            Edge::new(0, 2, 4.0),
        ];
        let mst = minimum_spanning_tree(4, &edges).unwrap();

        assert_eq!(mst.total_cost, 6.0);
        assert_eq!(
            mst.edges,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(2, 3, 3.0),
            ]
        );
        assert!(mst.connected);
    }

    #[test]
    fn test_disconnected_components() {
        // {0,1} and {2,3} with internal edges only: one edge short of
        // spanning, partial cost is the sum of the two internal minima.
        let edges = vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 2.0)];
        let mst = minimum_spanning_tree(4, &edges).unwrap();

        assert_eq!(mst.edges.len(), 2);
        assert_eq!(mst.total_cost, 3.0);
        assert!(!mst.connected);
    }

    #[test]
    fn test_parallel_edges() {
        let edges = vec![
            Edge::new(0, 1, 10.0),
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 5.0),
        ];
        let mst = minimum_spanning_tree(3, &edges).unwrap();

        assert_eq!(mst.edges.len(), 2);
        assert!(mst.edges.contains(&Edge::new(0, 1, 1.0)));
        assert!(mst.edges.contains(&Edge::new(1, 2, 5.0)));
    }

    #[test]
    fn test_deterministic_tie_break() {
        // Equal weights: the stable sort keeps input order, so the first
        // listed edge of each tied pair wins.
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(0, 2, 1.0),
        ];
        let first = minimum_spanning_tree(3, &edges).unwrap();
        let second = minimum_spanning_tree(3, &edges).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.edges,
            vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]
        );
    }

    #[test]
    fn test_idempotent_on_shared_input() {
        let edges = vec![
            Edge::new(0, 1, 3.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 0, 2.0),
        ];
        let first = minimum_spanning_tree(3, &edges).unwrap();
        let second = minimum_spanning_tree(3, &edges).unwrap();
        assert_eq!(first, second);
        // The caller's edge list is untouched and still in input order.
        assert_eq!(edges[0], Edge::new(0, 1, 3.0));
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        let edges = vec![Edge::new(0, 7, 1.0)];
        assert!(matches!(
            minimum_spanning_tree(3, &edges),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let edges = vec![Edge::new(0, 1, -1.0)];
        assert!(matches!(
            minimum_spanning_tree(2, &edges),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let edges = vec![Edge::new(0, 1, f64::NAN)];
        assert!(matches!(
            minimum_spanning_tree(2, &edges),
            Err(Error::InvalidInput(_))
        ));
    }
}
