use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use log::{debug, warn};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyList, Edge, MstResult};

/// Entry in the priority queue for Prim's algorithm.
#[derive(Copy, Clone, Debug)]
struct Candidate<W> {
    cost: W,
    vertex: usize,
    parent: usize,
}

impl<W: Float> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Float> Eq for Candidate<W> {}

impl<W: Float> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Float> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap. Ties break on vertex then parent index so
        // the pop order is fully determined. Weights are validated non-NaN
        // before entering the heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

/// Computes the minimum spanning tree of an undirected graph using Prim's
/// algorithm.
///
/// The tree grows from `start`: a min-priority queue holds candidate edges
/// from visited to unvisited vertices, and the cheapest one is taken each
/// round. Entries whose target has been visited in the meantime are stale and
/// simply discarded when popped, which is how the queue tolerates duplicates
/// without eager removal.
///
/// The adjacency list defines the vertex universe: the graph has
/// `adjacency.len()` vertices and row `i` lists vertex `i`'s neighbors. Rows
/// must only reference indices below `adjacency.len()`, which
/// [`crate::graph::adjacency_from_edges`] guarantees.
///
/// # Arguments
/// * `adjacency` - Symmetric adjacency list of the undirected graph
/// * `start` - Vertex the tree is grown from
///
/// # Returns
/// * `Ok(MstResult)` - Total cost and selected edges, each recorded as
///   (tree vertex, grown vertex, weight). If the graph is disconnected from
///   `start`, `connected` is `false` and the result covers the reachable
///   component only.
/// * `Err(Error)` - If `start` is out of range or a traversed edge carries a
///   negative or NaN weight.
///
/// # Examples
/// ```
/// use netspan::graph::{adjacency_from_edges, prim, Edge};
///
/// let edges = vec![
///     Edge::new(0, 1, 4.0),
///     Edge::new(0, 2, 2.0),
///     Edge::new(1, 2, 1.0),
/// ];
/// let adjacency = adjacency_from_edges(3, &edges).unwrap();
///
/// let mst = prim::minimum_spanning_tree(&adjacency, 0).unwrap();
/// assert_eq!(mst.total_cost, 3.0);
/// ```
///
/// # Complexity
/// * Time: O(E log V)
/// * Space: O(V + E)
pub fn minimum_spanning_tree<W>(adjacency: &AdjacencyList<W>, start: usize) -> Result<MstResult<W>>
where
    W: Float + Debug,
{
    let num_vertices = adjacency.len();
    if num_vertices == 0 {
        return Ok(MstResult {
            total_cost: W::zero(),
            edges: Vec::new(),
            connected: true,
        });
    }
    if start >= num_vertices {
        return Err(Error::invalid_input(format!(
            "start vertex {} out of range for {} vertices",
            start, num_vertices
        )));
    }

    let mut visited = vec![false; num_vertices];
    visited[start] = true;
    let mut visited_count = 1;

    let mut heap = BinaryHeap::new();
    push_incident(adjacency, start, &visited, &mut heap)?;

    let mut total_cost = W::zero();
    let mut mst = Vec::with_capacity(num_vertices - 1);

    while let Some(Candidate {
        cost,
        vertex,
        parent,
    }) = heap.pop()
    {
        if visited[vertex] {
            // Stale entry: both endpoints joined the tree since this edge was
            // queued, taking it would close a cycle.
            continue;
        }
        visited[vertex] = true;
        visited_count += 1;
        total_cost = total_cost + cost;
        debug!("prim: taking edge ({}, {}) = {:?}", parent, vertex, cost);
        mst.push(Edge::new(parent, vertex, cost));
        if visited_count == num_vertices {
            break;
        }
        push_incident(adjacency, vertex, &visited, &mut heap)?;
    }

    let connected = visited_count == num_vertices;
    if !connected {
        warn!(
            "prim: graph is disconnected, reached {} of {} vertices from {}",
            visited_count, num_vertices, start
        );
    }

    Ok(MstResult {
        total_cost,
        edges: mst,
        connected,
    })
}

/// Queues every edge from `vertex` to a still-unvisited neighbor.
fn push_incident<W>(
    adjacency: &AdjacencyList<W>,
    vertex: usize,
    visited: &[bool],
    heap: &mut BinaryHeap<Candidate<W>>,
) -> Result<()>
where
    W: Float + Debug,
{
    for &(neighbor, weight) in &adjacency[vertex] {
        if weight < W::zero() || weight.is_nan() {
            return Err(Error::invalid_input(
                "Prim's algorithm requires non-negative weights",
            ));
        }
        if !visited[neighbor] {
            heap.push(Candidate {
                cost: weight,
                vertex: neighbor,
                parent: vertex,
            });
        }
    }
    Ok(())
}
