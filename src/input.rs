//! Edge-file loading: whitespace-delimited rows, dense remapping of arbitrary
//! vertex identifiers, and the absent-weight policy.
//!
//! The format is one edge per line, no header: `node1 node2 [weight]`.
//! Identifiers may be any non-negative integers, contiguous or not; every
//! distinct id is interned to the next free dense index so the engines can
//! work over `0..V`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexSet;
use log::{info, warn};
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::{adjacency_from_edges, AdjacencyList, Edge};

/// How edge weights are obtained from input rows.
///
/// Chosen explicitly by the caller; never inferred from which columns happen
/// to be present in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightPolicy {
    /// Every row must carry a numeric weight column (surveyed distances).
    Required,
    /// Rows without a weight column get one drawn uniformly from `lo..=hi`.
    Random { lo: u32, hi: u32 },
    /// Every edge counts 1, for unweighted connectivity data; a weight
    /// column, if present, is ignored.
    Unit,
}

impl WeightPolicy {
    /// Uniform synthetic weights in `1..=100`.
    pub fn random_default() -> Self {
        WeightPolicy::Random { lo: 1, hi: 100 }
    }
}

impl FromStr for WeightPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "required" => Ok(WeightPolicy::Required),
            "random" => Ok(WeightPolicy::random_default()),
            "unit" => Ok(WeightPolicy::Unit),
            other => Err(Error::invalid_input(format!(
                "unknown weight policy '{}', expected required, random or unit",
                other
            ))),
        }
    }
}

/// Explicit mapping between arbitrary input identifiers and dense indices.
///
/// Sparse and non-contiguous identifiers are fine: every distinct id gets the
/// next free index in first-seen order, and the original id stays recoverable
/// for reporting.
#[derive(Debug, Default, Clone)]
pub struct VertexMap {
    ids: IndexSet<u64>,
}

impl VertexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense index for `id`, interning it on first sight.
    pub fn index_of(&mut self, id: u64) -> usize {
        self.ids.insert_full(id).0
    }

    /// Dense index for `id` if it has been seen.
    pub fn get(&self, id: u64) -> Option<usize> {
        self.ids.get_index_of(&id)
    }

    /// Original identifier behind a dense index.
    pub fn id_of(&self, index: usize) -> Option<u64> {
        self.ids.get_index(index).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A fully parsed, densely indexed edge universe ready for the engines.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub edges: Vec<Edge<f64>>,
    pub vertices: VertexMap,
    /// Sum of all edge weights as loaded, before any tree is computed.
    pub original_total_weight: f64,
}

impl EdgeData {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Symmetric adjacency list over the dense index range, for Prim.
    pub fn adjacency(&self) -> Result<AdjacencyList<f64>> {
        adjacency_from_edges(self.num_vertices(), &self.edges)
    }
}

/// Reads a whitespace-delimited edge file. See [`parse_edges`].
pub fn read_edge_file<P: AsRef<Path>>(path: P, policy: WeightPolicy) -> Result<EdgeData> {
    let file = File::open(path)?;
    parse_edges(file, policy)
}

/// Parses edge rows from any reader.
///
/// Blank lines are skipped. Self-loops are dropped with a warning (they can
/// never join a spanning tree) but their endpoint still counts toward the
/// vertex universe.
///
/// # Errors
/// * `Error::MalformedInput` for a wrong column count, an unparsable field,
///   or a negative or non-finite weight, with the 1-based line number.
/// * `Error::NoVertices` if no vertex id was seen at all.
pub fn parse_edges<R: Read>(reader: R, policy: WeightPolicy) -> Result<EdgeData> {
    let mut vertices = VertexMap::new();
    let mut edges = Vec::new();
    let mut original_total_weight = 0.0;
    let mut rng = rand::thread_rng();

    for (number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 2 || fields.len() > 3 {
            return Err(Error::MalformedInput {
                line: number,
                msg: format!("expected 2 or 3 columns, found {}", fields.len()),
            });
        }

        let src_id: u64 = parse_field(fields[0], number)?;
        let dst_id: u64 = parse_field(fields[1], number)?;

        let weight = match policy {
            WeightPolicy::Unit => 1.0,
            WeightPolicy::Required => match fields.get(2) {
                Some(field) => parse_field(field, number)?,
                None => {
                    return Err(Error::MalformedInput {
                        line: number,
                        msg: "weight column required but missing".to_string(),
                    })
                }
            },
            WeightPolicy::Random { lo, hi } => match fields.get(2) {
                Some(field) => parse_field(field, number)?,
                None => f64::from(rng.gen_range(lo..=hi)),
            },
        };
        if weight < 0.0 || !weight.is_finite() {
            return Err(Error::MalformedInput {
                line: number,
                msg: format!("weight {} is negative or not finite", weight),
            });
        }

        if src_id == dst_id {
            warn!("line {}: ignoring self-loop on node {}", number, src_id);
            vertices.index_of(src_id);
            continue;
        }

        let src = vertices.index_of(src_id);
        let dst = vertices.index_of(dst_id);
        edges.push(Edge::new(src, dst, weight));
        original_total_weight += weight;
    }

    if vertices.is_empty() {
        return Err(Error::NoVertices);
    }

    info!(
        "loaded {} vertices and {} edges",
        vertices.len(),
        edges.len()
    );

    Ok(EdgeData {
        edges,
        vertices,
        original_total_weight,
    })
}

fn parse_field<T>(field: &str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|err| Error::MalformedInput {
        line,
        msg: format!("cannot parse '{}': {}", field, err),
    })
}
