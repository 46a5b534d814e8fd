//! Cross-validation of the two MST engines and savings arithmetic.
//!
//! Kruskal's and Prim's runs are independent; agreement of their totals is a
//! strong correctness signal, and the difference between the original graph
//! weight and the MST cost is what the tree actually buys.

use approx::abs_diff_eq;
use log::warn;

use crate::graph::MstResult;

/// Absolute tolerance for agreement between the two engines' totals.
pub const COST_TOLERANCE: f64 = 1e-9;

/// Whether two MST totals agree within [`COST_TOLERANCE`].
pub fn costs_match(a: f64, b: f64) -> bool {
    abs_diff_eq!(a, b, epsilon = COST_TOLERANCE)
}

/// Verdict of the engine cross-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Both engines produced the same total cost.
    Match,
    /// The totals disagree beyond tolerance. Both results remain valid
    /// candidates: on a disconnected graph each engine may have reached a
    /// different-sized partial forest.
    Mismatch { kruskal_cost: f64, prim_cost: f64 },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

/// Cross-validates the totals of the two engines.
///
/// A mismatch is surfaced as a warning, never a fatal error; the caller keeps
/// both results and decides what to do with them.
pub fn validate(kruskal: &MstResult<f64>, prim: &MstResult<f64>) -> Verdict {
    if costs_match(kruskal.total_cost, prim.total_cost) {
        Verdict::Match
    } else {
        warn!(
            "MST costs disagree: kruskal = {}, prim = {}",
            kruskal.total_cost, prim.total_cost
        );
        Verdict::Mismatch {
            kruskal_cost: kruskal.total_cost,
            prim_cost: prim.total_cost,
        }
    }
}

/// Savings of the spanning tree relative to the full input graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    /// Weight removed by keeping only the tree.
    pub absolute: f64,
    /// `absolute` as a percentage of the original total; 0 when the original
    /// graph had no weight.
    pub percent: f64,
    /// `absolute` priced at the configured cost per unit of length.
    pub monetary: f64,
}

/// Computes the economic savings of replacing the original graph with its MST.
pub fn savings(original_total: f64, mst_cost: f64, cost_per_unit: f64) -> Savings {
    let absolute = original_total - mst_cost;
    let percent = if original_total > 0.0 {
        absolute / original_total * 100.0
    } else {
        0.0
    };
    Savings {
        absolute,
        percent,
        monetary: absolute * cost_per_unit,
    }
}
