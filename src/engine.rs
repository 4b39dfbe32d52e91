//! Cached Damerau-Levenshtein engine.
//!
//! The engine owns two code-point sequences, a [`CostModel`] and a
//! [`CharComparator`]. The dynamic-programming table is built lazily on the
//! first query and reused until a cost or an input changes:
//!
//! ```text
//!            fill()                    cost / input change
//!   Dirty ───────────▶ Fresh(matrix) ─────────────────────▶ Dirty
//! ```
//!
//! Every query refills a dirty table before reading it, so no caller ever
//! observes a table computed for stale costs.

use crate::costs::{Cost, CostModel, EditOp};
use crate::error::EditError;
use crate::matrix::DistanceMatrix;
use crate::traits::{CharComparator, Ordinal};
use crate::utils::code_points;

/// Cache state of the dynamic-programming table.
#[derive(Clone, Debug)]
enum MatrixState {
    /// No table, or one computed for different costs/inputs.
    Dirty,
    /// Table matching the current costs and inputs.
    Fresh(DistanceMatrix),
}

/// Restricted Damerau-Levenshtein distance between two sequences.
///
/// Typical usage:
/// ```
/// use damerau_dp::DistanceEngine;
///
/// let mut engine = DistanceEngine::new("O'Callaghan", "OCallaghan");
/// assert_eq!(engine.similarity(), 1);
/// assert_eq!(engine.maximal_distance(), 11);
/// let rel = engine.relative_distance();
/// assert!((rel - 10.0 / 11.0).abs() < 1e-9);
/// ```
///
/// Queries take `&mut self` since they may refill the cached table. The
/// engine is not meant to be shared between threads without a lock.
#[derive(Clone, Debug)]
pub struct DistanceEngine<C = Ordinal> {
    a: Vec<char>,
    b: Vec<char>,
    costs: CostModel,
    comparator: C,
    state: MatrixState,
}

impl DistanceEngine<Ordinal> {
    /// Engine over `a` and `b` with unit costs and ordinal comparison.
    pub fn new(a: &str, b: &str) -> Self {
        Self::with_costs(a, b, CostModel::default())
    }

    /// Engine over `a` and `b` with explicit costs and ordinal comparison.
    pub fn with_costs(a: &str, b: &str, costs: CostModel) -> Self {
        Self::with_comparator(a, b, costs, Ordinal)
    }
}

impl<C: CharComparator> DistanceEngine<C> {
    /// Engine with explicit costs and a custom notion of character equality.
    pub fn with_comparator(a: &str, b: &str, costs: CostModel, comparator: C) -> Self {
        Self::from_chars(code_points(a), code_points(b), costs, comparator)
    }

    /// Engine over already-decoded code-point sequences.
    pub fn from_chars(a: Vec<char>, b: Vec<char>, costs: CostModel, comparator: C) -> Self {
        Self {
            a,
            b,
            costs,
            comparator,
            state: MatrixState::Dirty,
        }
    }

    /// Number of code points in the first sequence.
    #[inline]
    pub fn len_a(&self) -> usize {
        self.a.len()
    }

    /// Number of code points in the second sequence.
    #[inline]
    pub fn len_b(&self) -> usize {
        self.b.len()
    }

    /// The first sequence, as decoded code points.
    pub fn first(&self) -> &[char] {
        &self.a
    }

    /// The second sequence, as decoded code points.
    pub fn second(&self) -> &[char] {
        &self.b
    }

    /// The comparator deciding which code points match.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns true if the cached table matches the current costs and inputs.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        matches!(self.state, MatrixState::Fresh(_))
    }

    /// Replace both inputs. The table is rebuilt on the next query.
    pub fn set_sequences(&mut self, a: &str, b: &str) {
        self.a = code_points(a);
        self.b = code_points(b);
        self.invalidate("sequences");
    }

    /// Absolute edit distance, `matrix[len_a][len_b]`.
    ///
    /// Zero if and only if the sequences are equal under the comparator
    /// (for strictly positive costs).
    pub fn similarity(&mut self) -> Cost {
        let (n, m) = (self.a.len(), self.b.len());
        self.ensure_fresh().get(n, m)
    }

    /// Full dynamic-programming table.
    pub fn matrix(&mut self) -> &DistanceMatrix {
        self.ensure_fresh()
    }

    /// Closed-form normalization bound.
    ///
    /// Substitute across the common length (or delete + insert when that is
    /// cheaper), then delete or insert the length difference. This is not a
    /// tight maximum over all edit sequences and is never read from the table.
    /// Saturates at `Cost::MAX`.
    pub fn maximal_distance(&self) -> Cost {
        let (n, m) = (self.a.len(), self.b.len());
        let common = n.min(m) as Cost;
        let extra = n.abs_diff(m) as Cost;
        let extra_cost = if n > m {
            self.costs.delete()
        } else {
            self.costs.insert()
        };
        self.costs
            .effective_substitute()
            .saturating_mul(common)
            .saturating_add(extra.saturating_mul(extra_cost))
    }

    /// `1 - similarity / maximal_distance`: 1.0 for identical sequences, 0.0
    /// for sequences as far apart as the bound allows.
    ///
    /// When the bound is zero (both sequences empty, or every relevant cost is
    /// zero) there is nothing to normalize and the result is 1.0.
    pub fn relative_distance(&mut self) -> f64 {
        let distance = self.similarity();
        let maximal = self.maximal_distance();
        if maximal == 0 {
            return 1.0;
        }
        1.0 - distance as f64 / maximal as f64
    }

    /// Text rendering of the table for diagnostics.
    pub fn display_matrix(&mut self) -> String {
        let (matrix, a, b) = self.fresh_parts();
        matrix.render(a, b)
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn insert_cost(&self) -> Cost {
        self.costs.insert()
    }

    pub fn delete_cost(&self) -> Cost {
        self.costs.delete()
    }

    pub fn substitute_cost(&self) -> Cost {
        self.costs.substitute()
    }

    pub fn transpose_cost(&self) -> Cost {
        self.costs.transpose()
    }

    /// Set the cost of inserting a code point into the first sequence.
    pub fn set_insert_cost(&mut self, cost: Cost) -> Result<(), EditError> {
        self.set_cost(EditOp::Insert, cost)
    }

    /// Set the cost of deleting a code point from the first sequence.
    pub fn set_delete_cost(&mut self, cost: Cost) -> Result<(), EditError> {
        self.set_cost(EditOp::Delete, cost)
    }

    pub fn set_substitute_cost(&mut self, cost: Cost) -> Result<(), EditError> {
        self.set_cost(EditOp::Substitute, cost)
    }

    pub fn set_transpose_cost(&mut self, cost: Cost) -> Result<(), EditError> {
        self.set_cost(EditOp::Transpose, cost)
    }

    /// Set one operation cost. Only an actual change invalidates the table;
    /// a rejected value leaves both the costs and the table untouched.
    pub fn set_cost(&mut self, op: EditOp, cost: Cost) -> Result<(), EditError> {
        if self.costs.set(op, cost)? {
            self.invalidate(op.name());
        }
        Ok(())
    }

    /// Replace the whole cost model.
    pub fn set_costs(&mut self, costs: CostModel) {
        if self.costs != costs {
            self.costs = costs;
            self.invalidate("costs");
        }
    }

    /// Drop the cached table; `cause` names what changed.
    #[inline]
    fn invalidate(&mut self, cause: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(cause, "matrix marked dirty");
        #[cfg(not(feature = "tracing"))]
        let _ = cause;
        self.state = MatrixState::Dirty;
    }

    #[inline]
    fn ensure_fresh(&mut self) -> &DistanceMatrix {
        self.fresh_parts().0
    }

    /// Fill the table if it is dirty and return it with both sequences.
    fn fresh_parts(&mut self) -> (&DistanceMatrix, &[char], &[char]) {
        if let MatrixState::Dirty = self.state {
            let matrix = self.fill();
            self.state = MatrixState::Fresh(matrix);
        }
        match &self.state {
            MatrixState::Fresh(matrix) => (matrix, &self.a, &self.b),
            MatrixState::Dirty => unreachable!("table filled above"),
        }
    }

    /// Build the full `(len_a + 1) x (len_b + 1)` table from scratch.
    ///
    /// Cells saturate at `Cost::MAX` instead of overflowing.
    fn fill(&self) -> DistanceMatrix {
        let (n, m) = (self.a.len(), self.b.len());
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_matrix", len_a = n, len_b = m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let ins_cost = self.costs.insert();
        let del_cost = self.costs.delete();
        let mut dp = DistanceMatrix::zeroed(n + 1, m + 1);

        for i in 1..=n {
            dp.set(i, 0, dp.get(i - 1, 0).saturating_add(del_cost));
        }
        for j in 1..=m {
            dp.set(0, j, dp.get(0, j - 1).saturating_add(ins_cost));
        }

        for i in 1..=n {
            let ca = self.a[i - 1];
            for j in 1..=m {
                let cb = self.b[j - 1];
                let (sub_cost, trans_hint) = if self.comparator.same(ca, cb) {
                    (0, 0)
                } else {
                    (self.costs.substitute(), self.costs.transpose())
                };

                let del = dp.get(i - 1, j).saturating_add(del_cost);
                let ins = dp.get(i, j - 1).saturating_add(ins_cost);
                let sub = dp.get(i - 1, j - 1).saturating_add(sub_cost);
                let mut best = del.min(ins).min(sub);

                // Adjacent transposition of the last two code points.
                if i > 1
                    && j > 1
                    && self.comparator.same(ca, self.b[j - 2])
                    && self.comparator.same(self.a[i - 2], cb)
                {
                    best = best.min(dp.get(i - 2, j - 2).saturating_add(trans_hint));
                }
                dp.set(i, j, best);
            }
        }

        dp
    }
}
