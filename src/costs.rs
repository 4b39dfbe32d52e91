//! Operation costs for the edit-distance recurrence.

use std::fmt;

use crate::error::EditError;

/// Integer type used for operation costs and matrix cells.
pub type Cost = i64;

/// The four edit operations the recurrence can charge for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Insert a code point into the first sequence.
    Insert,
    /// Delete a code point from the first sequence.
    Delete,
    /// Replace one code point by another.
    Substitute,
    /// Swap two adjacent code points.
    Transpose,
}

impl EditOp {
    pub const ALL: [EditOp; 4] = [
        EditOp::Insert,
        EditOp::Delete,
        EditOp::Substitute,
        EditOp::Transpose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EditOp::Insert => "insert",
            EditOp::Delete => "delete",
            EditOp::Substitute => "substitute",
            EditOp::Transpose => "transpose",
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated set of operation costs.
///
/// Every value is non-negative; negative costs are rejected with
/// [`EditError::NegativeCost`] at construction and on every update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CostModel {
    insert: Cost,
    delete: Cost,
    substitute: Cost,
    transpose: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            substitute: 1,
            transpose: 1,
        }
    }
}

impl CostModel {
    pub fn new(
        insert: Cost,
        delete: Cost,
        substitute: Cost,
        transpose: Cost,
    ) -> Result<Self, EditError> {
        let mut costs = Self::default();
        costs.set(EditOp::Insert, insert)?;
        costs.set(EditOp::Delete, delete)?;
        costs.set(EditOp::Substitute, substitute)?;
        costs.set(EditOp::Transpose, transpose)?;
        Ok(costs)
    }

    #[inline]
    pub fn insert(&self) -> Cost {
        self.insert
    }

    #[inline]
    pub fn delete(&self) -> Cost {
        self.delete
    }

    #[inline]
    pub fn substitute(&self) -> Cost {
        self.substitute
    }

    #[inline]
    pub fn transpose(&self) -> Cost {
        self.transpose
    }

    /// Cost of a single operation.
    pub fn get(&self, op: EditOp) -> Cost {
        match op {
            EditOp::Insert => self.insert,
            EditOp::Delete => self.delete,
            EditOp::Substitute => self.substitute,
            EditOp::Transpose => self.transpose,
        }
    }

    /// Update the cost of `op`.
    ///
    /// Returns `Ok(true)` if the stored value changed, `Ok(false)` if it was
    /// already `value`. On error nothing is modified.
    pub fn set(&mut self, op: EditOp, value: Cost) -> Result<bool, EditError> {
        if value < 0 {
            return Err(EditError::NegativeCost { op, value });
        }
        let slot = match op {
            EditOp::Insert => &mut self.insert,
            EditOp::Delete => &mut self.delete,
            EditOp::Substitute => &mut self.substitute,
            EditOp::Transpose => &mut self.transpose,
        };
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        Ok(true)
    }

    /// Substitution cost capped at the price of a delete followed by an insert.
    #[inline]
    pub fn effective_substitute(&self) -> Cost {
        self.substitute.min(self.delete.saturating_add(self.insert))
    }
}
