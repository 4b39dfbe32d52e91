//! Character comparison strategy used by the distance engine.
//!
//! The matrix fill never compares code points directly; it asks a
//! [`CharComparator`] whether two of them are "the same character". Swapping
//! the comparator changes what counts as a match (and as a transposed pair)
//! without touching the recurrence itself.

use std::cmp::Ordering;

/// Equality/ordering primitive over single code points.
///
/// Only [`Ordering::Equal`] is significant to the distance computation; the
/// full ordering is kept so that comparators can be reused for sorting.
///
/// Any `Fn(char, char) -> Ordering` is a comparator:
/// ```
/// use damerau_dp::{CostModel, DistanceEngine};
///
/// let case_blind = |a: char, b: char| {
///     a.to_lowercase().cmp(b.to_lowercase())
/// };
/// let mut engine = DistanceEngine::with_comparator("Ven", "ven", CostModel::default(), case_blind);
/// assert_eq!(engine.similarity(), 0);
/// ```
pub trait CharComparator {
    /// Compare two code points.
    fn compare(&self, a: char, b: char) -> Ordering;

    /// Returns true if `a` and `b` count as the same character.
    #[inline]
    fn same(&self, a: char, b: char) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Ordinal comparison of Unicode scalar values. The default comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ordinal;

impl CharComparator for Ordinal {
    #[inline]
    fn compare(&self, a: char, b: char) -> Ordering {
        a.cmp(&b)
    }
}

impl<F> CharComparator for F
where
    F: Fn(char, char) -> Ordering,
{
    #[inline]
    fn compare(&self, a: char, b: char) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_is_code_point_order() {
        assert_eq!(Ordinal.compare('a', 'b'), Ordering::Less);
        assert_eq!(Ordinal.compare('я', 'a'), Ordering::Greater);
        assert!(Ordinal.same('ф', 'ф'));
        assert!(!Ordinal.same('a', 'A'));
    }

    #[test]
    fn closures_are_comparators() {
        let always_equal = |_: char, _: char| Ordering::Equal;
        assert!(always_equal.same('x', 'y'));

        let case_blind = |a: char, b: char| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
        assert!(case_blind.same('Q', 'q'));
        assert!(!case_blind.same('q', 'w'));
    }
}
