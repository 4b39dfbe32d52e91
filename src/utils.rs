//! Decoding helper and a distance-only variant of the recurrence.

use crate::costs::{Cost, CostModel};
use crate::traits::CharComparator;

/// Decode a string into its Unicode scalar values.
#[inline]
pub fn code_points(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Restricted Damerau-Levenshtein distance without materializing the table.
///
/// Keeps only the rows `i-2`, `i-1` and `i` alive, so memory is
/// `O(b.len())` while time stays `O(a.len() * b.len())`. The result is always
/// equal to [`crate::DistanceEngine::similarity`] for the same inputs, costs
/// and comparator. Like the engine, it saturates at `Cost::MAX`.
///
/// ```
/// use damerau_dp::{osa_distance, CostModel, Ordinal};
/// use damerau_dp::utils::code_points;
///
/// let a = code_points("пионер");
/// let b = code_points("поинер");
/// assert_eq!(osa_distance(&a, &b, &CostModel::default(), &Ordinal), 1);
/// ```
pub fn osa_distance<C>(a: &[char], b: &[char], costs: &CostModel, comparator: &C) -> Cost
where
    C: CharComparator + ?Sized,
{
    let m = b.len();
    let mut prev2: Vec<Cost> = vec![0; m + 1];
    let mut prev: Vec<Cost> = (0..=m)
        .map(|j| (j as Cost).saturating_mul(costs.insert()))
        .collect();
    let mut curr: Vec<Cost> = vec![0; m + 1];

    for i in 1..=a.len() {
        let ca = a[i - 1];
        curr[0] = (i as Cost).saturating_mul(costs.delete());
        for j in 1..=m {
            let cb = b[j - 1];
            let (sub_cost, trans_hint) = if comparator.same(ca, cb) {
                (0, 0)
            } else {
                (costs.substitute(), costs.transpose())
            };
            let del = prev[j].saturating_add(costs.delete());
            let ins = curr[j - 1].saturating_add(costs.insert());
            let sub = prev[j - 1].saturating_add(sub_cost);
            let mut best = del.min(ins).min(sub);

            if i > 1 && j > 1 && comparator.same(ca, b[j - 2]) && comparator.same(a[i - 2], cb) {
                best = best.min(prev2[j - 2].saturating_add(trans_hint));
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
