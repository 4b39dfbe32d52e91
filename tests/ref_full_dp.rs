use std::collections::HashMap;

use damerau_dp::{osa_distance, utils::code_points, Cost, CostModel, DistanceEngine, Ordinal};
use proptest::prelude::*;

/// Top-down restricted Damerau-Levenshtein straight from the definition.
fn reference_distance(a: &[char], b: &[char], costs: &CostModel) -> Cost {
    fn go(
        a: &[char],
        b: &[char],
        i: usize,
        j: usize,
        costs: &CostModel,
        memo: &mut HashMap<(usize, usize), Cost>,
    ) -> Cost {
        if i == 0 {
            return j as Cost * costs.insert();
        }
        if j == 0 {
            return i as Cost * costs.delete();
        }
        if let Some(&d) = memo.get(&(i, j)) {
            return d;
        }
        let equal = a[i - 1] == b[j - 1];
        let sub_cost = if equal { 0 } else { costs.substitute() };
        let mut best = (go(a, b, i - 1, j, costs, memo) + costs.delete())
            .min(go(a, b, i, j - 1, costs, memo) + costs.insert())
            .min(go(a, b, i - 1, j - 1, costs, memo) + sub_cost);
        if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
            let trans = if equal { 0 } else { costs.transpose() };
            best = best.min(go(a, b, i - 2, j - 2, costs, memo) + trans);
        }
        memo.insert((i, j), best);
        best
    }
    go(a, b, a.len(), b.len(), costs, &mut HashMap::new())
}

fn cost_model() -> impl Strategy<Value = CostModel> {
    (0i64..5, 0i64..5, 0i64..5, 0i64..5)
        .prop_map(|(i, d, s, t)| CostModel::new(i, d, s, t).expect("non-negative costs"))
}

proptest! {
    #[test]
    fn unit_costs_match_strsim(a in "[abcd]{0,10}", b in "[abcd]{0,10}") {
        let mut engine = DistanceEngine::new(&a, &b);
        prop_assert_eq!(engine.similarity(), strsim::osa_distance(&a, &b) as Cost);
    }

    #[test]
    fn unicode_unit_costs_match_strsim(a in "[αβγдж]{0,8}", b in "[αβγдж]{0,8}") {
        let mut engine = DistanceEngine::new(&a, &b);
        prop_assert_eq!(engine.similarity(), strsim::osa_distance(&a, &b) as Cost);
    }

    #[test]
    fn weighted_costs_match_reference(
        a in "[abc]{0,8}",
        b in "[abc]{0,8}",
        costs in cost_model(),
    ) {
        let (ca, cb) = (code_points(&a), code_points(&b));
        let expected = reference_distance(&ca, &cb, &costs);
        let mut engine = DistanceEngine::with_costs(&a, &b, costs);
        prop_assert_eq!(engine.similarity(), expected);
        prop_assert_eq!(osa_distance(&ca, &cb, &costs, &Ordinal), expected);
    }

    #[test]
    fn every_cell_matches_prefix_distance(
        a in "[ab]{0,6}",
        b in "[ab]{0,6}",
        costs in cost_model(),
    ) {
        let (ca, cb) = (code_points(&a), code_points(&b));
        let mut engine = DistanceEngine::with_costs(&a, &b, costs);
        let matrix = engine.matrix();
        prop_assert_eq!(matrix.rows(), ca.len() + 1);
        prop_assert_eq!(matrix.cols(), cb.len() + 1);
        prop_assert_eq!(matrix.get(0, 0), 0);
        for i in 0..=ca.len() {
            for j in 0..=cb.len() {
                prop_assert_eq!(matrix.get(i, j), reference_distance(&ca[..i], &cb[..j], &costs));
            }
        }
    }

    #[test]
    fn identity(s in "\\PC{0,12}", costs in cost_model()) {
        let mut engine = DistanceEngine::with_costs(&s, &s, costs);
        prop_assert_eq!(engine.similarity(), 0);
    }

    #[test]
    fn relative_distance_of_identical_is_one(s in "\\PC{1,12}") {
        let mut engine = DistanceEngine::new(&s, &s);
        prop_assert_eq!(engine.relative_distance(), 1.0);
    }

    #[test]
    fn symmetric_when_insert_equals_delete(
        a in "[abcd]{0,8}",
        b in "[abcd]{0,8}",
        indel in 0i64..5,
        sub in 0i64..5,
        trans in 0i64..5,
    ) {
        let costs = CostModel::new(indel, indel, sub, trans).unwrap();
        let forward = DistanceEngine::with_costs(&a, &b, costs).similarity();
        let backward = DistanceEngine::with_costs(&b, &a, costs).similarity();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn bounded_by_maximal_distance(
        a in "[abcd]{0,10}",
        b in "[abcd]{0,10}",
        costs in cost_model(),
    ) {
        let mut engine = DistanceEngine::with_costs(&a, &b, costs);
        let distance = engine.similarity();
        prop_assert!(distance >= 0);
        prop_assert!(distance <= engine.maximal_distance());
        let rel = engine.relative_distance();
        prop_assert!((0.0..=1.0).contains(&rel), "relative distance {} out of range", rel);
    }
}
