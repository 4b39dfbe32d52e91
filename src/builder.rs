use crate::costs::{Cost, CostModel, EditOp};
use crate::error::EditError;
use crate::traits::{CharComparator, Ordinal};
use crate::utils::code_points;
use crate::DistanceEngine;

/// Fluent construction of a [`DistanceEngine`].
///
/// Costs are only validated in [`build`](Self::build), so the first negative
/// value set through the builder is the one reported.
pub struct DistanceEngineBuilder<C = Ordinal> {
    a: Vec<char>,
    b: Vec<char>,
    costs: [Cost; 4],
    comparator: C,
}

impl DistanceEngineBuilder<Ordinal> {
    pub fn new(a: &str, b: &str) -> Self {
        let defaults = CostModel::default();
        Self {
            a: code_points(a),
            b: code_points(b),
            costs: EditOp::ALL.map(|op| defaults.get(op)),
            comparator: Ordinal,
        }
    }
}

impl<C: CharComparator> DistanceEngineBuilder<C> {
    pub fn insert_cost(self, cost: Cost) -> Self {
        self.cost(EditOp::Insert, cost)
    }
    pub fn delete_cost(self, cost: Cost) -> Self {
        self.cost(EditOp::Delete, cost)
    }
    pub fn substitute_cost(self, cost: Cost) -> Self {
        self.cost(EditOp::Substitute, cost)
    }
    pub fn transpose_cost(self, cost: Cost) -> Self {
        self.cost(EditOp::Transpose, cost)
    }
    pub fn cost(mut self, op: EditOp, cost: Cost) -> Self {
        self.costs[op as usize] = cost;
        self
    }
    pub fn costs(mut self, costs: CostModel) -> Self {
        self.costs = EditOp::ALL.map(|op| costs.get(op));
        self
    }
    pub fn comparator<D: CharComparator>(self, comparator: D) -> DistanceEngineBuilder<D> {
        DistanceEngineBuilder {
            a: self.a,
            b: self.b,
            costs: self.costs,
            comparator,
        }
    }
    pub fn build(self) -> Result<DistanceEngine<C>, EditError> {
        let [insert, delete, substitute, transpose] = self.costs;
        let costs = CostModel::new(insert, delete, substitute, transpose)?;
        Ok(DistanceEngine::from_chars(
            self.a,
            self.b,
            costs,
            self.comparator,
        ))
    }
}
