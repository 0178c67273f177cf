use crate::costs::CostTable;
use crate::engine::DistanceEngine;

pub struct DistanceEngineBuilder {
    source: String,
    target: String,
    costs: CostTable,
}

impl DistanceEngineBuilder {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_owned(),
            target: target.to_owned(),
            costs: CostTable::default(),
        }
    }
    pub fn insert_cost(mut self, cost: u64) -> Self {
        self.costs.insert = cost;
        self
    }
    pub fn delete_cost(mut self, cost: u64) -> Self {
        self.costs.delete = cost;
        self
    }
    pub fn replace_cost(mut self, cost: u64) -> Self {
        self.costs.replace = cost;
        self
    }
    pub fn costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }
    pub fn build(self) -> DistanceEngine {
        DistanceEngine::with_costs(&self.source, &self.target, self.costs)
    }
}
