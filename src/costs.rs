//! Per-operation edit costs.
//!
//! A `CostTable` travels with the engine that owns it; two engines over
//! the same pair of words may charge different prices for the same edits.

/// Costs charged for the three edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTable {
    /// Cost of inserting one character.
    pub insert: u64,
    /// Cost of deleting one character.
    pub delete: u64,
    /// Cost of substituting one character for another.
    pub replace: u64,
}

impl CostTable {
    /// Build a table from explicit per-operation costs.
    pub fn new(insert: u64, delete: u64, replace: u64) -> Self {
        Self {
            insert,
            delete,
            replace,
        }
    }
}

impl Default for CostTable {
    /// Unit costs for every operation, the classic Levenshtein regime.
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CostTable;

    #[test]
    fn default_is_unit_costs() {
        let costs = CostTable::default();
        assert_eq!(costs.insert, 1);
        assert_eq!(costs.delete, 1);
        assert_eq!(costs.replace, 1);
    }

    #[test]
    fn new_keeps_argument_order() {
        let costs = CostTable::new(2, 3, 5);
        assert_eq!(costs.insert, 2);
        assert_eq!(costs.delete, 3);
        assert_eq!(costs.replace, 5);
    }
}
