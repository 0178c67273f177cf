//! Weighted edit distance engine.
//!
//! The engine owns the two operand words and a lazily filled table of
//! prefix-pair costs. `minimal_distance` answers the classic question
//! (cheapest way to turn `source` into `target` under the configured
//! costs); `transformation` replays one cheapest edit path as a sequence
//! of intermediate words.

use std::cell::OnceCell;

use crate::costs::CostTable;
use crate::walk::Transformation;

/// Minimum-cost edit distance between two words, with path replay.
///
/// Construction performs no work. The distance table is filled once, on
/// first use, and shared read-only by every later query and walk.
///
/// Typical usage:
/// ```
/// use editpath::DistanceEngine;
///
/// let engine = DistanceEngine::new("qwerty", "etz");
/// assert_eq!(engine.minimal_distance(), 4);
///
/// let steps: Vec<String> = engine.transformation().collect();
/// assert_eq!(steps.first().map(String::as_str), Some("qwerty"));
/// assert_eq!(steps.last().map(String::as_str), Some("etz"));
/// ```
pub struct DistanceEngine {
    source: Vec<char>,
    target: Vec<char>,
    costs: CostTable,
    memo: OnceCell<Vec<Vec<u64>>>,
}

impl DistanceEngine {
    /// Create an engine with unit costs for all three operations.
    pub fn new(source: &str, target: &str) -> Self {
        Self::with_costs(source, target, CostTable::default())
    }

    /// Create an engine with an explicit cost table.
    ///
    /// ```
    /// use editpath::{CostTable, DistanceEngine};
    ///
    /// // Substitution priced out: "A" -> "B" goes via delete plus insert.
    /// let engine = DistanceEngine::with_costs("A", "B", CostTable::new(1, 1, 100));
    /// assert_eq!(engine.minimal_distance(), 2);
    /// ```
    pub fn with_costs(source: &str, target: &str, costs: CostTable) -> Self {
        Self {
            source: source.chars().collect(),
            target: target.chars().collect(),
            costs,
            memo: OnceCell::new(),
        }
    }

    /// The configured cost table.
    pub fn costs(&self) -> CostTable {
        self.costs
    }

    /// Minimal total cost of transforming `source` into `target`.
    ///
    /// Idempotent: repeated calls reuse the filled table.
    pub fn minimal_distance(&self) -> u64 {
        self.prefix_distance(self.source.len(), self.target.len())
    }

    /// Replay one cheapest edit path as intermediate words.
    ///
    /// The iterator yields `source` itself first and then one word per
    /// applied edit; with positive costs the final word equals `target`.
    /// Every call returns a fresh walk starting over from `source`.
    pub fn transformation(&self) -> Transformation<'_> {
        Transformation::new(self)
    }

    /// Cheapest cost of turning the first `i` chars of `source` into the
    /// first `j` chars of `target`.
    pub(crate) fn prefix_distance(&self, i: usize, j: usize) -> u64 {
        self.table()[i][j]
    }

    pub(crate) fn source_chars(&self) -> &[char] {
        &self.source
    }

    pub(crate) fn target_chars(&self) -> &[char] {
        &self.target
    }

    fn table(&self) -> &[Vec<u64>] {
        self.memo.get_or_init(|| self.fill_table())
    }

    /// Fill the full (m+1) x (n+1) prefix-cost table bottom-up.
    ///
    /// Cell (i, j) holds the cheapest cost of turning the first `i` chars
    /// of `source` into the first `j` chars of `target`; row 0 and column
    /// 0 are pure runs of insertions and deletions.
    fn fill_table(&self) -> Vec<Vec<u64>> {
        let m = self.source.len();
        let n = self.target.len();
        let CostTable {
            insert,
            delete,
            replace,
        } = self.costs;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("fill_distance_table", rows = m + 1, cols = n + 1);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut dp = vec![vec![0u64; n + 1]; m + 1];
        for j in 1..=n {
            dp[0][j] = j as u64 * insert;
        }
        for i in 1..=m {
            dp[i][0] = i as u64 * delete;
        }
        for i in 1..=m {
            for j in 1..=n {
                let up = dp[i - 1][j] + delete;
                let left = dp[i][j - 1] + insert;
                let diag = dp[i - 1][j - 1]
                    + if self.source[i - 1] == self.target[j - 1] {
                        0
                    } else {
                        replace
                    };
                dp[i][j] = up.min(left).min(diag);
            }
        }
        dp
    }
}
