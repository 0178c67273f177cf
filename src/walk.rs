//! Backward replay of one cheapest edit path.
//!
//! The walk starts at the end of both words and follows the filled cost
//! table back towards the origin. Every move it takes is materialised as
//! a full intermediate word, so the yielded sequence runs forward: the
//! source first, then one word per applied edit, ending at the target.

use crate::engine::DistanceEngine;
use crate::utils::insert_at;

/// Candidate costs for the moves available at one position of the walk.
///
/// `None` marks a move that is not available there: at a table boundary
/// only one move exists, on a character match the substitution is dead
/// (skipping is free), and on a mismatch the skip is dead.
#[derive(Debug, Default, Clone, Copy)]
struct StepCandidates {
    deletion: Option<u64>,
    insertion: Option<u64>,
    substitution: Option<u64>,
    skip: Option<u64>,
}

/// Iterator over the intermediate words of one cheapest transformation.
///
/// Created by [`DistanceEngine::transformation`]. The first item is the
/// source word; every further item reflects exactly one applied edit, so
/// consecutive items always differ. Walks are independent of each other
/// and each one restarts from the source.
///
/// # Panics
///
/// `next` panics if the remaining cost matches no move candidate, which
/// indicates an inconsistent distance table.
pub struct Transformation<'a> {
    engine: &'a DistanceEngine,
    /// Source prefix length still unprocessed.
    i: usize,
    /// Target prefix length still unprocessed.
    j: usize,
    remaining: u64,
    /// Working copy of the source; deleted slots become `None`.
    draft: Vec<Option<char>>,
    started: bool,
}

impl<'a> Transformation<'a> {
    pub(crate) fn new(engine: &'a DistanceEngine) -> Self {
        Self {
            engine,
            i: engine.source_chars().len(),
            j: engine.target_chars().len(),
            remaining: 0,
            draft: engine.source_chars().iter().copied().map(Some).collect(),
            started: false,
        }
    }

    /// Score the moves available at the current position.
    fn candidates(&self) -> StepCandidates {
        if self.i == 0 && self.j > 0 {
            // Source exhausted; only insertions remain.
            return StepCandidates {
                insertion: Some(self.remaining),
                ..StepCandidates::default()
            };
        }
        if self.j == 0 && self.i > 0 {
            // Target exhausted; only deletions remain.
            return StepCandidates {
                deletion: Some(self.remaining),
                ..StepCandidates::default()
            };
        }
        if self.i == 0 && self.j == 0 {
            return StepCandidates::default();
        }

        let engine = self.engine;
        let costs = engine.costs();
        let matches = engine.source_chars()[self.i - 1] == engine.target_chars()[self.j - 1];
        let diag = engine.prefix_distance(self.i - 1, self.j - 1);

        StepCandidates {
            deletion: Some(engine.prefix_distance(self.i - 1, self.j) + costs.insert),
            insertion: Some(engine.prefix_distance(self.i, self.j - 1) + costs.delete),
            substitution: if matches {
                None
            } else {
                Some(diag + costs.replace)
            },
            skip: if matches { Some(diag) } else { None },
        }
    }

    /// Take one backward step. Returns the new word, or `None` for a
    /// skip, which changes no character.
    ///
    /// Moves are tried in fixed priority order: skip, substitution,
    /// deletion, insertion. Ties between equally cheap paths therefore
    /// always resolve the same way.
    fn advance(&mut self) -> Option<String> {
        let candidates = self.candidates();
        let remaining = self.remaining;
        let costs = self.engine.costs();

        if candidates.skip == Some(remaining) {
            self.i -= 1;
            self.j -= 1;
            return None;
        }
        if candidates.substitution == Some(remaining) {
            self.draft[self.i - 1] = Some(self.engine.target_chars()[self.j - 1]);
            self.remaining = remaining.saturating_sub(costs.replace);
            self.i -= 1;
            self.j -= 1;
            return Some(self.render());
        }
        if candidates.deletion == Some(remaining) {
            self.draft[self.i - 1] = None;
            self.remaining = remaining.saturating_sub(costs.delete);
            self.i -= 1;
            return Some(self.render());
        }
        if candidates.insertion == Some(remaining) {
            let slot = Some(self.engine.target_chars()[self.j - 1]);
            self.draft = insert_at(&self.draft, self.i as isize, slot);
            self.remaining = remaining.saturating_sub(costs.insert);
            self.j -= 1;
            return Some(self.render());
        }
        panic!(
            "remaining cost {remaining} matches no edit candidate at prefix lengths ({}, {})",
            self.i, self.j
        );
    }

    /// The current working copy with deleted slots filtered out.
    fn render(&self) -> String {
        self.draft.iter().flatten().collect()
    }
}

impl Iterator for Transformation<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            self.remaining = self.engine.minimal_distance();
            #[cfg(feature = "tracing")]
            tracing::trace!(remaining = self.remaining, "transformation walk started");
            return Some(self.render());
        }
        while self.remaining > 0 {
            if let Some(word) = self.advance() {
                return Some(word);
            }
        }
        None
    }
}
