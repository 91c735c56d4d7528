//! Result ranking and column re-sorting.

use crate::result::CompositionResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result column to sort by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    SequenceLength,
    SequenceScore,
    UnusedScore,
    Unused,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Single-column ordering requested by a results view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSort {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl ResultSort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Same key with the direction flipped; a results view toggles this way
    /// when the active column is clicked again.
    pub fn toggled(self) -> Self {
        let direction = match self.direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        Self { direction, ..self }
    }

    fn compare(&self, a: &CompositionResult, b: &CompositionResult) -> Ordering {
        let ord = match self.key {
            SortKey::SequenceLength => a.sequence_length.cmp(&b.sequence_length),
            SortKey::SequenceScore => a.sequence_score.cmp(&b.sequence_score),
            SortKey::UnusedScore => a.unused_score.cmp(&b.unused_score),
            SortKey::Unused => a.unused.cmp(&b.unused),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Stable sort on a single column. Ties keep their current order.
pub fn sort_results(results: &mut [CompositionResult], sort: ResultSort) {
    results.sort_by(|a, b| sort.compare(a, b));
}

/// Default ranking: longest chains first, then highest placed score.
pub fn rank_results(results: &mut [CompositionResult]) {
    results.sort_by(|a, b| {
        b.sequence_length
            .cmp(&a.sequence_length)
            .then_with(|| b.sequence_score.cmp(&a.sequence_score))
    });
}
