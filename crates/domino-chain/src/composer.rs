//! Exhaustive chain composition search.
//!
//! Starting from a head value, every still-available tile that shows the head
//! on one half is placed and the search recurses from its other half. A
//! position where no placement leads to a result is a leaf and becomes a
//! [`CompositionResult`], except:
//! - the root (nothing placed) never produces a result,
//! - a leaf whose last tile is a double is dropped while any tile is left in
//!   the pool, whether or not that tile could have matched.
//!
//! Results are deduplicated by [`ChainKey`] and ranked longest first.

use crate::error::InvalidInputError;
use crate::hash::ChainKey;
use crate::ordering::rank_results;
use crate::result::{CompositionResult, PlacedTile};
use domino_core::{pip_from_json, total_pips, validate_pip, Pip, Tile};
use serde_json::Value;
use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Compose chains from raw pip pairs.
///
/// Every element of `available` must hold exactly two pips in `0..=12`, and
/// `head` must be in the same range. Validation runs before the search; on
/// failure no results are produced.
pub fn combine<T: AsRef<[i64]>>(
    available: &[T],
    head: i64,
) -> Result<Vec<CompositionResult>, InvalidInputError> {
    let tiles = available
        .iter()
        .enumerate()
        .map(|(index, pips)| {
            Tile::from_slice(pips.as_ref())
                .map_err(|source| InvalidInputError::InvalidTile { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let head = validate_pip(head).map_err(InvalidInputError::InvalidHead)?;
    Ok(combine_tiles(&tiles, head))
}

/// Compose chains from untyped JSON, e.g. a detector payload.
///
/// `available` must be an array of `[a, b]` arrays.
pub fn combine_json(
    available: &Value,
    head: &Value,
) -> Result<Vec<CompositionResult>, InvalidInputError> {
    let items = available.as_array().ok_or(InvalidInputError::NotAnArray)?;
    let tiles = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Tile::from_json(item)
                .map_err(|source| InvalidInputError::InvalidTile { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let head = pip_from_json(head).map_err(InvalidInputError::InvalidHead)?;
    Ok(combine_tiles(&tiles, head))
}

/// Compose chains from already validated tiles.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(available), fields(tiles = available.len()))
)]
pub fn combine_tiles(available: &[Tile], head: Pip) -> Vec<CompositionResult> {
    if available.is_empty() {
        return Vec::new();
    }

    let mut search = Search::new(available);
    search.expand(head, 0, total_pips(available));

    log::debug!(
        "head {head}: {} tiles, {} nodes, {} leaves, {} unique chains",
        available.len(),
        search.nodes,
        search.leaves,
        search.sink.results.len()
    );

    let mut results = search.sink.results;
    rank_results(&mut results);
    results
}

/// Deduplicating collector. A repeated key replaces the stored result in
/// place, so the latest chain wins while the first-seen position is kept.
#[derive(Default)]
struct ResultSink {
    results: Vec<CompositionResult>,
    index: HashMap<ChainKey, usize>,
}

impl ResultSink {
    fn push(&mut self, key: ChainKey, result: CompositionResult) {
        match self.index.get(&key) {
            Some(&slot) => self.results[slot] = result,
            None => {
                self.index.insert(key, self.results.len());
                self.results.push(result);
            }
        }
    }
}

/// Backtracking state. Tiles are consumed by flagging them in `used` and
/// restored on the way back, so sibling branches start from the same pool.
struct Search<'a> {
    tiles: &'a [Tile],
    used: Vec<bool>,
    remaining: usize,
    sequence: Vec<PlacedTile>,
    sink: ResultSink,
    nodes: u64,
    leaves: u64,
}

impl<'a> Search<'a> {
    fn new(tiles: &'a [Tile]) -> Self {
        Self {
            tiles,
            used: vec![false; tiles.len()],
            remaining: tiles.len(),
            sequence: Vec::with_capacity(tiles.len()),
            sink: ResultSink::default(),
            nodes: 0,
            leaves: 0,
        }
    }

    /// Returns how many leaves below this position were accepted,
    /// duplicates included.
    fn expand(&mut self, head: Pip, score: u32, unused_score: u32) -> usize {
        self.nodes += 1;
        let mut accepted = 0;

        for index in 0..self.tiles.len() {
            if self.used[index] {
                continue;
            }
            let Some(free) = self.tiles[index].other_end(head) else {
                continue;
            };
            let placed = PlacedTile { head, free };

            self.used[index] = true;
            self.remaining -= 1;
            self.sequence.push(placed);

            accepted += self.expand(free, score + placed.score(), unused_score - placed.score());

            self.sequence.pop();
            self.remaining += 1;
            self.used[index] = false;
        }

        if accepted > 0 {
            return accepted;
        }
        self.leaf(score, unused_score)
    }

    fn leaf(&mut self, score: u32, unused_score: u32) -> usize {
        let Some(last) = self.sequence.last() else {
            return 0;
        };
        // TODO: only drop the double when a leftover tile could follow it;
        // the current rule also discards chains that are genuinely stuck.
        if last.is_double() && self.remaining > 0 {
            return 0;
        }

        self.leaves += 1;
        let key = ChainKey::from_sequence(&self.sequence);
        let result = CompositionResult {
            sequence_length: self.sequence.len(),
            sequence_score: score,
            unused_score,
            unused: self.remaining,
            sequence: self.sequence.clone(),
            hash: key.to_string(),
        };
        self.sink.push(key, result);
        1
    }
}
