//! Canonical chain identity used for deduplication.
//!
//! Two chains are the same when they place the same multiset of tiles and
//! end on the same tile. Placement order before the last tile is ignored.

use crate::result::PlacedTile;
use std::fmt;

/// Separator used in the rendered key.
pub const HASH_SEPARATOR: char = '|';

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainKey {
    /// Per-tile hashes of every tile but the last, ascending.
    body: Vec<u16>,
    /// Hash of the terminating tile, kept in position.
    last: Option<u16>,
}

impl ChainKey {
    pub fn from_sequence(sequence: &[PlacedTile]) -> Self {
        let Some((last, body)) = sequence.split_last() else {
            return Self {
                body: Vec::new(),
                last: None,
            };
        };
        let mut body: Vec<u16> = body.iter().map(PlacedTile::canonical_hash).collect();
        body.sort_unstable();
        Self {
            body,
            last: Some(last.canonical_hash()),
        }
    }

    /// Hash of the tile that terminates the chain.
    #[inline]
    pub fn last(&self) -> Option<u16> {
        self.last
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for h in self.body.iter().chain(self.last.iter()) {
            if !first {
                write!(f, "{HASH_SEPARATOR}")?;
            }
            first = false;
            write!(f, "{h}")?;
        }
        Ok(())
    }
}
