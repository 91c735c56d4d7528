//! Output types of the chain composer.

use domino_core::Pip;
use serde::{Deserialize, Serialize};

/// A tile as placed in a chain: `head` matched the previous free end,
/// `free` is exposed for the next tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub head: Pip,
    pub free: Pip,
}

impl PlacedTile {
    #[inline]
    pub fn is_double(&self) -> bool {
        self.head == self.free
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.head as u32 + self.free as u32
    }

    /// Same encoding as [`domino_core::Tile::canonical_hash`].
    #[inline]
    pub fn canonical_hash(&self) -> u16 {
        let low = self.head.min(self.free) as u16;
        let high = self.head.max(self.free) as u16;
        low + high * 100
    }
}

/// One distinct chain found by the composer, with its scoring metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionResult {
    /// Number of placed tiles.
    pub sequence_length: usize,
    /// Sum of pips over placed tiles.
    pub sequence_score: u32,
    /// Sum of pips over tiles left in the pool.
    pub unused_score: u32,
    /// Number of tiles left in the pool.
    pub unused: usize,
    pub sequence: Vec<PlacedTile>,
    /// Canonical identity, see [`ChainKey`](crate::ChainKey).
    pub hash: String,
}

impl CompositionResult {
    /// Free end of the last placed tile.
    pub fn tail(&self) -> Option<Pip> {
        self.sequence.last().map(|t| t.free)
    }

    /// True when every consecutive pair of placed tiles shares a pip value
    /// and the first tile starts at `head`.
    pub fn is_connected_from(&self, head: Pip) -> bool {
        let mut expected = head;
        for tile in &self.sequence {
            if tile.head != expected {
                return false;
            }
            expected = tile.free;
        }
        true
    }
}
