//! Pip tallies over a detected tile pool.

use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Sum of both halves over every tile.
pub fn total_pips(tiles: &[Tile]) -> u32 {
    tiles.iter().map(Tile::score).sum()
}

/// Number of detected tiles and the sum of all their pips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipTally {
    pub tiles: usize,
    pub total: u32,
}

impl PipTally {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        Self {
            tiles: tiles.len(),
            total: total_pips(tiles),
        }
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles += 1;
        self.total += tile.score();
    }
}

impl FromIterator<Tile> for PipTally {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut tally = Self::default();
        for tile in iter {
            tally.push(tile);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::double_twelve_set;

    #[test]
    fn tally_counts_tiles_and_pips() {
        let tiles = vec![Tile::new(1, 2).unwrap(), Tile::new(5, 6).unwrap()];
        let tally = PipTally::from_tiles(&tiles);
        assert_eq!(tally, PipTally { tiles: 2, total: 14 });
        assert_eq!(PipTally::from_tiles(&[]), PipTally::default());
    }

    #[test]
    fn full_set_total_matches_closed_form() {
        // Each value 0..=12 appears 14 times across the 91 tiles.
        let tally: PipTally = double_twelve_set().collect();
        assert_eq!(tally.tiles, 91);
        assert_eq!(tally.total, 14 * (0..=12).sum::<u32>());
    }
}
