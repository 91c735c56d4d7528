//! Tile and pip value types for a double-twelve domino set.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Pip count on one half of a tile.
pub type Pip = u8;

/// Highest pip value in a double-twelve set.
pub const MAX_PIP: Pip = 12;

/// Number of distinct tiles in a double-twelve set.
pub const DOUBLE_TWELVE_SET_SIZE: usize = 91;

/// Pip value validation errors.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PipError {
    #[error("pip value {value} is outside 0..=12")]
    OutOfRange { value: i64 },
    #[error("pip value `{raw}` is not an integer")]
    NotAnInteger { raw: String },
}

/// Tile shape validation errors.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum TileError {
    #[error("tile must be an array of pip values")]
    NotAnArray,
    #[error("tile must have exactly 2 pip values, got {len}")]
    WrongArity { len: usize },
    #[error(transparent)]
    Pip(#[from] PipError),
}

/// Validate a single pip value.
pub fn validate_pip(value: i64) -> Result<Pip, PipError> {
    if (0..=MAX_PIP as i64).contains(&value) {
        Ok(value as Pip)
    } else {
        Err(PipError::OutOfRange { value })
    }
}

/// Validate a pip value coming from untyped JSON.
///
/// Floats with a zero fractional part (`3.0`) are accepted, matching how
/// JSON producers commonly emit integers.
pub fn pip_from_json(value: &Value) -> Result<Pip, PipError> {
    if let Some(v) = value.as_i64() {
        return validate_pip(v);
    }
    if let Some(f) = value.as_f64() {
        if f.fract() == 0.0 && f.is_finite() {
            return validate_pip(f as i64);
        }
    }
    Err(PipError::NotAnInteger {
        raw: value.to_string(),
    })
}

/// One physical domino: an unordered pair of pip counts.
///
/// The stored order is the order the tile was constructed with. Equality
/// and hashing ignore it, so `Tile(2, 5) == Tile(5, 2)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[Pip; 2]")]
pub struct Tile {
    a: Pip,
    b: Pip,
}

impl Tile {
    /// Build a tile, validating both halves.
    pub fn new(a: i64, b: i64) -> Result<Self, TileError> {
        Ok(Self {
            a: validate_pip(a)?,
            b: validate_pip(b)?,
        })
    }

    /// Both halves must already be within `0..=MAX_PIP`.
    pub(crate) const fn from_valid(a: Pip, b: Pip) -> Self {
        Self { a, b }
    }

    /// Build a tile from a slice that must hold exactly two pip values.
    pub fn from_slice(pips: &[i64]) -> Result<Self, TileError> {
        match pips {
            [a, b] => Self::new(*a, *b),
            _ => Err(TileError::WrongArity { len: pips.len() }),
        }
    }

    /// Build a tile from an untyped JSON value (`[a, b]`).
    pub fn from_json(value: &Value) -> Result<Self, TileError> {
        let items = value.as_array().ok_or(TileError::NotAnArray)?;
        let [a, b] = items.as_slice() else {
            return Err(TileError::WrongArity { len: items.len() });
        };
        Ok(Self {
            a: pip_from_json(a)?,
            b: pip_from_json(b)?,
        })
    }

    /// Both halves in construction order.
    #[inline]
    pub fn pips(&self) -> [Pip; 2] {
        [self.a, self.b]
    }

    /// Both halves sorted ascending.
    #[inline]
    pub fn sorted(&self) -> [Pip; 2] {
        [self.a.min(self.b), self.a.max(self.b)]
    }

    #[inline]
    pub fn is_double(&self) -> bool {
        self.a == self.b
    }

    #[inline]
    pub fn contains(&self, pip: Pip) -> bool {
        self.a == pip || self.b == pip
    }

    /// Value exposed after matching `pip` on one half.
    ///
    /// The first half is checked first, so a double returns `pip` itself.
    #[inline]
    pub fn other_end(&self, pip: Pip) -> Option<Pip> {
        if self.a == pip {
            Some(self.b)
        } else if self.b == pip {
            Some(self.a)
        } else {
            None
        }
    }

    /// Sum of both halves.
    #[inline]
    pub fn score(&self) -> u32 {
        self.a as u32 + self.b as u32
    }

    /// Order-independent numeric identity: `low + high * 100`.
    #[inline]
    pub fn canonical_hash(&self) -> u16 {
        let [low, high] = self.sorted();
        low as u16 + high as u16 * 100
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl TryFrom<[i64; 2]> for Tile {
    type Error = TileError;

    fn try_from(value: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1])
    }
}

impl From<Tile> for [Pip; 2] {
    fn from(tile: Tile) -> Self {
        tile.pips()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.a, self.b)
    }
}

/// Every distinct tile of a double-twelve set, doubles included.
pub fn double_twelve_set() -> impl Iterator<Item = Tile> {
    (0..=MAX_PIP).flat_map(|low| (low..=MAX_PIP).map(move |high| Tile::from_valid(low, high)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_out_of_range_and_negative_pips() {
        assert_eq!(
            Tile::new(1, 15).unwrap_err(),
            TileError::Pip(PipError::OutOfRange { value: 15 })
        );
        assert_eq!(
            Tile::new(-1, 5).unwrap_err(),
            TileError::Pip(PipError::OutOfRange { value: -1 })
        );
        assert!(Tile::new(0, 12).is_ok());
    }

    #[test]
    fn slice_arity_is_checked() {
        assert_eq!(
            Tile::from_slice(&[1, 2, 3]).unwrap_err(),
            TileError::WrongArity { len: 3 }
        );
        assert_eq!(
            Tile::from_slice(&[4]).unwrap_err(),
            TileError::WrongArity { len: 1 }
        );
        assert_eq!(Tile::from_slice(&[4, 6]).unwrap().pips(), [4, 6]);
    }

    #[test]
    fn json_tiles_reject_fractional_and_non_numeric_pips() {
        let err = Tile::from_json(&serde_json::json!([1.5, 2])).unwrap_err();
        assert!(matches!(err, TileError::Pip(PipError::NotAnInteger { .. })));

        let err = Tile::from_json(&serde_json::json!(["a", 2])).unwrap_err();
        assert!(matches!(err, TileError::Pip(PipError::NotAnInteger { .. })));

        assert_eq!(
            Tile::from_json(&serde_json::json!(7)).unwrap_err(),
            TileError::NotAnArray
        );
        assert_eq!(
            Tile::from_json(&serde_json::json!([3.0, 4])).unwrap(),
            Tile::new(3, 4).unwrap()
        );
    }

    #[test]
    fn equality_ignores_half_order() {
        let t = Tile::new(2, 5).unwrap();
        let r = Tile::new(5, 2).unwrap();
        assert_eq!(t, r);
        assert_eq!(t.canonical_hash(), 502);
        assert_eq!(r.canonical_hash(), 502);
        let set: HashSet<Tile> = [t, r].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn other_end_follows_the_matched_half() {
        let t = Tile::new(3, 9).unwrap();
        assert_eq!(t.other_end(3), Some(9));
        assert_eq!(t.other_end(9), Some(3));
        assert_eq!(t.other_end(4), None);
        assert_eq!(Tile::new(6, 6).unwrap().other_end(6), Some(6));
    }

    #[test]
    fn double_twelve_set_has_every_tile_once() {
        let tiles: Vec<Tile> = double_twelve_set().collect();
        assert_eq!(tiles.len(), DOUBLE_TWELVE_SET_SIZE);
        let unique: HashSet<Tile> = tiles.iter().copied().collect();
        assert_eq!(unique.len(), DOUBLE_TWELVE_SET_SIZE);
        assert_eq!(tiles.iter().filter(|t| t.is_double()).count(), 13);
    }

    #[test]
    fn serde_uses_pair_arrays() {
        let t: Tile = serde_json::from_str("[4, 11]").unwrap();
        assert_eq!(t.pips(), [4, 11]);
        assert_eq!(serde_json::to_string(&t).unwrap(), "[4,11]");
        assert!(serde_json::from_str::<Tile>("[4, 13]").is_err());
    }
}
