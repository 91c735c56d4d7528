//! Detector class labels (`"3x5"`) to tiles.

use crate::tile::{validate_pip, PipError, Tile};
use std::str::FromStr;

/// Separator between the two pip counts in a detector class label.
pub const LABEL_SEPARATOR: char = 'x';

/// Errors returned when a class label does not describe a tile.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("empty tile label")]
    Empty,
    #[error("tile label `{label}` must have exactly 2 parts, got {parts}")]
    WrongPartCount { label: String, parts: usize },
    #[error("tile label `{label}` has a non-numeric part `{part}`")]
    InvalidNumber { label: String, part: String },
    #[error("tile label `{label}`: {source}")]
    Pip {
        label: String,
        #[source]
        source: PipError,
    },
}

/// Parse a detector class label such as `"3x5"` into a tile.
pub fn parse_label(label: &str) -> Result<Tile, LabelError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(LabelError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(LABEL_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(LabelError::WrongPartCount {
            label: label.to_string(),
            parts: parts.len(),
        });
    }

    let mut pips = [0u8; 2];
    for (slot, part) in pips.iter_mut().zip(&parts) {
        let part = part.trim();
        let value: i64 = part.parse().map_err(|_| LabelError::InvalidNumber {
            label: label.to_string(),
            part: part.to_string(),
        })?;
        *slot = validate_pip(value).map_err(|source| LabelError::Pip {
            label: label.to_string(),
            source,
        })?;
    }

    Ok(Tile::from_valid(pips[0], pips[1]))
}

/// Parse a batch of labels, failing on the first malformed one.
pub fn tiles_from_labels<I, S>(labels: I) -> Result<Vec<Tile>, LabelError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| parse_label(label.as_ref()))
        .collect()
}

impl FromStr for Tile {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detector_labels() {
        let t = parse_label("3x5").unwrap();
        assert_eq!(t.pips(), [3, 5]);
        let t: Tile = " 12x0 ".parse().unwrap();
        assert_eq!(t.pips(), [12, 0]);
        assert_eq!(t.to_string(), "12x0");
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(parse_label("  ").unwrap_err(), LabelError::Empty);
        assert!(matches!(
            parse_label("3x5x1").unwrap_err(),
            LabelError::WrongPartCount { parts: 3, .. }
        ));
        assert!(matches!(
            parse_label("7").unwrap_err(),
            LabelError::WrongPartCount { parts: 1, .. }
        ));
        assert!(matches!(
            parse_label("ax2").unwrap_err(),
            LabelError::InvalidNumber { .. }
        ));
        assert!(matches!(
            parse_label("3x13").unwrap_err(),
            LabelError::Pip {
                source: PipError::OutOfRange { value: 13 },
                ..
            }
        ));
    }

    #[test]
    fn batch_parsing_stops_at_first_error() {
        let tiles = tiles_from_labels(["1x2", "2x3"]).unwrap();
        assert_eq!(tiles.len(), 2);
        assert!(tiles_from_labels(vec!["1x2".to_string(), "oops".to_string()]).is_err());
    }
}
