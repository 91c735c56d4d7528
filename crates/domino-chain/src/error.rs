use domino_core::{PipError, TileError};

/// Errors returned by [`combine`](crate::combine) before any search starts.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Available tiles must be an array")]
    NotAnArray,
    #[error("Invalid tiles: tile #{index}: {source}")]
    InvalidTile {
        index: usize,
        #[source]
        source: TileError,
    },
    #[error("Invalid head value: must be an integer between 0 and 12 ({0})")]
    InvalidHead(#[source] PipError),
}
