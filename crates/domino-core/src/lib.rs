//! Core tile types for domino chain composition.
//!
//! This crate only knows about tiles: validation of pip values, parsing of
//! detector class labels and pip tallies. The chain search lives in
//! `domino-chain`.

mod label;
mod logger;
mod pips;
mod tile;

pub use label::{parse_label, tiles_from_labels, LabelError, LABEL_SEPARATOR};
pub use pips::{total_pips, PipTally};
pub use tile::{
    double_twelve_set, pip_from_json, validate_pip, Pip, PipError, Tile, TileError,
    DOUBLE_TWELVE_SET_SIZE, MAX_PIP,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
