//! Domino chain composition.
//!
//! Given the tiles detected on a table and a starting pip value, enumerate
//! every maximal chain that can be laid end-to-end, collapse chains that
//! differ only in the order equivalent tiles were picked, and rank the rest
//! longest first.
//!
//! ```
//! use domino_chain::combine;
//!
//! let results = combine(&[[1i64, 2], [2, 3], [3, 4]], 1).unwrap();
//! assert_eq!(results[0].sequence_length, 3);
//! assert_eq!(results[0].sequence_score, 15);
//! ```

mod composer;
mod error;
mod hash;
mod io;
mod ordering;
mod result;

pub use composer::{combine, combine_json, combine_tiles};
pub use error::InvalidInputError;
pub use hash::{ChainKey, HASH_SEPARATOR};
pub use io::{ComposeConfig, ComposeConfigError, ComposeIoError, ComposeReport};
pub use ordering::{rank_results, sort_results, ResultSort, SortDirection, SortKey};
pub use result::{CompositionResult, PlacedTile};

pub use domino_core::{Pip, PipTally, Tile, MAX_PIP};
