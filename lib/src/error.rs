//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Size should be positive.
    NonPositiveError,
    /// The world should be square: row {row} has {len} cells, expected {size}.
    NonSquareError {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Expected side length.
        size: usize,
    },
    /// Invalid character {ch:?} at {coord:?}.
    InvalidChar {
        /// The character.
        ch: char,
        /// Where it was found.
        coord: Coord,
    },
}
