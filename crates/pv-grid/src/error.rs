//! Grid-subsystem error type.
//!
//! The search engine never produces these: they are raised by the
//! validating constructors that request layers call before a search.

use thiserror::Error;

use crate::Cell;

/// Errors produced by `pv-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("cell {cell} holds {value}, expected 0 (free) or 1 (wall)")]
    InvalidCell { cell: Cell, value: u8 },

    #[error("unrecognised map character {ch:?} at {cell}")]
    InvalidChar { cell: Cell, ch: char },

    #[error("{cell} is outside the {height}x{width} grid")]
    OutOfBounds { cell: Cell, height: usize, width: usize },

    #[error("{0} is a wall")]
    Blocked(Cell),
}

pub type GridResult<T> = Result<T, GridError>;
