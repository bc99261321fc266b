//! Occupancy grid and its adjacency.
//!
//! # Data layout
//!
//! Cells are stored row-major in one flat `Vec<u8>`:
//!
//! ```text
//! cells[row * width + col]
//! ```
//!
//! `0` ([`FREE`]) is walkable, `1` ([`BLOCKED`]) is a wall.  Moves are the
//! four orthogonal steps, each costing `1.0`, so Manhattan distance is an
//! admissible (and consistent) heuristic.

use pv_core::{Graph, Heuristic};

use crate::{Cell, GridError, GridResult};

/// Walkable cell value.
pub const FREE: u8 = 0;
/// Wall cell value.
pub const BLOCKED: u8 = 1;

/// Up, down, left, right.
const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Immutable walls/free grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    height: usize,
    width:  usize,
    cells:  Vec<u8>,
}

impl GridMap {
    /// Build from rows of `0`/`1` cells without validation.
    ///
    /// The caller guarantees the input is non-empty and rectangular; use
    /// [`try_from_rows`](Self::try_from_rows) for untrusted input.
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == width), "ragged grid");

        let cells: Vec<u8> = rows.into_iter().flatten().collect();
        Self { height, width, cells }
    }

    /// Build from rows, rejecting empty, ragged, or non-`0`/`1` input.
    pub fn try_from_rows(rows: Vec<Vec<u8>>) -> GridResult<Self> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::Empty),
        };

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::Ragged { row, expected: width, found: cells.len() });
            }
            if let Some(col) = cells.iter().position(|&v| v != FREE && v != BLOCKED) {
                return Err(GridError::InvalidCell {
                    cell:  Cell::new(row, col),
                    value: cells[col],
                });
            }
        }

        Ok(Self::new(rows))
    }

    /// Parse a text map, one row per line.
    ///
    /// `.` and `0` are free; `#`, `@`, `T` and `1` are walls.  Blank lines
    /// are skipped so trailing newlines are harmless.
    pub fn parse_ascii(text: &str) -> GridResult<Self> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let row_idx = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '.' | '0' => Ok(FREE),
                    '#' | '@' | 'T' | '1' => Ok(BLOCKED),
                    _ => Err(GridError::InvalidChar { cell: Cell::new(row_idx, col), ch }),
                })
                .collect::<GridResult<Vec<u8>>>()?;
            rows.push(row);
        }
        Self::try_from_rows(rows)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// `true` if `cell` is free.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds; check [`in_bounds`](Self::in_bounds)
    /// first.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        assert!(self.in_bounds(cell), "{cell} outside {}x{} grid", self.height, self.width);
        self.cells[cell.row * self.width + cell.col] == FREE
    }

    /// Reject endpoints a search cannot start or end on.
    pub fn check_endpoint(&self, cell: Cell) -> GridResult<()> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds { cell, height: self.height, width: self.width });
        }
        if !self.is_walkable(cell) {
            return Err(GridError::Blocked(cell));
        }
        Ok(())
    }

    /// Walkable, in-bounds orthogonal neighbours of `cell`, in the fixed
    /// order up, down, left, right.
    pub fn neighbor_cells(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        STEPS.iter().filter_map(move |&(dr, dc)| {
            let next = Cell::new(
                cell.row.checked_add_signed(dr)?,
                cell.col.checked_add_signed(dc)?,
            );
            (self.in_bounds(next) && self.is_walkable(next)).then_some(next)
        })
    }

    /// Number of walkable cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == FREE).count()
    }
}

impl Graph for GridMap {
    type Node = Cell;

    fn neighbors(&self, node: Cell) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.neighbor_cells(node).map(|c| (c, 1.0))
    }

    fn node_count(&self) -> usize {
        self.height * self.width
    }
}

impl Heuristic for GridMap {
    fn estimate(&self, from: Cell, goal: Cell) -> f64 {
        from.manhattan(goal) as f64
    }
}
