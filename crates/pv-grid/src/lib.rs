//! `pv-grid` — uniform-cost occupancy grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`cell`]  | `Cell` — `(row, col)` grid coordinate                     |
//! | [`grid`]  | `GridMap` — bounds, walkability, `Graph` implementation   |
//! | [`error`] | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Cell` serializes as a `[row, col]` array.                 |

pub mod cell;
pub mod error;
pub mod grid;


pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::{BLOCKED, FREE, GridMap};
