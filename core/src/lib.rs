#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game of Life engine.
//!
//! This crate defines the [`Grid`] every other crate operates on together with
//! the message surface that connects adapters, the authoritative world, and the
//! pure systems. Adapters submit [`Command`] values describing desired
//! mutations, the world executes those commands via its `apply` entry point,
//! and then reports [`Event`] values describing what changed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod grid;

pub use grid::{Grid, Positions, StateView};

/// Smallest width or height a [`Grid`] may be constructed with.
pub const MINIMUM_GRID_SIZE: u32 = 10;

/// King-move offsets enumerated for every neighbourhood query, in order.
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Location of a single cell expressed as zero-based column and row.
///
/// Coordinates are signed so that neighbourhood enumeration on a flat grid can
/// report positions that fall off the edge, such as `(-1, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i64,
    y: i64,
}

impl Position {
    /// Creates a new cell position.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the position.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Zero-based row of the position.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the position displaced by the provided offset.
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimension named in construction errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent of the grid.
    Width,
    /// Vertical extent of the grid.
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Failures reported synchronously by grid operations and the systems using them.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was below [`MINIMUM_GRID_SIZE`] at construction time.
    #[error("{axis} {value} is less than the minimum {minimum}", minimum = MINIMUM_GRID_SIZE)]
    DimensionTooSmall {
        /// Dimension that failed validation.
        axis: Axis,
        /// Value supplied for the dimension.
        value: u32,
    },
    /// A direct cell query or edit addressed a position outside the grid.
    #[error("position {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// Position that was requested.
        position: Position,
        /// Width of the grid that rejected the position.
        width: u32,
        /// Height of the grid that rejected the position.
        height: u32,
    },
    /// No cell data was supplied to an import.
    #[error("no cell data was supplied")]
    MissingData,
    /// No grid was supplied to an evolution step.
    #[error("no grid was supplied")]
    MissingGrid,
    /// Imported cell data did not match the grid's cell count.
    #[error("data was bad length, expected {expected} cells but received {actual}")]
    LengthMismatch {
        /// Number of cells the grid holds.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the current grid with its successor generation.
    Advance,
    /// Refills the grid with random life at the configured fill rate.
    Populate {
        /// Seed for the random layout; generated when absent.
        seed: Option<u64>,
    },
    /// Kills every cell while keeping the grid's dimensions and topology.
    Clear,
    /// Sets the state of a single cell.
    SetCell {
        /// Cell being edited.
        position: Position,
        /// Whether the cell should be alive afterwards.
        alive: bool,
    },
}

/// Events reported by the world after successfully processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the world moved to its next generation.
    GenerationAdvanced {
        /// Generation counter after the step.
        generation: u64,
        /// Number of live cells in the new generation.
        live_cells: usize,
    },
    /// Confirms that the grid was refilled with random life.
    Populated {
        /// Seed that reproduces the layout.
        seed: u64,
        /// Number of live cells placed.
        live_cells: usize,
    },
    /// Confirms that every cell was killed.
    Cleared,
    /// Confirms that a single cell was edited.
    CellChanged {
        /// Cell that was edited.
        position: Position,
        /// State of the cell after the edit.
        alive: bool,
    },
}
