//! Dense rectangular cell storage shared by every system.

use crate::{Axis, GridError, Position, MINIMUM_GRID_SIZE, NEIGHBOUR_OFFSETS};

/// Fixed-size rectangular array of alive or dead cells.
///
/// Cells are stored row-major, so the cell at `(x, y)` lives at index
/// `y * width + x`. The buffer length always equals `width * height` and the
/// grid is never resized after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    wrapped: bool,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// Fails when either dimension is below [`MINIMUM_GRID_SIZE`].
    pub fn new(width: u32, height: u32, wrapped: bool) -> Result<Self, GridError> {
        if width < MINIMUM_GRID_SIZE {
            return Err(GridError::DimensionTooSmall {
                axis: Axis::Width,
                value: width,
            });
        }
        if height < MINIMUM_GRID_SIZE {
            return Err(GridError::DimensionTooSmall {
                axis: Axis::Height,
                value: height,
            });
        }

        Ok(Self {
            width,
            height,
            wrapped,
            cells: vec![false; cell_count(width, height)],
        })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the grid wraps around its edges like a torus.
    #[must_use]
    pub const fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Total number of cells held by the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells that are currently alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Row-major view of the cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable row-major view of the cell buffer.
    ///
    /// The slice length is fixed, so callers cannot break the size invariant.
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Reports whether the position lies within `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (0..i64::from(self.width)).contains(&position.x())
            && (0..i64::from(self.height)).contains(&position.y())
    }

    /// Row-major buffer index of a position. Performs no bounds validation.
    #[must_use]
    pub fn position_index(&self, position: Position) -> i64 {
        position.y() * i64::from(self.width) + position.x()
    }

    /// Returns the state of the cell at `position`.
    ///
    /// Out-of-range positions are reported as [`GridError::OutOfBounds`].
    pub fn is_alive(&self, position: Position) -> Result<bool, GridError> {
        let index = self.checked_index(position)?;
        Ok(self.cells[index])
    }

    /// Returns the state of the cell at `position`, treating any position
    /// outside the grid as dead.
    ///
    /// Only neighbour counting should use this; direct queries go through
    /// [`Grid::is_alive`].
    #[must_use]
    pub fn is_alive_or_dead(&self, position: Position) -> bool {
        self.checked_index(position)
            .map_or(false, |index| self.cells[index])
    }

    /// Sets the state of a single in-bounds cell.
    pub fn set_cell_at(&mut self, position: Position, alive: bool) -> Result<(), GridError> {
        let index = self.checked_index(position)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Replaces every cell with the provided row-major data.
    pub fn import(&mut self, data: &[bool]) -> Result<(), GridError> {
        if data.len() != self.cells.len() {
            return Err(GridError::LengthMismatch {
                expected: self.cells.len(),
                actual: data.len(),
            });
        }

        self.cells.copy_from_slice(data);
        Ok(())
    }

    /// Replaces every cell with the provided data, rejecting absent data.
    pub fn try_import(&mut self, data: Option<&[bool]>) -> Result<(), GridError> {
        let data = data.ok_or(GridError::MissingData)?;
        self.import(data)
    }

    /// Makes a complete, independent copy of the grid.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Makes a grid with the same dimensions and topology but every cell dead.
    #[must_use]
    pub fn copy_empty(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            wrapped: self.wrapped,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Enumerates every position of the grid in row-major order.
    #[must_use]
    pub fn positions(&self) -> Positions {
        Positions {
            width: self.width,
            next: 0,
            end: self.cells.len(),
        }
    }

    /// Enumerates the eight neighbours of `position`.
    ///
    /// A wrapped grid folds every neighbour back onto the torus. A flat grid
    /// returns the raw offsets, which may fall outside the grid.
    #[must_use]
    pub fn adjacent_positions(&self, position: Position) -> [Position; 8] {
        NEIGHBOUR_OFFSETS.map(|(dx, dy)| {
            let neighbour = position.offset(dx, dy);
            if self.wrapped {
                self.wrap(neighbour)
            } else {
                neighbour
            }
        })
    }

    /// Copies the cell buffer out in row-major order.
    #[must_use]
    pub fn export_state(&self) -> Vec<bool> {
        self.cells.clone()
    }

    /// Reshapes the cell buffer into a column-major view indexed `[x][y]`.
    #[must_use]
    pub fn to_state_view(&self) -> StateView {
        let width = to_usize(self.width);
        let height = to_usize(self.height);
        let columns = (0..width)
            .map(|x| (0..height).map(|y| self.cells[y * width + x]).collect())
            .collect();
        StateView { columns }
    }

    fn wrap(&self, position: Position) -> Position {
        Position::new(
            position.x().rem_euclid(i64::from(self.width)),
            position.y().rem_euclid(i64::from(self.height)),
        )
    }

    fn checked_index(&self, position: Position) -> Result<usize, GridError> {
        if !self.contains(position) {
            return Err(GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }

        let index = usize::try_from(self.position_index(position)).map_err(|_| {
            GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            }
        })?;
        Ok(index)
    }
}

/// Restartable row-major enumeration of every position in a grid.
#[derive(Clone, Debug)]
pub struct Positions {
    width: u32,
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let width = to_usize(self.width);
        let position = Position::new(
            (self.next % width) as i64,
            (self.next / width) as i64,
        );
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

/// Two-dimensional copy of a grid's cell states indexed `[x][y]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateView {
    columns: Vec<Vec<bool>>,
}

impl StateView {
    /// Number of columns captured by the view.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows captured by the view.
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// State of the cell at column `x` and row `y`, if captured.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.columns.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Column-major cell states, indexed `[x][y]`.
    #[must_use]
    pub fn columns(&self) -> &[Vec<bool>] {
        &self.columns
    }

    /// Consumes the view, yielding the nested column vectors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<bool>> {
        self.columns
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn cell_count(width: u32, height: u32) -> usize {
    let cells = u64::from(width) * u64::from(height);
    usize::try_from(cells).unwrap_or(usize::MAX)
}
