#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure evolution system that maps a grid snapshot to its successor generation.
//!
//! Every cell's next state depends only on the immutable input snapshot, so
//! rows of the successor are computed independently on the rayon thread pool
//! and joined before the new grid is returned. The input grid is never
//! mutated.

use life_core::{Grid, GridError, Position};
use log::debug;
use rayon::prelude::*;

/// Selects how the cells of a generation are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Parallelism {
    /// Evaluates every row on the calling thread.
    Serial,
    /// Evaluates rows concurrently on the rayon thread pool.
    #[default]
    Parallel,
}

/// Applies the B3/S23 rule to every cell of a grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evolution {
    parallelism: Parallelism,
}

impl Evolution {
    /// Creates an evolution system using the provided scheduling strategy.
    #[must_use]
    pub const fn new(parallelism: Parallelism) -> Self {
        Self { parallelism }
    }

    /// Scheduling strategy used for each generation.
    #[must_use]
    pub const fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Computes the successor generation of `grid` as a brand-new grid.
    #[must_use]
    pub fn evolve(&self, grid: &Grid) -> Grid {
        let mut next = grid.copy_empty();
        let width = grid.width() as usize;

        match self.parallelism {
            Parallelism::Serial => next
                .cells_mut()
                .chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| evolve_row(grid, y, row)),
            Parallelism::Parallel => next
                .cells_mut()
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| evolve_row(grid, y, row)),
        }

        debug!(
            "evolved {}x{} grid ({:?}), {} live cells",
            grid.width(),
            grid.height(),
            self.parallelism,
            next.live_count()
        );
        next
    }

    /// Computes the successor generation, rejecting an absent snapshot.
    pub fn try_evolve(&self, grid: Option<&Grid>) -> Result<Grid, GridError> {
        grid.map(|grid| self.evolve(grid))
            .ok_or(GridError::MissingGrid)
    }
}

/// Counts the live neighbours of `position`.
///
/// Neighbours that fall outside a flat grid count as dead rather than being
/// reported as out of bounds.
#[must_use]
pub fn live_neighbours(grid: &Grid, position: Position) -> u8 {
    let mut count = 0;
    for neighbour in grid.adjacent_positions(position) {
        if grid.is_alive_or_dead(neighbour) {
            count += 1;
        }
    }
    count
}

/// Next state of a cell given its current state and live neighbour count.
#[must_use]
pub const fn next_state(alive: bool, neighbours: u8) -> bool {
    if alive {
        neighbours == 2 || neighbours == 3
    } else {
        neighbours == 3
    }
}

fn evolve_row(grid: &Grid, y: usize, row: &mut [bool]) {
    let offset = y * row.len();
    let current = &grid.cells()[offset..offset + row.len()];

    for (x, (next, alive)) in row.iter_mut().zip(current).enumerate() {
        let position = Position::new(x as i64, y as i64);
        *next = next_state(*alive, live_neighbours(grid, position));
    }
}
