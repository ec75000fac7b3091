#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the Game of Life.
//!
//! The world owns the single live [`Grid`]. Every other component only sees
//! transient snapshots: the evolution system reads the current grid and hands
//! back a successor, which the world then adopts as current.

use life_core::{Command, Event, Grid, GridError, Position};
use life_system_evolution::Evolution;
use life_system_populator::{Populator, DEFAULT_FILL_RATE};
use log::{debug, trace};

const DEFAULT_WIDTH: u32 = 80;
const DEFAULT_HEIGHT: u32 = 45;

/// Construction parameters for a [`World`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Number of columns in the grid.
    pub width: u32,
    /// Number of rows in the grid.
    pub height: u32,
    /// Whether the grid wraps around its edges like a torus.
    pub wrapped: bool,
    /// Percentage of cells brought to life when populating, clamped to `[0, 100]`.
    pub fill_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wrapped: false,
            fill_rate: DEFAULT_FILL_RATE,
        }
    }
}

/// Represents the authoritative Game of Life session.
#[derive(Debug)]
pub struct World {
    grid: Grid,
    populator: Populator,
    evolution: Evolution,
    generation: u64,
}

impl World {
    /// Creates a world with an entirely dead grid.
    pub fn new(settings: Settings) -> Result<Self, GridError> {
        Self::with_evolution(settings, Evolution::default())
    }

    /// Creates a world that evolves its grid with the provided system.
    pub fn with_evolution(settings: Settings, evolution: Evolution) -> Result<Self, GridError> {
        let grid = Grid::new(settings.width, settings.height, settings.wrapped)?;
        Ok(Self {
            grid,
            populator: Populator::new(settings.fill_rate),
            evolution,
            generation: 0,
        })
    }

    /// Goes one generation forward and returns the new generation counter.
    pub fn advance(&mut self) -> u64 {
        self.grid = self.evolution.evolve(&self.grid);
        self.generation = self.generation.saturating_add(1);
        self.generation
    }

    /// Fills the grid with new random life and returns the seed used.
    pub fn populate(&mut self, seed: Option<u64>) -> u64 {
        let seed = self.populator.populate(&mut self.grid, seed);
        self.generation = 0;
        seed
    }

    /// Kills all life while keeping dimensions and topology.
    pub fn clear(&mut self) {
        self.grid = self.grid.copy_empty();
        self.generation = 0;
    }

    /// Brings the cell at `position` to life.
    pub fn set_life_at(&mut self, position: Position) -> Result<(), GridError> {
        self.grid.set_cell_at(position, true)
    }

    /// Kills the cell at `position`.
    pub fn kill_life_at(&mut self, position: Position) -> Result<(), GridError> {
        self.grid.set_cell_at(position, false)
    }
}

/// Applies the provided command to the world.
///
/// Events are only emitted for commands that succeed. A rejected command leaves
/// the world unchanged and its error is returned to the caller.
pub fn apply(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), GridError> {
    trace!("applying {command:?}");
    match command {
        Command::Advance => {
            let generation = world.advance();
            out_events.push(Event::GenerationAdvanced {
                generation,
                live_cells: world.grid.live_count(),
            });
        }
        Command::Populate { seed } => {
            let seed = world.populate(seed);
            out_events.push(Event::Populated {
                seed,
                live_cells: world.grid.live_count(),
            });
        }
        Command::Clear => {
            world.clear();
            out_events.push(Event::Cleared);
        }
        Command::SetCell { position, alive } => {
            if alive {
                world.set_life_at(position)?;
            } else {
                world.kill_life_at(position)?;
            }
            debug!("cell {position} set to {alive}");
            out_events.push(Event::CellChanged { position, alive });
        }
    }
    Ok(())
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use life_core::{Grid, StateView};

    /// Width of the current grid.
    #[must_use]
    pub fn width(world: &World) -> u32 {
        world.grid.width()
    }

    /// Height of the current grid.
    #[must_use]
    pub fn height(world: &World) -> u32 {
        world.grid.height()
    }

    /// Reports whether the current grid wraps around its edges.
    #[must_use]
    pub fn is_wrapped(world: &World) -> bool {
        world.grid.is_wrapped()
    }

    /// Captures the cell states of the current grid indexed `[x][y]`.
    #[must_use]
    pub fn state(world: &World) -> StateView {
        world.grid.to_state_view()
    }

    /// Provides read-only access to the current grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Number of generations advanced since the grid was last populated or cleared.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Number of live cells in the current grid.
    #[must_use]
    pub fn live_count(world: &World) -> usize {
        world.grid.live_count()
    }

    /// Fill rate applied when populating.
    #[must_use]
    pub fn fill_rate(world: &World) -> f64 {
        world.populator.fill_rate()
    }
}
