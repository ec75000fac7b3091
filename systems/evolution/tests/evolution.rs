use life_core::{Grid, GridError, Position};
use life_system_evolution::{Evolution, Parallelism};
use life_system_populator::Populator;

const CENTER: Position = Position::new(1, 1);

/// Builds a 10x10 grid with the given cells alive.
fn grid_with(alive: &[(i64, i64)], wrapped: bool) -> Grid {
    let mut grid = Grid::new(10, 10, wrapped).expect("valid grid");
    for &(x, y) in alive {
        grid.set_cell_at(Position::new(x, y), true).expect("in bounds");
    }
    grid
}

fn alive_after_step(grid: &Grid, position: Position) -> bool {
    Evolution::default()
        .evolve(grid)
        .is_alive(position)
        .expect("in bounds")
}

#[test]
fn lonely_dead_cell_stays_dead() {
    let grid = grid_with(&[(2, 1)], false);
    assert!(!alive_after_step(&grid, CENTER));
}

#[test]
fn live_cell_with_one_neighbour_dies() {
    let grid = grid_with(&[(1, 1), (2, 1)], false);
    assert!(!alive_after_step(&grid, CENTER));
}

#[test]
fn live_cell_with_two_neighbours_survives() {
    let grid = grid_with(&[(1, 1), (0, 0), (2, 2)], false);
    assert!(alive_after_step(&grid, CENTER));
}

#[test]
fn live_cell_with_three_neighbours_survives() {
    let grid = grid_with(&[(1, 1), (0, 0), (2, 0), (0, 2)], false);
    assert!(alive_after_step(&grid, CENTER));
}

#[test]
fn dead_cell_with_three_neighbours_is_born() {
    let grid = grid_with(&[(0, 1), (2, 1), (1, 2)], false);
    assert!(alive_after_step(&grid, CENTER));
}

#[test]
fn dead_cell_with_two_neighbours_stays_dead() {
    let grid = grid_with(&[(0, 1), (2, 1)], false);
    assert!(!alive_after_step(&grid, CENTER));
}

#[test]
fn crowded_live_cell_dies() {
    let grid = grid_with(&[(1, 1), (0, 0), (1, 0), (2, 0), (0, 1)], false);
    assert!(!alive_after_step(&grid, CENTER));

    let packed = grid_with(
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ],
        false,
    );
    assert!(!alive_after_step(&packed, CENTER));
}

#[test]
fn corner_birth_depends_on_topology() {
    let corners = [(9, 9), (9, 0), (0, 9)];

    let flat = grid_with(&corners, false);
    assert!(!alive_after_step(&flat, Position::new(0, 0)));

    let torus = grid_with(&corners, true);
    assert!(alive_after_step(&torus, Position::new(0, 0)));
}

#[test]
fn evolve_leaves_input_untouched() {
    let grid = grid_with(&[(4, 5), (5, 5), (6, 5)], false);
    let before = grid.copy();

    let next = Evolution::default().evolve(&grid);

    assert_eq!(grid, before);
    assert_ne!(next, grid);
    assert_eq!(next.width(), grid.width());
    assert_eq!(next.height(), grid.height());
    assert_eq!(next.is_wrapped(), grid.is_wrapped());
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = grid_with(&[(4, 5), (5, 5), (6, 5)], false);
    let vertical = grid_with(&[(5, 4), (5, 5), (5, 6)], false);
    let evolution = Evolution::default();

    let first = evolution.evolve(&horizontal);
    assert_eq!(first, vertical);
    assert_eq!(evolution.evolve(&first), horizontal);
}

#[test]
fn block_is_still_life() {
    let block = grid_with(&[(3, 3), (4, 3), (3, 4), (4, 4)], false);
    assert_eq!(Evolution::default().evolve(&block), block);
}

#[test]
fn glider_circles_the_torus() {
    let glider = grid_with(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)], true);
    let evolution = Evolution::default();

    let mut grid = glider.copy();
    for _ in 0..4 {
        grid = evolution.evolve(&grid);
    }
    let shifted = grid_with(&[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)], true);
    assert_eq!(grid, shifted);

    for _ in 4..40 {
        grid = evolution.evolve(&grid);
    }
    assert_eq!(grid, glider);
}

#[test]
fn serial_and_parallel_schedules_agree() {
    let mut grid = Grid::new(64, 48, true).expect("valid grid");
    let _ = Populator::new(35.0).populate(&mut grid, Some(2024));

    let serial = Evolution::new(Parallelism::Serial);
    let parallel = Evolution::new(Parallelism::Parallel);

    let mut left = grid.copy();
    let mut right = grid;
    for _ in 0..10 {
        left = serial.evolve(&left);
        right = parallel.evolve(&right);
        assert_eq!(left, right);
    }
}

#[test]
fn try_evolve_accepts_present_grid() {
    let grid = grid_with(&[(4, 5), (5, 5), (6, 5)], false);
    let evolution = Evolution::default();
    assert_eq!(evolution.try_evolve(Some(&grid)), Ok(evolution.evolve(&grid)));
    assert_eq!(evolution.try_evolve(None), Err(GridError::MissingGrid));
}
