#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic populator that fills a grid with an exact amount of random life.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use life_core::Grid;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fill rate applied when none is configured, expressed as a percentage.
pub const DEFAULT_FILL_RATE: f64 = 10.0;

const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pure system that lays out random life with a precise live-cell count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Populator {
    fill_rate: f64,
}

impl Default for Populator {
    fn default() -> Self {
        Self {
            fill_rate: DEFAULT_FILL_RATE,
        }
    }
}

impl Populator {
    /// Creates a populator targeting the provided percentage of live cells.
    ///
    /// The percentage is clamped into `[0, 100]`.
    #[must_use]
    pub fn new(fill_rate: f64) -> Self {
        Self {
            fill_rate: clamp_fill_rate(fill_rate),
        }
    }

    /// Percentage of cells that will be alive after populating.
    #[must_use]
    pub const fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    /// Updates the target percentage, clamping it into `[0, 100]`.
    pub fn set_fill_rate(&mut self, fill_rate: f64) {
        self.fill_rate = clamp_fill_rate(fill_rate);
    }

    /// Number of cells a grid of `cell_count` cells holds alive once populated.
    #[must_use]
    pub fn live_target(&self, cell_count: usize) -> usize {
        let target = (self.fill_rate / 100.0 * cell_count as f64).round_ties_even();
        (target as usize).min(cell_count)
    }

    /// Replaces every cell of `grid` with a random layout and returns the seed used.
    ///
    /// Exactly [`Populator::live_target`] cells end up alive. The same grid
    /// dimensions, fill rate and seed always reproduce the same layout. When
    /// `seed` is `None` one is derived from the clock and returned so the layout
    /// can be replayed.
    pub fn populate(&self, grid: &mut Grid, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(generate_seed);
        let cell_count = grid.cell_count();
        let live_cells = self.live_target(cell_count);

        let mut pool = life_pool(cell_count, live_cells);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in grid.cells_mut() {
            let index = rng.gen_range(0..pool.len());
            *cell = pool.swap_remove(index);
        }

        debug!(
            "populated {}x{} grid with {live_cells} live cells using seed {seed}",
            grid.width(),
            grid.height()
        );
        seed
    }
}

fn clamp_fill_rate(fill_rate: f64) -> f64 {
    if fill_rate.is_nan() {
        return 0.0;
    }
    fill_rate.clamp(0.0, 100.0)
}

fn life_pool(cell_count: usize, live_cells: usize) -> Vec<bool> {
    let mut pool = vec![false; cell_count];
    pool[..live_cells].fill(true);
    pool
}

fn generate_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    nanos ^ counter.wrapping_mul(SEED_MIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rate_is_clamped() {
        let mut populator = Populator::default();
        assert_eq!(populator.fill_rate(), DEFAULT_FILL_RATE);

        populator.set_fill_rate(90.0);
        assert_eq!(populator.fill_rate(), 90.0);
        populator.set_fill_rate(101.0);
        assert_eq!(populator.fill_rate(), 100.0);
        populator.set_fill_rate(-5.0);
        assert_eq!(populator.fill_rate(), 0.0);
        assert_eq!(Populator::new(f64::NAN).fill_rate(), 0.0);
    }

    #[test]
    fn live_target_rounds_to_nearest() {
        assert_eq!(Populator::new(50.0).live_target(400), 200);
        assert_eq!(Populator::new(66.0).live_target(400), 264);
        assert_eq!(Populator::new(15.0).live_target(101), 15);
        assert_eq!(Populator::new(100.0).live_target(37), 37);
        assert_eq!(Populator::new(0.0).live_target(37), 0);
    }

    #[test]
    fn pool_holds_requested_life() {
        let pool = life_pool(10, 4);
        assert_eq!(pool.iter().filter(|alive| **alive).count(), 4);
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn generated_seeds_differ_between_calls() {
        assert_ne!(generate_seed(), generate_seed());
    }
}
