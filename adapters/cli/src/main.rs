#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Game of Life session headlessly.

mod pattern_transfer;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use life_core::{Command, Event};
use life_world::{self as world, query, Settings, World};
use log::{debug, info};

use crate::pattern_transfer::PatternSnapshot;

const ALIVE_GLYPH: char = '#';
const DEAD_GLYPH: char = '.';

/// Runs Conway's Game of Life on a fixed-size grid and prints each generation.
#[derive(Debug, Parser)]
#[command(name = "life", version)]
struct Cli {
    /// Number of grid columns
    #[arg(long, default_value_t = Settings::default().width)]
    width: u32,

    /// Number of grid rows
    #[arg(long, default_value_t = Settings::default().height)]
    height: u32,

    /// Wrap the grid edges around like a torus
    #[arg(long)]
    wrapped: bool,

    /// Percentage of cells brought to life when populating (clamped to 0-100)
    #[arg(long, default_value_t = Settings::default().fill_rate)]
    fill_rate: f64,

    /// Seed for the random layout; generated from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to advance
    #[arg(short, long, default_value_t = 10)]
    generations: u64,

    /// Start from an exported pattern string instead of random life
    #[arg(long, conflicts_with_all = ["seed", "width", "height", "wrapped"])]
    pattern: Option<String>,

    /// Print the final generation as a pattern string
    #[arg(long)]
    export: bool,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

/// Entry point for the Game of Life command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let pattern = cli
        .pattern
        .as_deref()
        .map(PatternSnapshot::decode)
        .transpose()
        .context("invalid --pattern")?;

    let settings = match &pattern {
        Some(pattern) => Settings {
            width: pattern.width,
            height: pattern.height,
            wrapped: pattern.wrapped,
            fill_rate: cli.fill_rate,
        },
        None => Settings {
            width: cli.width,
            height: cli.height,
            wrapped: cli.wrapped,
            fill_rate: cli.fill_rate,
        },
    };
    let mut world = World::new(settings).context("invalid grid settings")?;

    let mut events = Vec::new();
    match pattern {
        Some(pattern) => {
            for position in pattern.live {
                world::apply(
                    &mut world,
                    Command::SetCell {
                        position,
                        alive: true,
                    },
                    &mut events,
                )
                .with_context(|| format!("pattern cell {position} does not fit the grid"))?;
            }
            info!("loaded pattern with {} live cells", query::live_count(&world));
        }
        None => world::apply(&mut world, Command::Populate { seed: cli.seed }, &mut events)
            .context("failed to populate the grid")?,
    }
    report(&events);

    let mut stdout = io::stdout().lock();
    if !cli.quiet {
        render(&mut stdout, &world)?;
    }

    for _ in 0..cli.generations {
        events.clear();
        world::apply(&mut world, Command::Advance, &mut events)
            .context("failed to advance the grid")?;
        report(&events);
        if !cli.quiet {
            render(&mut stdout, &world)?;
        }
    }

    writeln!(
        stdout,
        "generation {} of a {}x{} {} grid: {} live cells",
        query::generation(&world),
        query::width(&world),
        query::height(&world),
        if query::is_wrapped(&world) {
            "wrapped"
        } else {
            "flat"
        },
        query::live_count(&world)
    )?;

    if cli.export {
        let encoded = PatternSnapshot::capture(query::grid(&world))
            .encode()
            .context("failed to export the pattern")?;
        writeln!(stdout, "{encoded}")?;
    }

    Ok(())
}

fn report(events: &[Event]) {
    for event in events {
        match event {
            Event::Populated { seed, live_cells } => {
                info!("populated {live_cells} cells; rerun with --seed {seed} to reproduce");
            }
            other => debug!("{other:?}"),
        }
    }
}

fn render(out: &mut impl Write, world: &World) -> io::Result<()> {
    let state = query::state(world);
    writeln!(
        out,
        "generation {} ({} alive)",
        query::generation(world),
        query::live_count(world)
    )?;

    let mut line = String::with_capacity(state.width());
    for y in 0..state.height() {
        line.clear();
        for x in 0..state.width() {
            let alive = state.get(x, y).unwrap_or(false);
            line.push(if alive { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
