use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use life_core::{Command, Event, Position};
use life_system_evolution::{Evolution, Parallelism};
use life_world::{self as world, query, Settings, World};

#[test]
fn deterministic_replay_produces_identical_outcome() {
    let first = replay(Parallelism::Parallel, scripted_commands(31_337));
    let second = replay(Parallelism::Parallel, scripted_commands(31_337));

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn replay_is_independent_of_scheduling() {
    let serial = replay(Parallelism::Serial, scripted_commands(8));
    let parallel = replay(Parallelism::Parallel, scripted_commands(8));

    assert_eq!(serial, parallel);
}

#[test]
fn replay_diverges_for_different_seeds() {
    let first = replay(Parallelism::Parallel, scripted_commands(1));
    let second = replay(Parallelism::Parallel, scripted_commands(2));

    assert_ne!(first.cells, second.cells);
}

#[test]
fn replay_logs_every_command() {
    let outcome = replay(Parallelism::Serial, scripted_commands(99));

    assert_eq!(outcome.events.len(), 1 + 2 + 25);
    assert_eq!(
        outcome.events[0],
        EventRecord::Populated {
            seed: 99,
            live_cells: 192,
        }
    );
    assert!(matches!(
        outcome.events.last(),
        Some(EventRecord::GenerationAdvanced { generation: 25, .. })
    ));
}

fn replay(parallelism: Parallelism, commands: Vec<Command>) -> ReplayOutcome {
    let settings = Settings {
        width: 32,
        height: 24,
        wrapped: true,
        fill_rate: 25.0,
    };
    let mut world = World::with_evolution(settings, Evolution::new(parallelism))
        .expect("valid settings");
    let mut log = Vec::new();

    for command in commands {
        let mut events = Vec::new();
        world::apply(&mut world, command, &mut events).expect("command accepted");
        log.extend(events.iter().map(EventRecord::from));
    }

    ReplayOutcome {
        cells: query::grid(&world).export_state(),
        generation: query::generation(&world),
        events: log,
    }
}

fn scripted_commands(seed: u64) -> Vec<Command> {
    let mut commands = vec![
        Command::Populate { seed: Some(seed) },
        Command::SetCell {
            position: Position::new(0, 0),
            alive: true,
        },
        Command::SetCell {
            position: Position::new(31, 23),
            alive: false,
        },
    ];
    commands.extend(std::iter::repeat(Command::Advance).take(25));
    commands
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    cells: Vec<bool>,
    generation: u64,
    events: Vec<EventRecord>,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum EventRecord {
    GenerationAdvanced { generation: u64, live_cells: usize },
    Populated { seed: u64, live_cells: usize },
    Cleared,
    CellChanged { position: Position, alive: bool },
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        match event {
            Event::GenerationAdvanced {
                generation,
                live_cells,
            } => Self::GenerationAdvanced {
                generation: *generation,
                live_cells: *live_cells,
            },
            Event::Populated { seed, live_cells } => Self::Populated {
                seed: *seed,
                live_cells: *live_cells,
            },
            Event::Cleared => Self::Cleared,
            Event::CellChanged { position, alive } => Self::CellChanged {
                position: *position,
                alive: *alive,
            },
        }
    }
}
