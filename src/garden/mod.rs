//! The flower box simulation
//!
//! Seeds fall into the box, turn into stems that wander upward, sprout
//! leaves along the way and finish in a bloom. Every live entity is advanced
//! exactly once per tick, in the order it was planted.

pub mod entity;
pub mod growth;
pub mod placement;
pub mod registry;

use crate::border;
use crate::config::{GardenConfig, Layout};
use crate::canvas::Surface;
use crate::dice::Dice;
use crate::error::GardenError;
use crate::help::show_help_modal;
use crate::terminal::{Command, Terminal};
use entity::{Entity, Kind};
use rand::prelude::*;
use registry::Registry;
use tracing::{debug, info, trace};

const HELP: &str = "\
FLOWERBOX
─────────────────
Click      Drop a seed
F2         Plant a row
F3         Flower count
F1/q/Esc   Quit
?          Close help";

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub visited: usize,
    pub spawned: usize,
    pub died: usize,
}

/// Live entities plus the geometry they grow in
pub struct Garden {
    registry: Registry<Entity>,
    layout: Layout,
}

impl Garden {
    pub fn new(layout: Layout) -> Self {
        Self {
            registry: Registry::new(),
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn live_entity_count(&self) -> usize {
        self.registry.len()
    }

    #[cfg(test)]
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.registry.iter()
    }

    /// Advance every entity by one step, drawing into `surface`
    pub fn tick<S, D>(&mut self, surface: &mut S, dice: &mut D) -> TickSummary
    where
        S: Surface + ?Sized,
        D: Dice + ?Sized,
    {
        let layout = self.layout;
        let mut summary = TickSummary::default();

        self.registry.for_each_advancing(|entity, sprouts| {
            let before = sprouts.len();
            growth::advance(entity, &layout, &mut *surface, &mut *dice, sprouts);
            summary.visited += 1;
            summary.spawned += sprouts.len() - before;
            if entity.kind == Kind::Dead {
                summary.died += 1;
            }
        });

        summary
    }

    /// Drop every entity, returning how many were still growing
    pub fn clear(&mut self) -> usize {
        self.registry.drain()
    }
}

/// Run the interactive flower box until the user quits
pub fn run(config: GardenConfig) -> Result<(), GardenError> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    let mut rng = StdRng::seed_from_u64(seed);

    // Check the size before taking over the screen.
    let (cols, rows) = crossterm::terminal::size()?;
    let layout = Layout::new(cols, rows, config.side_margin, config.bottom_margin)?;
    info!(cols, rows, seed, "starting flower box");

    let mut term = Terminal::new()?;
    let mut garden = Garden::new(layout);
    let mut diagnostics = config.diagnostics;

    border::draw_box(term.canvas_mut(), garden.layout());
    if config.auto_plant {
        garden.plant_row(&mut rng);
    }

    loop {
        let summary = garden.tick(term.canvas_mut(), &mut rng);
        trace!(
            visited = summary.visited,
            spawned = summary.spawned,
            died = summary.died,
            live = garden.live_entity_count(),
            "tick"
        );

        let count = diagnostics.then(|| garden.live_entity_count());
        border::draw_status(term.canvas_mut(), garden.layout(), count);
        term.present()?;

        let Some(command) = term.poll_command(config.tick)? else {
            continue;
        };
        debug!(?command, "input");

        match command {
            Command::Plant { row, col } => {
                garden.try_place_seed(row, col);
            }
            Command::BulkPlant => {
                garden.plant_row(&mut rng);
            }
            Command::ToggleDiagnostics => diagnostics = !diagnostics,
            Command::Help => {
                if show_help_modal(&mut term, HELP)? {
                    break;
                }
            }
            Command::Exit => break,
        }
    }

    let remaining = garden.clear();
    info!(remaining, "flower box closed");
    Ok(())
}
