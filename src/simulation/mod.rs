//! Simulation - World orchestration
//!
//! The world owns the grid, the behavior registry and the random source, and
//! hands them to the rules one cell at a time. There is no global state: every
//! rule receives the grid by `&mut` through its update context.
//!
//! Scan order is part of observable behavior. A step visits cells row-major,
//! top row first, left to right, and runs each particle's rule at most once.

use crate::behaviors::BehaviorRegistry;
use crate::core::random::RandomSource;
use crate::domain::species::Species;
use crate::grid::Grid;

#[path = "perf/step_timer.rs"]
mod step_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use settings::WorldSettings;
pub use step_stats::StepStats;

use step_timer::StepTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: Box<dyn RandomSource>,
    settings: WorldSettings,

    // State
    frame: u64,
    last_step: StepStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and the default seed.
    ///
    /// Unchecked: the grid is allocated as asked. Untrusted sizes go through
    /// `with_dimensions`, which applies the same limits as settings.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(WorldSettings {
            width,
            height,
            ..WorldSettings::default()
        })
    }

    /// Checked constructor: rejects zero or oversized grids
    pub fn with_dimensions(width: u32, height: u32) -> Result<Self, String> {
        Self::from_settings(WorldSettings {
            width,
            height,
            ..WorldSettings::default()
        })
    }

    pub fn from_settings(settings: WorldSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(init::create_world_core(settings))
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        let settings = WorldSettings::from_json(json)?;
        Ok(init::create_world_core(settings))
    }

    /// Replace the random source (e.g. a scripted one in tests)
    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &WorldSettings { &self.settings }

    pub fn particle_count(&self) -> u32 {
        self.grid.particle_count() as u32
    }

    /// Stats of the last completed step
    pub fn last_step(&self) -> StepStats {
        self.last_step
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn species_at(&self, row: i32, col: i32) -> Option<Species> {
        self.grid.species_at(row, col)
    }

    /// Row-major ABGR pixels for the canvas
    pub fn colors(&self) -> &[u32] {
        self.grid.colors()
    }

    /// Place a particle by dropdown name into an empty cell
    pub fn add_particle(&mut self, row: i32, col: i32, name: &str) -> bool {
        commands::add_particle(self, row, col, name)
    }

    /// Circular brush; returns how many particles were placed
    pub fn add_particles_in_radius(&mut self, row: i32, col: i32, radius: i32, name: &str) -> u32 {
        commands::add_particles_in_radius(self, row, col, radius, name)
    }

    pub fn remove_particle(&mut self, row: i32, col: i32) -> bool {
        commands::remove_particle(self, row, col)
    }

    /// Circular eraser; returns how many particles were removed
    pub fn remove_particles_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        commands::remove_particles_in_radius(self, row, col, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Run one full step over the grid
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Run the rule of the particle at (row, col) once, outside of a step
    pub fn update_particle(&mut self, row: i32, col: i32) {
        step::update_particle(self, row, col);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
