//! Engine - composition root for the water automaton
//!
//! EngineCore owns the grid, the dirty queue, the droplet list and the RNG
//! state; `Engine` (facade.rs) wraps it for the wasm boundary. The core
//! computes state only: canvas drawing, pointer decoding and the tick
//! interval belong to the embedder, which drives `step()` and the paint and
//! query operations from one execution context.

use crate::core::EngineError;
use crate::domain::cell::{CellKind, VelocitySign};
use crate::spatial::dirty::DirtyQueue;
use crate::spatial::grid::CellGrid;
use crate::systems::droplets::Droplet;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::Engine;
pub use perf_stats::SimStats;
pub use settings::EngineSettings;

use perf_timer::PerfTimer;

/// The simulation engine
pub struct EngineCore {
    grid: CellGrid,
    queue: DirtyQueue,
    droplets: Vec<Droplet>,
    // Droplets born during the automaton pass; folded into `droplets` at the
    // end of the tick so they first fly on the next tick.
    spawned: Vec<Droplet>,

    // Settings
    gravity: f32,
    reattach_kick: f32,

    // State
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: SimStats,
}

impl EngineCore {
    /// Create an engine from validated settings
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        init::create_engine_core(settings)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Number of droplets currently in flight
    pub fn particle_count(&self) -> usize {
        self.droplets.len()
    }

    /// Number of coordinates queued for the next tick
    pub fn pending_updates(&self) -> usize {
        self.queue.len()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> SimStats {
        settings::get_perf_stats(self)
    }

    /// Advance the simulation by exactly one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Paint a single interior cell and wake its neighborhood
    pub fn paint_cell(&mut self, x: u32, y: u32, kind: CellKind) -> Result<(), EngineError> {
        commands::paint_cell(self, x, y, kind)
    }

    /// Paint a round brush of cells around a center; cells outside the
    /// interior are skipped
    pub fn paint_area(&mut self, cx: i32, cy: i32, radius: i32, kind: CellKind) {
        commands::paint_area(self, cx, cy, radius, kind)
    }

    /// Reset the world to its freshly-constructed state
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Read a cell's kind (bounds-checked)
    pub fn kind(&self, x: u32, y: u32) -> Result<CellKind, EngineError> {
        self.grid.kind(x, y)
    }

    /// Read a cell's drift sign (bounds-checked)
    pub fn velocity(&self, x: u32, y: u32) -> Result<VelocitySign, EngineError> {
        self.grid.velocity(x, y)
    }

    /// Copied snapshot of the droplets currently in flight
    pub fn particles(&self) -> Vec<Droplet> {
        self.droplets.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
