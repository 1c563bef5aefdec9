use crate::core::EngineError;
use crate::spatial::dirty::DirtyQueue;
use crate::spatial::grid::CellGrid;

use super::perf_stats::SimStats;
use super::settings::EngineSettings;
use super::EngineCore;

pub(super) fn create_engine_core(settings: EngineSettings) -> Result<EngineCore, EngineError> {
    settings.validate()?;

    let grid = CellGrid::new(settings.width, settings.height)?;
    let mut queue = DirtyQueue::new(settings.width, settings.height);
    // Every cell gets one initial evaluation; afterwards only triggers wake
    // cells, so an idle world costs nothing per tick.
    queue.seed_all();

    Ok(EngineCore {
        grid,
        queue,
        droplets: Vec::new(),
        spawned: Vec::new(),
        gravity: settings.gravity,
        reattach_kick: settings.reattach_kick,
        frame: 0,
        rng_state: settings.seed,
        perf_enabled: false,
        perf_stats: SimStats::default(),
    })
}
