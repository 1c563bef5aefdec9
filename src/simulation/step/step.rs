use crate::systems::automata::apply_rules;
use crate::systems::droplets;
use crate::systems::RuleContext;

use super::random::shuffle;
use super::{EngineCore, PerfTimer};

pub(super) fn step(core: &mut EngineCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.grid_size = core.grid.size() as u32;
        core.perf_stats.pending_updates = core.queue.len() as u32;
        core.perf_stats.particle_count = core.droplets.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Swap the queue out first: every trigger raised below feeds the next
    // tick. The shuffle keeps processing order free of directional bias.
    let mut updates = core.queue.drain();
    shuffle(&mut updates, &mut core.rng_state);

    // === AUTOMATON PASS ===
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut cells_processed = 0u32;
    for (x, y) in updates {
        if !core.grid.is_interior(x, y) {
            continue;
        }
        cells_processed += 1;
        let mut ctx = RuleContext {
            grid: &mut core.grid,
            queue: &mut core.queue,
            spawned: &mut core.spawned,
            rng: &mut core.rng_state,
        };
        apply_rules(&mut ctx, x, y);
    }
    core.grid.reset_moved();
    if let Some(t0) = t0 {
        core.perf_stats.automata_ms = t0.elapsed_ms();
        core.perf_stats.cells_processed = cells_processed;
    }

    // === DROPLET PASS ===
    // Retired droplets are swap-removed so the list stays compact; droplets
    // spawned above join afterwards and first fly on the next tick.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut integrated = 0u32;
    let mut retired = 0u32;
    let mut i = 0;
    while i < core.droplets.len() {
        let mut droplet = core.droplets[i];
        integrated += 1;
        if droplets::integrate(
            &mut core.grid,
            &mut core.queue,
            &mut droplet,
            core.gravity,
            core.reattach_kick,
        ) {
            core.droplets[i] = droplet;
            i += 1;
        } else {
            retired += 1;
            core.droplets.swap_remove(i);
        }
    }
    core.droplets.append(&mut core.spawned);
    if let Some(t0) = t0 {
        core.perf_stats.droplets_ms = t0.elapsed_ms();
        core.perf_stats.droplets_integrated = integrated;
        core.perf_stats.droplets_retired = retired;
    }

    if let Some(start) = step_start {
        core.perf_stats.step_ms = start.elapsed_ms();
    }

    core.frame += 1;
}
