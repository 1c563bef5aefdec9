use crate::core::EngineError;
use crate::domain::cell::CellKind;

use super::EngineCore;

pub(super) fn paint_cell(
    core: &mut EngineCore,
    x: u32,
    y: u32,
    kind: CellKind,
) -> Result<(), EngineError> {
    if x >= core.grid.width() || y >= core.grid.height() || !core.grid.is_interior(x, y) {
        return Err(EngineError::InvalidCoordinate {
            x: x as i64,
            y: y as i64,
        });
    }

    core.grid.set_kind(x, y, kind)?;
    core.queue.trigger_around(x as i32, y as i32);
    Ok(())
}

pub(super) fn paint_area(core: &mut EngineCore, cx: i32, cy: i32, radius: i32, kind: CellKind) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x > 0 && y > 0 {
                    // Cells outside the interior are skipped, not an error.
                    let _ = paint_cell(core, x as u32, y as u32, kind);
                }
            }
        }
    }
}

pub(super) fn clear(core: &mut EngineCore) {
    core.grid.reset();
    core.droplets.clear();
    core.spawned.clear();
    core.queue.drain();
    core.queue.seed_all();
    core.frame = 0;
}
