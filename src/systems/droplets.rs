//! Free-flight droplets: water mass detached from the grid
//!
//! A droplet integrates once per tick with sub-steps clamped to one cell, so
//! no grid cell is skipped at any speed. A collision tries to hand the mass
//! back to the grid one cell back along the travel direction; when every
//! nearby cell is taken the droplet sheds its horizontal speed and takes an
//! upward kick off the blockage instead of clipping into it.

use crate::domain::cell::CellKind;
use crate::spatial::dirty::DirtyQueue;
use crate::spatial::grid::CellGrid;

/// Remainder below this threshold ends a movement phase.
const MIN_SUBSTEP: f32 = 0.001;

/// A droplet in free flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Droplet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Droplet {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy }
    }
}

/// Integrate one droplet for one tick. Returns false once the droplet is
/// done: reattached to the grid, or out of bounds and discarded.
pub fn integrate(
    grid: &mut CellGrid,
    queue: &mut DirtyQueue,
    droplet: &mut Droplet,
    gravity: f32,
    reattach_kick: f32,
) -> bool {
    droplet.vy += gravity;

    let row = droplet.y.round() as i32;
    if row < 0 || row >= grid.height() as i32 {
        return false;
    }

    // Horizontal phase, against the row the droplet entered the tick on.
    let mut dx = droplet.vx;
    while dx.abs() > MIN_SUBSTEP {
        let step = dx.clamp(-1.0, 1.0);
        droplet.x += step;
        dx -= step;

        let col = droplet.x.round() as i32;
        if col < 0 || col >= grid.width() as i32 {
            return false;
        }

        if grid.kind_at(col as u32, row as u32) != CellKind::Air {
            let dir = if step > 0.0 { 1 } else { -1 };
            if try_place(grid, queue, droplet, col - dir, row, gravity, reattach_kick) {
                return false;
            }
            break;
        }
    }

    // Vertical phase, against the column the horizontal phase settled on.
    let col = droplet.x.round() as i32;
    if col < 0 || col >= grid.width() as i32 {
        return false;
    }
    let mut dy = droplet.vy;
    while dy.abs() > MIN_SUBSTEP {
        let step = dy.clamp(-1.0, 1.0);
        droplet.y += step;
        dy -= step;

        let row = droplet.y.round() as i32;
        if row < 0 || row >= grid.height() as i32 {
            return false;
        }

        if grid.kind_at(col as u32, row as u32) != CellKind::Air {
            let dir = if step > 0.0 { 1 } else { -1 };
            if try_place(grid, queue, droplet, col, row - dir, gravity, reattach_kick) {
                return false;
            }
            break;
        }
    }

    true
}

/// Hand a droplet's mass back to the grid near (x, y): the target cell first,
/// then its left, right, upper and lower neighbors. On success the chosen
/// cell becomes Water and its neighborhood is woken. On failure the droplet
/// loses its horizontal speed and bounces upward off the blockage.
fn try_place(
    grid: &mut CellGrid,
    queue: &mut DirtyQueue,
    droplet: &mut Droplet,
    x: i32,
    y: i32,
    gravity: f32,
    reattach_kick: f32,
) -> bool {
    let candidates = [(x, y), (x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)];
    for (cx, cy) in candidates {
        if grid.in_bounds(cx, cy) && grid.kind_at(cx as u32, cy as u32) == CellKind::Air {
            grid.put_kind(cx as u32, cy as u32, CellKind::Water);
            queue.trigger_around(cx, cy);
            return true;
        }
    }

    droplet.vx = 0.0;
    if droplet.vy > 0.0 {
        droplet.vy = 0.0;
    }
    droplet.vy -= gravity * reattach_kick;
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> (CellGrid, DirtyQueue) {
        let grid = CellGrid::new(9, 9).unwrap();
        let queue = DirtyQueue::new(9, 9);
        (grid, queue)
    }

    #[test]
    fn airborne_droplet_accumulates_gravity() {
        let (mut grid, mut queue) = open_grid();
        let mut droplet = Droplet::new(4.0, 2.0, 0.0, 0.0);
        assert!(integrate(&mut grid, &mut queue, &mut droplet, 0.1, 1.1));
        assert!((droplet.vy - 0.1).abs() < 1e-6);
        assert!((droplet.y - 2.1).abs() < 1e-6);
        assert_eq!(droplet.x, 4.0);
    }

    #[test]
    fn fast_droplet_cannot_tunnel_through_a_wall() {
        let (mut grid, mut queue) = open_grid();
        grid.set_kind(6, 4, CellKind::Solid).unwrap();
        // Speed far above one cell per tick; sub-stepping must still hit the
        // wall and park the mass right in front of it.
        let mut droplet = Droplet::new(2.0, 4.0, 4.0, -0.1);
        assert!(!integrate(&mut grid, &mut queue, &mut droplet, 0.1, 1.1));
        assert_eq!(grid.kind(5, 4).unwrap(), CellKind::Water);
    }

    #[test]
    fn droplet_leaving_the_grid_is_discarded_without_writes() {
        let (mut grid, mut queue) = open_grid();
        let snapshot = grid.kinds.clone();
        // Already past the bottom edge; the very first bounds check drops it.
        let mut droplet = Droplet::new(4.0, 40.0, 0.0, 1.0);
        assert!(!integrate(&mut grid, &mut queue, &mut droplet, 0.1, 1.1));
        assert_eq!(grid.kinds, snapshot);
        assert!(queue.is_empty());
    }

    #[test]
    fn reattachment_prefers_the_target_cell() {
        let (mut grid, mut queue) = open_grid();
        grid.set_kind(4, 5, CellKind::Solid).unwrap();
        let mut droplet = Droplet::new(4.0, 4.4, 0.0, 0.5);
        assert!(!integrate(&mut grid, &mut queue, &mut droplet, 0.1, 1.1));
        assert_eq!(grid.kind(4, 4).unwrap(), CellKind::Water);
        assert!(!queue.is_empty());
    }
}
