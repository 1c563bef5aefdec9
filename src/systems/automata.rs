//! Water transition rules, applied once per queued coordinate
//!
//! Precedence is strict: falling beats sideways flow, flow beats bouncing,
//! bouncing beats settling. A rule that fires returns immediately, so later
//! rules never observe its intermediate state.

use crate::domain::cell::CellKind;

use super::droplets::Droplet;
use super::{xorshift32, RuleContext};

/// One-in-N chance that a fully blocked cell forgets its drift direction.
const SETTLE_DIE: u32 = 10;

/// Advance one interior coordinate through the rule chain.
/// The caller guarantees `grid.is_interior(x, y)`.
pub fn apply_rules(ctx: &mut RuleContext<'_>, x: u32, y: u32) {
    if ctx.grid.is_moved(x, y) {
        return;
    }
    if ctx.grid.kind_at(x, y) != CellKind::Water {
        return;
    }

    // Unsupported water leaves the grid and free-falls as a droplet.
    if ctx.grid.kind_at(x, y + 1) == CellKind::Air {
        ctx.grid.put_kind(x, y, CellKind::Air);
        ctx.grid.mark_moved(x, y);
        ctx.queue.trigger_around(x as i32, y as i32);
        ctx.spawned.push(Droplet::new(x as f32, y as f32, 0.0, 0.0));
        return;
    }

    let mut vx = i32::from(ctx.grid.velocity_at(x, y));
    if vx == 0 {
        // Fair coin picks the preferred side; keep whichever is open.
        let (first, second) = if xorshift32(ctx.rng) & 1 == 0 {
            (1, -1)
        } else {
            (-1, 1)
        };
        if ctx.grid.kind_at((x as i32 + first) as u32, y) == CellKind::Air {
            vx = first;
            ctx.grid.put_velocity(x, y, vx as i8);
        } else if ctx.grid.kind_at((x as i32 + second) as u32, y) == CellKind::Air {
            vx = second;
            ctx.grid.put_velocity(x, y, vx as i8);
        }
    }

    if vx != 0 {
        let tx = (x as i32 + vx) as u32;
        if ctx.grid.kind_at(tx, y) == CellKind::Air {
            ctx.grid.put_kind(x, y, CellKind::Air);
            ctx.grid.put_kind(tx, y, CellKind::Water);
            ctx.grid.put_velocity(tx, y, vx as i8);
            ctx.grid.mark_moved(tx, y);
            ctx.queue.trigger_around(x as i32, y as i32);
            ctx.queue.trigger_around(tx as i32, y as i32);

            // Flowing over a ledge: detach as a droplet that keeps the
            // horizontal motion instead of resting above the hole.
            if ctx.grid.kind_at(tx, y + 1) == CellKind::Air {
                ctx.grid.put_kind(tx, y, CellKind::Air);
                ctx.spawned
                    .push(Droplet::new(x as f32, y as f32, vx as f32, 0.0));
            }
            return;
        }

        if ctx.grid.kind_at((x as i32 - vx) as u32, y) == CellKind::Air {
            // Forward blocked, reverse open: bounce.
            ctx.grid.put_velocity(x, y, (-vx) as i8);
            ctx.queue.trigger_around(x as i32, y as i32);
            return;
        }
    }

    // Wedged between blocked neighbors: occasionally forget the direction so
    // a later wake-up can re-pick.
    if xorshift32(ctx.rng) % SETTLE_DIE == 0 {
        ctx.grid.put_velocity(x, y, 0);
    }
}
