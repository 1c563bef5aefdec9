//! Systems - the automaton rule engine and the free-flight droplet pass
//!
//! Both mutate the grid through narrow seams: the rules see a RuleContext so
//! one activation can move cells, wake neighbors and hand mass to the droplet
//! list in a single place; the droplet pass talks to the grid and queue
//! directly.

pub mod automata;
pub mod droplets;

use crate::spatial::dirty::DirtyQueue;
use crate::spatial::grid::CellGrid;

use droplets::Droplet;

/// Mutable engine state handed to the automaton rules for one coordinate.
pub struct RuleContext<'a> {
    pub grid: &'a mut CellGrid,
    pub queue: &'a mut DirtyQueue,
    /// Droplets born during this pass; the engine folds them into the active
    /// list after the droplet pass so they first fly on the next tick.
    pub spawned: &'a mut Vec<Droplet>,
    pub rng: &'a mut u32,
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}
