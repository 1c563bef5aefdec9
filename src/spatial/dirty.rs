//! DirtyQueue - the per-tick worklist of cells that may still change
//!
//! A packed-key set guards the queue so each coordinate is enqueued at most
//! once per tick. The engine swaps the queue out before iterating, so every
//! trigger raised while a tick runs lands in the next tick's queue.

use rustc_hash::FxHashSet;

use super::grid::packed_key;

pub struct DirtyQueue {
    width: u32,
    height: u32,
    pending: Vec<(u32, u32)>,
    keys: FxHashSet<u32>,
}

impl DirtyQueue {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pending: Vec::new(),
            keys: FxHashSet::default(),
        }
    }

    /// Enqueue a coordinate for the next processing pass.
    /// Out-of-bounds coordinates are ignored, duplicates are dropped.
    pub fn trigger(&mut self, x: i32, y: i32) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if self.keys.insert(packed_key(x, y)) {
            self.pending.push((x, y));
        }
    }

    /// Enqueue a coordinate and its four axis-aligned neighbors. Called after
    /// any mutation that could influence neighboring transitions.
    pub fn trigger_around(&mut self, x: i32, y: i32) {
        self.trigger(x, y);
        self.trigger(x + 1, y);
        self.trigger(x - 1, y);
        self.trigger(x, y + 1);
        self.trigger(x, y - 1);
    }

    /// Swap out the queued coordinates and reset the dedup set.
    pub fn drain(&mut self) -> Vec<(u32, u32)> {
        self.keys.clear();
        std::mem::take(&mut self.pending)
    }

    /// Enqueue every cell of the grid (startup and full resets).
    pub fn seed_all(&mut self) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.trigger(x, y);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
