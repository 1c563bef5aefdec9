//! CellGrid - Structure of Arrays (SoA) cell storage
//!
//! Three parallel per-cell arrays instead of an array of cell structs:
//! kind, horizontal drift sign, moved flag. Linear memory, cheap resets.
//!
//! The outer one-cell ring is baked Solid at construction and stays Solid
//! for the grid's whole lifetime; every contract write path enforces it.

use crate::core::EngineError;
use crate::domain::cell::{CellKind, VelocitySign};

mod accessors;
mod indexing;

pub use indexing::{packed_key, MAX_GRID_DIM, MIN_GRID_DIM};

/// SoA cell store - each per-cell property in its own contiguous array
pub struct CellGrid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) kinds: Vec<CellKind>,
    pub(crate) vx: Vec<VelocitySign>,
    pub(crate) moved: Vec<u8>, // 0 = untouched, 1 = written as a destination this tick
}

impl CellGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width < MIN_GRID_DIM || height < MIN_GRID_DIM {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid must be at least {MIN_GRID_DIM}x{MIN_GRID_DIM}, got {width}x{height}"
            )));
        }
        if width > MAX_GRID_DIM || height > MAX_GRID_DIM {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid dimensions above {MAX_GRID_DIM} overflow packed coordinate keys, got {width}x{height}"
            )));
        }

        let size = (width as usize) * (height as usize);
        let mut grid = Self {
            width,
            height,
            size,
            kinds: vec![CellKind::Air; size],
            vx: vec![0; size],
            moved: vec![0; size],
        };
        grid.bake_ring();
        Ok(grid)
    }

    /// Reset to the freshly-constructed state: Air interior, Solid ring,
    /// zero drift, clear moved flags.
    pub fn reset(&mut self) {
        self.kinds.fill(CellKind::Air);
        self.vx.fill(0);
        self.moved.fill(0);
        self.bake_ring();
    }

    fn bake_ring(&mut self) {
        for x in 0..self.width {
            let top = self.index(x, 0);
            let bottom = self.index(x, self.height - 1);
            self.kinds[top] = CellKind::Solid;
            self.kinds[bottom] = CellKind::Solid;
        }
        for y in 0..self.height {
            let left = self.index(0, y);
            let right = self.index(self.width - 1, y);
            self.kinds[left] = CellKind::Solid;
            self.kinds[right] = CellKind::Solid;
        }
    }
}
