use wasm_bindgen::prelude::*;

/// Per-step timing and workload snapshot, for the embedder's diagnostics
/// overlay. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct SimStats {
    pub(super) step_ms: f64,
    pub(super) automata_ms: f64,
    pub(super) droplets_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) droplets_integrated: u32,
    pub(super) droplets_retired: u32,
    pub(super) pending_updates: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
}

impl SimStats {
    pub(crate) fn reset(&mut self) {
        *self = SimStats::default();
    }
}

#[wasm_bindgen]
impl SimStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }
    #[wasm_bindgen(getter)]
    pub fn automata_ms(&self) -> f64 {
        self.automata_ms
    }
    #[wasm_bindgen(getter)]
    pub fn droplets_ms(&self) -> f64 {
        self.droplets_ms
    }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 {
        self.cells_processed
    }
    #[wasm_bindgen(getter)]
    pub fn droplets_integrated(&self) -> u32 {
        self.droplets_integrated
    }
    #[wasm_bindgen(getter)]
    pub fn droplets_retired(&self) -> u32 {
        self.droplets_retired
    }
    #[wasm_bindgen(getter)]
    pub fn pending_updates(&self) -> u32 {
        self.pending_updates
    }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }
}
