use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::cell::CellKind;

use super::perf_stats::SimStats;
use super::settings::EngineSettings;
use super::EngineCore;

fn js_err(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Engine, JsValue> {
        let settings = EngineSettings {
            width,
            height,
            ..EngineSettings::default()
        };
        let core = EngineCore::new(settings).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Create an engine from a settings JSON document
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: &str) -> Result<Engine, JsValue> {
        let settings = EngineSettings::from_json(json).map_err(js_err)?;
        let core = EngineCore::new(settings).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.core.particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn pending_updates(&self) -> u32 {
        self.core.pending_updates() as u32
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> SimStats {
        self.core.get_perf_stats()
    }

    /// Step the simulation forward by one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Paint a single interior cell
    pub fn paint(&mut self, x: u32, y: u32, kind: u8) -> Result<(), JsValue> {
        let kind = decode_kind(kind)?;
        self.core.paint_cell(x, y, kind).map_err(js_err)
    }

    /// Paint a round brush of cells around a center (pointer input)
    pub fn paint_area(&mut self, cx: i32, cy: i32, radius: i32, kind: u8) -> Result<(), JsValue> {
        let kind = decode_kind(kind)?;
        self.core.paint_area(cx, cy, radius, kind);
        Ok(())
    }

    /// Clear the world back to its initial state
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Read a cell's kind id
    pub fn cell_at(&self, x: u32, y: u32) -> Result<u8, JsValue> {
        self.core.kind(x, y).map(CellKind::id).map_err(js_err)
    }

    /// Read a cell's drift sign (-1, 0 or +1)
    pub fn velocity_at(&self, x: u32, y: u32) -> Result<i32, JsValue> {
        self.core.velocity(x, y).map(i32::from).map_err(js_err)
    }

    /// Snapshot of droplet positions as interleaved (x, y) pairs, for the
    /// renderer. A copy, never a live view.
    pub fn particle_positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.particle_count() * 2);
        for droplet in self.core.particles() {
            out.push(droplet.x);
            out.push(droplet.y);
        }
        out
    }
}

fn decode_kind(id: u8) -> Result<CellKind, JsValue> {
    CellKind::from_id(id).ok_or_else(|| JsValue::from_str(&format!("unknown cell kind id {id}")))
}
