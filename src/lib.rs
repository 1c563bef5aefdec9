//! Rill Engine - Cellular automaton water simulation in WASM
//!
//! The engine computes state only. The embedder owns the canvas, pointer
//! decoding and the tick interval, and talks to the engine through the
//! `Engine` facade (or `EngineCore` from native Rust).
//!
//! Architecture:
//! - core/       - Errors shared across the engine
//! - domain/     - Cell vocabulary
//! - spatial/    - Cell grid and dirty-cell work queue
//! - systems/    - Automaton rules and free-flight droplets
//! - simulation/ - Orchestration and the wasm API

pub mod core;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use crate::core::EngineError;
pub use domain::cell::{CellKind, KIND_AIR, KIND_SOLID, KIND_WATER};
pub use simulation::{Engine, EngineCore, EngineSettings, SimStats};
pub use spatial::grid::CellGrid;
pub use systems::droplets::Droplet;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌊 Rill WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export cell kind ids for JS
#[wasm_bindgen]
pub fn kind_air() -> u8 {
    KIND_AIR
}
#[wasm_bindgen]
pub fn kind_solid() -> u8 {
    KIND_SOLID
}
#[wasm_bindgen]
pub fn kind_water() -> u8 {
    KIND_WATER
}
