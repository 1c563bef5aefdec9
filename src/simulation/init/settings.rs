use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::spatial::grid::{MAX_GRID_DIM, MIN_GRID_DIM};

use super::perf_stats::SimStats;
use super::EngineCore;

/// Construction-time configuration. Field names are camelCase on the wire so
/// a JS embedder can pass the document straight through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub width: u32,
    pub height: u32,
    /// Downward acceleration added to every droplet each tick
    pub gravity: f32,
    /// Xorshift32 seed; the whole run is a pure function of this and the
    /// paint/step call sequence
    pub seed: u32,
    /// Scale of the upward velocity kick a droplet takes when reattachment
    /// fails, in multiples of gravity
    pub reattach_kick: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            gravity: 0.1,
            seed: 12345,
            reattach_kick: 1.1,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(format!("settings json: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width < MIN_GRID_DIM || self.height < MIN_GRID_DIM {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid must be at least {MIN_GRID_DIM}x{MIN_GRID_DIM}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_GRID_DIM || self.height > MAX_GRID_DIM {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid dimensions above {MAX_GRID_DIM} overflow packed coordinate keys, got {}x{}",
                self.width, self.height
            )));
        }
        if self.seed == 0 {
            return Err(EngineError::InvalidConfiguration(
                "seed must be nonzero for xorshift32".into(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(EngineError::InvalidConfiguration(
                "gravity must be finite".into(),
            ));
        }
        if !self.reattach_kick.is_finite() || self.reattach_kick < 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "reattach kick must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}

pub(super) fn set_gravity(core: &mut EngineCore, gravity: f32) {
    core.gravity = gravity;
}

pub(super) fn enable_perf_metrics(core: &mut EngineCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &EngineCore) -> SimStats {
    core.perf_stats.clone()
}
