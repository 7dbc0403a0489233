use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot of the last `update` call. Timings are summed over sub-steps.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) sub_steps: u32,
    pub(super) contacts: u32,
    pub(super) cell_overflows: u32,
    pub(super) particle_count: u32,
    pub(super) grid_cols: u32,
    pub(super) grid_rows: u32,
    pub(super) max_cell_occupancy: u32,
    pub(super) memory_bytes: u32,
    pub(super) parallel: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn cell_overflows(&self) -> u32 { self.cell_overflows }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_cols(&self) -> u32 { self.grid_cols }
    #[wasm_bindgen(getter)]
    pub fn grid_rows(&self) -> u32 { self.grid_rows }
    #[wasm_bindgen(getter)]
    pub fn max_cell_occupancy(&self) -> u32 { self.max_cell_occupancy }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn parallel(&self) -> bool { self.parallel }
}
