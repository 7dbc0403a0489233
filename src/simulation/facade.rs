use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::ConfigError;

use super::emitter::Emitter;
use super::perf_stats::PerfStats;
use super::render_extract;
use super::Solver;

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle over a `Solver`, plus an optional emitter
#[wasm_bindgen]
pub struct World {
    solver: Solver,
    emitter: Option<Emitter>,
}

#[wasm_bindgen]
impl World {
    /// Create a new world; throws on an invalid size or radius
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, radius: f32) -> Result<World, JsValue> {
        let solver = Solver::new(Vec2::new(width, height), radius).map_err(to_js)?;
        Ok(Self { solver, emitter: None })
    }

    /// Create from a camelCase `SolverConfig` JSON document
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let solver = Solver::from_json(json).map_err(to_js)?;
        Ok(Self { solver, emitter: None })
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.solver.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.solver.world_size().x }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.solver.world_size().y }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f32 { self.solver.radius() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.solver.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.solver.frame() }

    /// Particles skipped by full cells during the last step
    #[wasm_bindgen(getter)]
    pub fn cell_overflows(&self) -> u32 { self.solver.cell_overflows() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.solver.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.solver.perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.solver.set_gravity(Vec2::new(x, y)).map_err(to_js)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), JsValue> {
        self.solver.set_friction(friction).map_err(to_js)
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), JsValue> {
        self.solver.set_radius(radius).map_err(to_js)
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) -> Result<(), JsValue> {
        self.solver.set_sub_steps(sub_steps).map_err(to_js)
    }

    pub fn set_response_coef(&mut self, coef: f32) -> Result<(), JsValue> {
        self.solver.set_response_coef(coef).map_err(to_js)
    }

    pub fn set_cell_capacity(&mut self, capacity: u32) -> Result<(), JsValue> {
        self.solver.set_cell_capacity(capacity as usize).map_err(to_js)
    }

    /// Add a particle at rest; returns its id
    pub fn create_particle(&mut self, x: f32, y: f32) -> u32 {
        self.solver.create_particle(Vec2::new(x, y))
    }

    /// Add a particle moving at (vx, vy) units per second over a frame of `dt`
    pub fn create_particle_with_velocity(&mut self, x: f32, y: f32, vx: f32, vy: f32, dt: f32) -> u32 {
        let p = crate::domain::Particle::with_velocity(Vec2::new(x, y), Vec2::new(vx, vy), dt);
        self.solver.add_particle(p)
    }

    /// Advance the simulation by `dt` seconds on the calling thread
    pub fn step(&mut self, dt: f32) {
        self.solver.update(dt);
    }

    /// Advance on the pool built by `initThreadPool`
    #[cfg(feature = "parallel")]
    pub fn step_parallel(&mut self, dt: f32) {
        super::step_parallel::update_global(&mut self.solver, dt);
    }

    // === Emitter ===

    pub fn set_emitter(&mut self, x: f32, y: f32, speed_x: f32, speed_y: f32, interval: f32, count: u32) {
        self.emitter = Some(Emitter::new(Vec2::new(x, y), Vec2::new(speed_x, speed_y), interval, count));
    }

    #[wasm_bindgen(js_name = setEmitterJson)]
    pub fn set_emitter_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.emitter = Some(Emitter::from_json(json).map_err(to_js)?);
        Ok(())
    }

    pub fn clear_emitter(&mut self) {
        self.emitter = None;
    }

    /// Run the emitter clock; returns the number of particles spawned
    pub fn emit(&mut self, dt: f32) -> u32 {
        match self.emitter.as_mut() {
            Some(emitter) => emitter.emit(&mut self.solver, dt) as u32,
            None => 0,
        }
    }

    // === Render buffers ===

    /// Refresh the packed `[x0, y0, x1, y1, ...]` buffer; returns its f32 length
    pub fn extract_positions(&mut self) -> u32 {
        render_extract::extract_positions(&mut self.solver).len() as u32
    }

    /// Pointer to the buffer filled by `extract_positions`
    pub fn positions_ptr(&self) -> *const f32 {
        self.solver.render.positions.as_ptr()
    }

    /// Refresh the ABGR colour buffer; returns its length
    pub fn extract_colors(&mut self) -> u32 {
        render_extract::extract_colors(&mut self.solver).len() as u32
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.solver.render.colors.as_ptr()
    }
}

impl World {
    pub fn solver(&self) -> &Solver {
        &self.solver
    }
}
