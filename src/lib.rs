//! Verlet Engine - circle collision simulation in WASM
//!
//! Architecture:
//! - core/          - Vector math
//! - domain/        - Particles, configuration, errors, colors
//! - spatial/       - Uniform broad-phase grid
//! - systems/       - Contact resolution and integration
//! - simulation/    - Solver orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::grid;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

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

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"Verlet WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{CellOverflow, ConfigError, Particle, ParticleId, SolverConfig};
pub use simulation::{Emitter, PerfStats, Solver, World};
pub use spatial::Grid;
