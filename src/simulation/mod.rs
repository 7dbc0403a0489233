//! Solver - sub-stepped Verlet simulation of equal-sized circles
//!
//! The Solver only orchestrates; the work lives in:
//! - spatial/grid       - broad-phase bucket grid
//! - systems/physics    - contact resolution and integration
//!
//! Each `update(dt)` runs `sub_steps` passes of
//! grid rebuild -> collision pass -> integration.

use crate::core::Vec2;
use crate::domain::{ConfigError, Particle, ParticleId, SolverConfig};
use crate::spatial::Grid;
use crate::systems::physics::{ContactResolver, Integrator};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[cfg(feature = "parallel")]
#[path = "step/step_parallel.rs"]
mod step_parallel;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "emit/emitter.rs"]
mod emitter;
mod facade;

pub use emitter::Emitter;
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Packed copies of particle state for zero-copy reads from JS
pub(crate) struct RenderBuffers {
    positions: Vec<f32>, // x0, y0, x1, y1, ...
    colors: Vec<u32>,
}

/// The simulation world
pub struct Solver {
    particles: Vec<Particle>,
    grid: Grid,

    // Settings
    world_size: Vec2,
    gravity: Vec2,
    friction: f32,
    radius: f32,
    diameter: f32,
    diameter2: f32,
    sub_steps: u32,
    response_coef: f32,
    cell_capacity: usize,

    // State
    frame: u64,
    last_overflows: u32,
    total_overflows: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Solver {
    /// Solver for a `world_size` world of particles with `radius`, other
    /// settings defaulted
    pub fn new(world_size: Vec2, radius: f32) -> Result<Self, ConfigError> {
        init::create_solver(&SolverConfig::new(world_size, radius))
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self, ConfigError> {
        init::create_solver(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        init::create_solver(&SolverConfig::from_json(json)?)
    }

    /// Current settings as a config (round-trips through `from_config`)
    pub fn config(&self) -> SolverConfig {
        settings::to_config(self)
    }

    // === Settings ===

    pub fn world_size(&self) -> Vec2 { self.world_size }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn friction(&self) -> f32 { self.friction }

    pub fn radius(&self) -> f32 { self.radius }

    pub fn diameter(&self) -> f32 { self.diameter }

    pub fn sub_steps(&self) -> u32 { self.sub_steps }

    pub fn response_coef(&self) -> f32 { self.response_coef }

    pub fn cell_capacity(&self) -> usize { self.cell_capacity }

    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), ConfigError> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), ConfigError> {
        settings::set_friction(self, friction)
    }

    /// Changes the collision diameter and rebuilds the grid to match.
    /// Must not be called while an update is running (enforced by `&mut`).
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        settings::set_radius(self, radius)
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) -> Result<(), ConfigError> {
        settings::set_sub_steps(self, sub_steps)
    }

    pub fn set_response_coef(&mut self, coef: f32) -> Result<(), ConfigError> {
        settings::set_response_coef(self, coef)
    }

    pub fn set_cell_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        settings::set_cell_capacity(self, capacity)
    }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last update's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Particles ===

    /// Add a particle at rest at `position`
    pub fn create_particle(&mut self, position: Vec2) -> ParticleId {
        commands::create_particle(self, position)
    }

    /// Add a particle with full state (implicit velocity, color, ...)
    pub fn add_particle(&mut self, particle: Particle) -> ParticleId {
        commands::add_particle(self, particle)
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id as usize)
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    pub fn colors(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.particles.iter().map(|p| p.color)
    }

    // === Stepping ===

    /// Advance by `dt` seconds on the calling thread
    pub fn update(&mut self, dt: f32) {
        step::update(self, dt);
    }

    /// Advance by `dt` seconds using the workers of `pool`
    #[cfg(feature = "parallel")]
    pub fn update_parallel(&mut self, dt: f32, pool: &rayon::ThreadPool) {
        step_parallel::update_parallel(self, dt, pool);
    }

    /// Number of completed `update` calls
    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Particles the broad phase dropped during the last update
    pub fn cell_overflows(&self) -> u32 { self.last_overflows }

    /// Particles dropped by the broad phase since creation
    pub fn total_cell_overflows(&self) -> u64 { self.total_overflows }

    // === Render extraction ===

    /// Interleaved `[x0, y0, x1, y1, ...]` positions, refreshed on each call
    pub fn extract_positions(&mut self) -> &[f32] {
        render_extract::extract_positions(self)
    }

    /// ABGR colors in particle order, refreshed on each call
    pub fn extract_colors(&mut self) -> &[u32] {
        render_extract::extract_colors(self)
    }

    pub(crate) fn resolver(&self) -> ContactResolver {
        ContactResolver {
            diameter: self.diameter,
            diameter2: self.diameter2,
            response_coef: self.response_coef,
        }
    }

    pub(crate) fn integrator(&self) -> Integrator {
        Integrator {
            gravity: self.gravity,
            friction: self.friction,
            world_size: self.world_size,
            margin: self.diameter,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
