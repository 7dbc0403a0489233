use crate::domain::{ConfigError, SolverConfig};
use crate::spatial::Grid;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, Solver};

pub(super) fn create_solver(config: &SolverConfig) -> Result<Solver, ConfigError> {
    config.validate()?;

    let world_size = config.world_size();
    let diameter = config.radius * 2.0;
    let grid = Grid::new(world_size, diameter, config.cell_capacity)?;

    log::debug!(
        "solver: world {}x{}, radius {}, {} sub-steps, grid {}x{}",
        world_size.x,
        world_size.y,
        config.radius,
        config.sub_steps,
        grid.cols(),
        grid.rows()
    );

    Ok(Solver {
        particles: Vec::new(),
        grid,
        world_size,
        gravity: config.gravity,
        friction: config.friction,
        radius: config.radius,
        diameter,
        diameter2: diameter * diameter,
        sub_steps: config.sub_steps,
        response_coef: config.response_coef,
        cell_capacity: config.cell_capacity,
        frame: 0,
        last_overflows: 0,
        total_overflows: 0,
        render: RenderBuffers {
            positions: Vec::new(),
            colors: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
