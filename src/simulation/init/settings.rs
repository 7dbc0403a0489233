use crate::core::Vec2;
use crate::domain::config::{
    check_friction, check_geometry, check_gravity, check_radius, check_response_coef, check_sub_steps,
};
use crate::domain::{ConfigError, SolverConfig};
use crate::spatial::Grid;

use super::Solver;

pub(super) fn to_config(solver: &Solver) -> SolverConfig {
    SolverConfig {
        world_width: solver.world_size.x,
        world_height: solver.world_size.y,
        radius: solver.radius,
        gravity: solver.gravity,
        friction: solver.friction,
        sub_steps: solver.sub_steps,
        response_coef: solver.response_coef,
        cell_capacity: solver.cell_capacity,
    }
}

pub(super) fn set_gravity(solver: &mut Solver, gravity: Vec2) -> Result<(), ConfigError> {
    check_gravity(gravity)?;
    solver.gravity = gravity;
    Ok(())
}

pub(super) fn set_friction(solver: &mut Solver, friction: f32) -> Result<(), ConfigError> {
    check_friction(friction)?;
    solver.friction = friction;
    Ok(())
}

/// The only place `diameter` / `diameter2` change
pub(super) fn set_radius(solver: &mut Solver, radius: f32) -> Result<(), ConfigError> {
    check_radius(radius)?;
    let diameter = radius * 2.0;
    let grid = Grid::new(solver.world_size, diameter, solver.cell_capacity)?;

    log::debug!("radius {} -> {}, grid {}x{}", solver.radius, radius, grid.cols(), grid.rows());

    solver.radius = radius;
    solver.diameter = diameter;
    solver.diameter2 = diameter * diameter;
    solver.grid = grid;
    Ok(())
}

pub(super) fn set_sub_steps(solver: &mut Solver, sub_steps: u32) -> Result<(), ConfigError> {
    check_sub_steps(sub_steps)?;
    solver.sub_steps = sub_steps;
    Ok(())
}

pub(super) fn set_response_coef(solver: &mut Solver, coef: f32) -> Result<(), ConfigError> {
    check_response_coef(coef)?;
    solver.response_coef = coef;
    Ok(())
}

pub(super) fn set_cell_capacity(solver: &mut Solver, capacity: usize) -> Result<(), ConfigError> {
    check_geometry(solver.world_size, solver.diameter, capacity)?;
    solver.grid = Grid::new(solver.world_size, solver.diameter, capacity)?;
    solver.cell_capacity = capacity;
    log::debug!("cell capacity -> {}", capacity);
    Ok(())
}
