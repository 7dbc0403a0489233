//! Solver configuration: JSON loading and validation
//!
//! Every check used by the runtime setters lives here too, so a `Solver`
//! built from a config and one mutated afterwards reject the same inputs.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::ConfigError;

/// Default number of particle slots per grid cell
pub const DEFAULT_CELL_CAPACITY: usize = 4;

/// Upper bound on `cols * rows * capacity` (slot array length)
pub const MAX_GRID_SLOTS: usize = 1 << 28;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub radius: f32,
    pub gravity: Vec2,
    pub friction: f32,
    pub sub_steps: u32,
    pub response_coef: f32,
    pub cell_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            world_width: 900.0,
            world_height: 900.0,
            radius: 7.0,
            gravity: Vec2::new(0.0, 500.0),
            friction: 0.0,
            sub_steps: 4,
            response_coef: 1.0,
            cell_capacity: DEFAULT_CELL_CAPACITY,
        }
    }
}

impl SolverConfig {
    /// Config for a world of the given size, everything else defaulted
    pub fn new(world_size: Vec2, radius: f32) -> Self {
        Self {
            world_width: world_size.x,
            world_height: world_size.y,
            radius,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_world_size(self.world_size())?;
        check_radius(self.radius)?;
        check_geometry(self.world_size(), self.radius * 2.0, self.cell_capacity)?;
        check_gravity(self.gravity)?;
        check_friction(self.friction)?;
        check_sub_steps(self.sub_steps)?;
        check_response_coef(self.response_coef)?;
        Ok(())
    }
}

pub fn check_world_size(world: Vec2) -> Result<(), ConfigError> {
    if !(world.x.is_finite() && world.y.is_finite()) || world.x <= 0.0 || world.y <= 0.0 {
        return Err(ConfigError::InvalidWorldSize { width: world.x, height: world.y });
    }
    Ok(())
}

pub fn check_radius(radius: f32) -> Result<(), ConfigError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ConfigError::InvalidRadius(radius));
    }
    Ok(())
}

/// World must fit the clamp margin on both sides and the resulting grid
/// must stay within `MAX_GRID_SLOTS`.
pub fn check_geometry(world: Vec2, diameter: f32, capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCellCapacity);
    }
    if world.x < 2.0 * diameter || world.y < 2.0 * diameter {
        return Err(ConfigError::WorldTooSmall {
            width: world.x,
            height: world.y,
            diameter,
        });
    }
    let (cols, rows) = grid_dimensions(world, diameter);
    let slots = cols
        .checked_mul(rows)
        .and_then(|cells| cells.checked_mul(capacity));
    match slots {
        Some(n) if n <= MAX_GRID_SLOTS => Ok(()),
        _ => Err(ConfigError::GridTooLarge { cols, rows, capacity }),
    }
}

/// `floor(world / diameter)` per axis. Callers validate first, so both
/// values are at least 2.
pub fn grid_dimensions(world: Vec2, diameter: f32) -> (usize, usize) {
    let cols = (world.x / diameter).floor() as usize;
    let rows = (world.y / diameter).floor() as usize;
    (cols, rows)
}

pub fn check_gravity(gravity: Vec2) -> Result<(), ConfigError> {
    if !gravity.is_finite() {
        return Err(ConfigError::InvalidGravity { x: gravity.x, y: gravity.y });
    }
    Ok(())
}

pub fn check_friction(friction: f32) -> Result<(), ConfigError> {
    if !friction.is_finite() || friction < 0.0 {
        return Err(ConfigError::InvalidFriction(friction));
    }
    Ok(())
}

pub fn check_sub_steps(sub_steps: u32) -> Result<(), ConfigError> {
    if sub_steps == 0 {
        return Err(ConfigError::ZeroSubSteps);
    }
    Ok(())
}

pub fn check_response_coef(coef: f32) -> Result<(), ConfigError> {
    if !(coef > 0.0 && coef <= 1.0) {
        return Err(ConfigError::InvalidResponseCoef(coef));
    }
    Ok(())
}
