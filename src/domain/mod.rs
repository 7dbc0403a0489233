//! Domain types: particles, configuration, errors, colors

pub mod color;
pub mod config;
pub mod error;
pub mod particle;

pub use config::SolverConfig;
pub use error::{CellOverflow, ConfigError};
pub use particle::{Particle, ParticleId};
