use crate::core::Vec2;
use crate::domain::{Particle, ParticleId};

use super::Solver;

pub(super) fn create_particle(solver: &mut Solver, position: Vec2) -> ParticleId {
    add_particle(solver, Particle::at(position))
}

/// Ids are list indices; the list only grows.
pub(super) fn add_particle(solver: &mut Solver, particle: Particle) -> ParticleId {
    let id = solver.particles.len() as ParticleId;
    solver.particles.push(particle);
    id
}
