use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Index into the solver's particle list. Stable for the solver's lifetime
/// because particles are never removed.
pub type ParticleId = u32;

/// Default particle color (opaque white, ABGR)
pub const DEFAULT_COLOR: u32 = 0xFFFF_FFFF;

/// One circle. Velocity is implicit: `position - last_position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub last_position: Vec2,
    /// Accumulated this sub-step, cleared by the integrator
    pub acceleration: Vec2,
    /// ABGR packed, presentation only
    pub color: u32,
}

impl Particle {
    /// Particle at rest at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            last_position: position,
            acceleration: Vec2::ZERO,
            color: DEFAULT_COLOR,
        }
    }

    /// Particle that will travel `velocity * dt` during its first step
    pub fn with_velocity(position: Vec2, velocity: Vec2, dt: f32) -> Self {
        Self {
            last_position: position - velocity * dt,
            ..Self::at(position)
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn accelerate(&mut self, a: Vec2) {
        self.acceleration += a;
    }

    /// Displacement over the last step
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.position - self.last_position
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}
