use crate::core::Vec2;
use crate::domain::Particle;

/// Squared distances at or below this are treated as coincident centers
pub const COINCIDENT_EPSILON: f32 = 0.0001;

/// Positional push-apart of two overlapping circles of equal size.
///
/// Not momentum conserving: only positions move, the implicit Verlet
/// velocity picks up the correction on the next integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactResolver {
    pub diameter: f32,
    pub diameter2: f32,
    pub response_coef: f32,
}

impl ContactResolver {
    pub fn new(radius: f32, response_coef: f32) -> Self {
        let diameter = radius * 2.0;
        Self {
            diameter,
            diameter2: diameter * diameter,
            response_coef,
        }
    }

    /// Separate `a` and `b` if they overlap. Returns true when moved.
    #[inline]
    pub fn resolve_pair(&self, a: &mut Vec2, b: &mut Vec2) -> bool {
        let axis = *a - *b;
        let dist2 = axis.length_squared();
        if dist2 >= self.diameter2 || dist2 <= COINCIDENT_EPSILON {
            return false;
        }
        let dist = dist2.sqrt();
        let delta = self.response_coef * 0.5 * (self.diameter - dist);
        let correction = axis / dist * delta;
        *a += correction;
        *b -= correction;
        true
    }

    /// Resolve particles `a` and `b` of `particles`. Same index is a no-op.
    #[inline]
    pub fn resolve(&self, particles: &mut [Particle], a: usize, b: usize) -> bool {
        match pair_mut(particles, a, b) {
            Some((pa, pb)) => self.resolve_pair(&mut pa.position, &mut pb.position),
            None => false,
        }
    }

    /// Same as `resolve`, over a bare position buffer
    #[inline]
    pub fn resolve_positions(&self, positions: &mut [Vec2], a: usize, b: usize) -> bool {
        match pair_mut(positions, a, b) {
            Some((pa, pb)) => self.resolve_pair(pa, pb),
            None => false,
        }
    }
}

/// Two distinct mutable elements of one slice; `None` when `a == b`
#[inline]
pub fn pair_mut<T>(slice: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b {
        return None;
    }
    if a < b {
        let (lo, hi) = slice.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = slice.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}
