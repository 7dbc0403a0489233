use crate::core::Vec2;
use crate::domain::Particle;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Damped position Verlet plus world-bounds clamp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub gravity: Vec2,
    pub friction: f32,
    pub world_size: Vec2,
    /// Distance kept from every wall (one diameter)
    pub margin: f32,
}

impl Integrator {
    /// Advance one particle by `dt`.
    ///
    /// With `dt == 0` no time passes, so the Verlet move is skipped; the
    /// acceleration is still consumed and the clamp still applies.
    #[inline]
    pub fn step(&self, p: &mut Particle, dt: f32) {
        p.accelerate(self.gravity);

        if dt > 0.0 {
            let displacement = p.displacement();
            let damping = (1.0 - self.friction * dt).clamp(0.0, 1.0);
            p.last_position = p.position;
            p.position += displacement * damping + p.acceleration * (dt * dt);
        }

        p.acceleration = Vec2::ZERO;
        self.clamp(p);
    }

    /// Keep the center inside `[margin, world - margin]`. `last_position`
    /// is left alone, so the wall soaks up velocity on the next step
    /// instead of bouncing.
    #[inline]
    pub fn clamp(&self, p: &mut Particle) {
        let max_x = self.world_size.x - self.margin;
        let max_y = self.world_size.y - self.margin;
        p.position.x = p.position.x.clamp(self.margin, max_x);
        p.position.y = p.position.y.clamp(self.margin, max_y);
    }

    pub fn integrate(&self, particles: &mut [Particle], dt: f32) {
        for p in particles.iter_mut() {
            self.step(p, dt);
        }
    }

    /// Contiguous chunk per worker, joined before returning
    #[cfg(feature = "parallel")]
    pub fn integrate_parallel(&self, particles: &mut [Particle], dt: f32) {
        let chunk_size = std::cmp::max(particles.len() / rayon::current_num_threads(), 1);
        particles.par_chunks_mut(chunk_size).for_each(|chunk| {
            for p in chunk.iter_mut() {
                self.step(p, dt);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integrator(gravity: Vec2, friction: f32) -> Integrator {
        Integrator {
            gravity,
            friction,
            world_size: Vec2::new(100.0, 100.0),
            margin: 2.0,
        }
    }

    #[test]
    fn gravity_accelerates_from_rest() {
        let it = integrator(Vec2::new(0.0, 10.0), 0.0);
        let mut p = Particle::at(Vec2::new(50.0, 50.0));
        it.step(&mut p, 0.1);
        // a * dt^2 = 10 * 0.01
        assert!((p.position.y - 50.1).abs() < 1e-4);
        assert_eq!(p.last_position, Vec2::new(50.0, 50.0));
        assert_eq!(p.acceleration, Vec2::ZERO);

        it.step(&mut p, 0.1);
        // carries the previous displacement plus another a*dt^2
        assert!((p.position.y - 50.3).abs() < 1e-4);
    }

    #[test]
    fn friction_damps_implicit_velocity() {
        let it = integrator(Vec2::ZERO, 5.0);
        let mut p = Particle::at(Vec2::new(50.0, 50.0));
        p.last_position = Vec2::new(49.0, 50.0);
        it.step(&mut p, 0.1);
        // displacement 1.0 * (1 - 5 * 0.1)
        assert!((p.position.x - 50.5).abs() < 1e-5);
    }

    #[test]
    fn heavy_friction_stops_but_never_reverses() {
        let it = integrator(Vec2::ZERO, 100.0);
        let mut p = Particle::at(Vec2::new(50.0, 50.0));
        p.last_position = Vec2::new(49.0, 50.0);
        it.step(&mut p, 0.1);
        assert_eq!(p.position.x, 50.0);
    }

    #[test]
    fn zero_dt_consumes_acceleration_without_moving() {
        let it = integrator(Vec2::new(0.0, 10.0), 0.0);
        let mut p = Particle::at(Vec2::new(50.0, 50.0));
        p.last_position = Vec2::new(49.0, 50.0);
        p.accelerate(Vec2::new(3.0, 0.0));
        it.step(&mut p, 0.0);
        assert_eq!(p.position, Vec2::new(50.0, 50.0));
        assert_eq!(p.last_position, Vec2::new(49.0, 50.0));
        assert_eq!(p.acceleration, Vec2::ZERO);
    }

    #[test]
    fn clamp_keeps_margin_and_last_position() {
        let it = integrator(Vec2::ZERO, 0.0);
        let mut p = Particle::at(Vec2::new(99.0, 1.0));
        p.last_position = Vec2::new(95.0, 5.0);
        it.step(&mut p, 0.1);
        assert_eq!(p.position, Vec2::new(98.0, 2.0));
        assert_eq!(p.last_position, Vec2::new(99.0, 1.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_chunks_match_sequential() {
        let it = integrator(Vec2::new(0.0, 30.0), 0.5);
        let start: Vec<Particle> = (0..257)
            .map(|i| {
                let mut p = Particle::at(Vec2::new(3.0 + (i % 90) as f32, 3.0 + (i / 90) as f32 * 10.0));
                p.last_position = p.position - Vec2::new(0.01 * i as f32, 0.0);
                p
            })
            .collect();
        let mut seq = start.clone();
        let mut par = start;
        it.integrate(&mut seq, 1.0 / 60.0);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().expect("thread pool");
        pool.install(|| it.integrate_parallel(&mut par, 1.0 / 60.0));
        assert_eq!(seq, par);
    }
}
