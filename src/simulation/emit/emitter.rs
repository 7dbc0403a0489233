use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::domain::color::rainbow;
use crate::domain::{ConfigError, Particle};

use super::Solver;

/// Periodic particle source: every `interval` seconds it spawns a vertical
/// column of `count` particles moving at `speed`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Emitter {
    pub position: Vec2,
    /// Launch velocity, units per second
    pub speed: Vec2,
    /// Seconds between bursts
    pub interval: f32,
    /// Particles per burst
    pub count: u32,
    #[serde(skip)]
    elapsed: f32,
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter {
            position: Vec2::new(10.0, 10.0),
            speed: Vec2::new(10.0, 0.0),
            interval: 0.25,
            count: 1,
            elapsed: 0.0,
        }
    }
}

impl Emitter {
    pub fn new(position: Vec2, speed: Vec2, interval: f32, count: u32) -> Self {
        Emitter {
            position,
            speed,
            interval,
            count,
            elapsed: 0.0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Advance the burst clock by `dt`; once more than `interval` has
    /// passed, spawn a burst and restart the clock. Returns the number of
    /// particles added.
    pub fn emit(&mut self, solver: &mut Solver, dt: f32) -> usize {
        if !(dt.is_finite() && dt > 0.0) {
            return 0;
        }
        self.elapsed += dt;
        if self.elapsed <= self.interval {
            return 0;
        }
        self.elapsed = 0.0;

        let spacing = solver.diameter() + 0.1;
        for i in 0..self.count {
            let position = self.position + Vec2::new(0.0, spacing * i as f32);
            let id = solver.particle_count();
            let color = rainbow(id as f32 * 0.001);
            solver.add_particle(Particle::with_velocity(position, self.speed, dt).with_color(color));
        }
        log::trace!("emitter burst: {} particles, total {}", self.count, solver.particle_count());
        self.count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> Solver {
        Solver::new(Vec2::new(200.0, 200.0), 2.0).expect("valid solver")
    }

    #[test]
    fn waits_for_interval() {
        let mut solver = solver();
        let mut emitter = Emitter::new(Vec2::new(20.0, 20.0), Vec2::new(100.0, 0.0), 0.1, 2);

        assert_eq!(emitter.emit(&mut solver, 0.05), 0);
        assert_eq!(emitter.emit(&mut solver, 0.04), 0);
        assert_eq!(solver.particle_count(), 0);

        assert_eq!(emitter.emit(&mut solver, 0.02), 2);
        assert_eq!(solver.particle_count(), 2);

        // clock restarted
        assert_eq!(emitter.emit(&mut solver, 0.02), 0);
    }

    #[test]
    fn burst_is_a_spaced_column_with_launch_velocity() {
        let mut solver = solver();
        let mut emitter = Emitter::new(Vec2::new(20.0, 20.0), Vec2::new(100.0, 0.0), 0.0, 3);
        let dt = 0.01;
        emitter.emit(&mut solver, dt);

        let spacing = solver.diameter() + 0.1;
        for (i, p) in solver.particles().iter().enumerate() {
            let expected = Vec2::new(20.0, 20.0 + spacing * i as f32);
            assert!((p.position - expected).length() < 1e-4);
            // displacement == speed * dt
            assert!((p.displacement() - Vec2::new(1.0, 0.0)).length() < 1e-4);
        }
    }

    #[test]
    fn colors_follow_particle_id() {
        let mut solver = solver();
        let mut emitter = Emitter::new(Vec2::new(20.0, 20.0), Vec2::ZERO, 0.0, 2);
        emitter.emit(&mut solver, 0.01);
        let colors: Vec<u32> = solver.colors().collect();
        assert_eq!(colors, vec![rainbow(0.0), rainbow(0.001)]);
    }

    #[test]
    fn invalid_dt_spawns_nothing() {
        let mut solver = solver();
        let mut emitter = Emitter::new(Vec2::new(20.0, 20.0), Vec2::ZERO, 0.0, 2);
        assert_eq!(emitter.emit(&mut solver, f32::NAN), 0);
        assert_eq!(emitter.emit(&mut solver, -1.0), 0);
        assert_eq!(solver.particle_count(), 0);
    }

    #[test]
    fn parses_camel_case_json() {
        let emitter = Emitter::from_json(r#"{"position":{"x":25,"y":25},"speed":{"x":180,"y":0},"interval":0.02,"count":2}"#)
            .expect("valid emitter json");
        assert_eq!(emitter.position, Vec2::new(25.0, 25.0));
        assert_eq!(emitter.count, 2);
    }
}
