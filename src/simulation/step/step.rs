use crate::systems::physics::{populate, resolve_contacts};
#[cfg(feature = "parallel")]
use crate::systems::physics::{populate_parallel, resolve_contacts_striped};

use super::{PerfTimer, Solver};

/// Where the stages of a sub-step run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Schedule {
    Sequential,
    /// On the rayon pool the caller has installed
    #[cfg(feature = "parallel")]
    Parallel,
}

#[derive(Default)]
struct StageTimes {
    grid_ms: f64,
    collision_ms: f64,
    integrate_ms: f64,
}

/// Negative, NaN and infinite `dt` advance no time
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("update: ignoring invalid dt {}", dt);
        0.0
    }
}

pub(super) fn update(solver: &mut Solver, dt: f32) {
    run(solver, dt, Schedule::Sequential);
}

pub(super) fn run(solver: &mut Solver, dt: f32, schedule: Schedule) {
    let mut timer = solver.perf_enabled.then(PerfTimer::start);

    let dt = sanitize_dt(dt);
    let sub_dt = dt / solver.sub_steps as f32;
    let resolver = solver.resolver();
    let integrator = solver.integrator();

    let mut times = StageTimes::default();
    let mut contacts = 0u32;
    let mut overflows = 0u32;

    for _ in 0..solver.sub_steps {
        overflows += match schedule {
            Schedule::Sequential => populate(&mut solver.grid, &solver.particles),
            #[cfg(feature = "parallel")]
            Schedule::Parallel => populate_parallel(&mut solver.grid, &solver.particles),
        };
        lap(&mut timer, &mut times.grid_ms);

        contacts += match schedule {
            Schedule::Sequential => resolve_contacts(&solver.grid, &mut solver.particles, &resolver),
            #[cfg(feature = "parallel")]
            Schedule::Parallel => resolve_contacts_striped(&solver.grid, &mut solver.particles, &resolver),
        };
        lap(&mut timer, &mut times.collision_ms);

        match schedule {
            Schedule::Sequential => integrator.integrate(&mut solver.particles, sub_dt),
            #[cfg(feature = "parallel")]
            Schedule::Parallel => integrator.integrate_parallel(&mut solver.particles, sub_dt),
        }
        lap(&mut timer, &mut times.integrate_ms);
    }

    solver.frame += 1;
    solver.last_overflows = overflows;
    solver.total_overflows += overflows as u64;
    if overflows > 0 {
        log::warn!(
            "frame {}: {} particle(s) skipped by full grid cells (capacity {})",
            solver.frame,
            overflows,
            solver.cell_capacity
        );
    }

    if let Some(timer) = timer {
        record_perf(solver, &times, contacts, overflows, schedule);
        solver.perf_stats.step_ms = timer.total_ms();
    }
}

#[inline]
fn lap(timer: &mut Option<PerfTimer>, stage_ms: &mut f64) {
    if let Some(timer) = timer.as_mut() {
        *stage_ms += timer.lap_ms();
    }
}

fn record_perf(solver: &mut Solver, times: &StageTimes, contacts: u32, overflows: u32, schedule: Schedule) {
    let grid = &solver.grid;
    // particles + slot arena + cell counts
    let memory_bytes = solver.particles.len() * std::mem::size_of::<crate::domain::Particle>()
        + grid.cell_count() * (grid.capacity() + 1) * std::mem::size_of::<u32>();

    let stats = &mut solver.perf_stats;
    stats.reset();
    stats.grid_ms = times.grid_ms;
    stats.collision_ms = times.collision_ms;
    stats.integrate_ms = times.integrate_ms;
    stats.sub_steps = solver.sub_steps;
    stats.contacts = contacts;
    stats.cell_overflows = overflows;
    stats.particle_count = solver.particles.len() as u32;
    stats.grid_cols = grid.cols() as u32;
    stats.grid_rows = grid.rows() as u32;
    stats.max_cell_occupancy = grid.max_occupancy() as u32;
    stats.memory_bytes = memory_bytes.min(u32::MAX as usize) as u32;
    stats.parallel = schedule != Schedule::Sequential;
}
