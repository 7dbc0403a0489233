use super::step::{run, Schedule};
use super::Solver;

/// Every stage, including the inner rayon calls, runs on `pool`
pub(super) fn update_parallel(solver: &mut Solver, dt: f32, pool: &rayon::ThreadPool) {
    log::trace!("update_parallel: {} threads", pool.current_num_threads());
    pool.install(|| run(solver, dt, Schedule::Parallel));
}

/// Runs on the global pool (the one `initThreadPool` builds under wasm)
pub(super) fn update_global(solver: &mut Solver, dt: f32) {
    run(solver, dt, Schedule::Parallel);
}
