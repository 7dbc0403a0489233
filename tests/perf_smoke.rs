use verlet_engine::{Solver, Vec2, World};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128.0, 64.0, 1.0).expect("valid world");
    world.enable_perf_metrics(true);
    for x in 0..40 {
        for y in 0..10 {
            world.create_particle(4.0 + x as f32 * 3.0, 4.0 + y as f32 * 3.0);
        }
    }
    world.step(1.0 / 60.0);
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 400);
    assert_eq!(world.cell_overflows(), 0);
}

#[test]
fn perf_smoke_dense_pile() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut solver = Solver::new(Vec2::new(200.0, 200.0), 2.0).expect("valid solver");
    solver.enable_perf_metrics(true);
    for i in 0..500 {
        let x = 10.0 + (i % 40) as f32 * 4.5;
        let y = 10.0 + (i / 40) as f32 * 4.5;
        solver.create_particle(Vec2::new(x, y));
    }
    for _ in 0..60 {
        solver.update(1.0 / 60.0);
    }
    let stats = solver.perf_stats();
    assert_eq!(stats.sub_steps(), solver.sub_steps());
    assert!(stats.max_cell_occupancy() as usize <= solver.cell_capacity());
    assert!(stats.memory_bytes() > 0);
}
