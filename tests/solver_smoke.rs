use verlet_engine::{ConfigError, Emitter, Solver, SolverConfig, Vec2};

#[test]
fn json_configured_solver_runs() {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = r#"{"worldWidth":300,"worldHeight":200,"radius":3,"gravity":{"x":0,"y":400},"subSteps":2}"#;
    let mut solver = Solver::from_json(json).expect("valid config");
    assert_eq!(solver.sub_steps(), 2);
    assert_eq!(solver.gravity(), Vec2::new(0.0, 400.0));
    assert_eq!(solver.cell_capacity(), SolverConfig::default().cell_capacity);

    solver.create_particle(Vec2::new(150.0, 20.0));
    for _ in 0..120 {
        solver.update(1.0 / 60.0);
    }
    let p = solver.particle(0).expect("particle");
    assert!((p.position.y - (200.0 - solver.diameter())).abs() < 0.5);
}

#[test]
fn json_rejects_bad_geometry() {
    let err = Solver::from_json(r#"{"worldWidth":10,"worldHeight":10,"radius":5}"#)
        .err()
        .expect("10x10 world cannot hold diameter 10 particles");
    assert!(matches!(err, ConfigError::WorldTooSmall { .. }));
    assert!(err.to_string().contains("10"));
}

#[test]
fn emitter_fills_world_without_escape() {
    let mut solver = Solver::new(Vec2::new(300.0, 300.0), 3.0).expect("valid solver");
    let mut emitter = Emitter::new(Vec2::new(25.0, 25.0), Vec2::new(180.0, 0.0), 0.02, 2);
    let dt = 1.0 / 60.0;

    let mut last = 0;
    for _ in 0..180 {
        emitter.emit(&mut solver, dt);
        solver.update(dt);
        assert!(solver.particle_count() >= last);
        last = solver.particle_count();
    }
    assert!(last > 100);

    let d = solver.diameter();
    for p in solver.positions() {
        assert!(p.x >= d && p.x <= 300.0 - d);
        assert!(p.y >= d && p.y <= 300.0 - d);
    }
}
