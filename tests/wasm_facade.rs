#![cfg(target_arch = "wasm32")]

use verlet_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_steps_and_exposes_buffers() {
    let mut world = World::new(100.0, 100.0, 1.0).expect("valid world");
    world.create_particle(50.0, 50.0);
    world.create_particle(50.0, 51.5);
    world.set_gravity(0.0, 0.0).expect("gravity");
    world.set_sub_steps(1).expect("sub steps");
    world.step(0.0);

    assert_eq!(world.extract_positions(), 4);
    assert!(!world.positions_ptr().is_null());
    assert_eq!(world.extract_colors(), 2);
    assert_eq!(world.frame(), 1);
}

#[wasm_bindgen_test]
fn invalid_world_throws() {
    assert!(World::new(1.0, 1.0, 1.0).is_err());
}
