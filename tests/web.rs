//! Browser facade smoke tests (run with `wasm-pack test --headless --chrome`)
#![cfg(target_arch = "wasm32")]

use sandfall_engine::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_paints_and_steps() {
    sandfall_engine::init();
    let mut world = World::new(8, 8).unwrap();
    assert!(World::new(100_000, 100_000).is_err());
    assert_eq!(world.paint(2, 4, 1, "Sand"), 5);
    world.step();
    assert_eq!(world.particle_count(), 5);
    assert_eq!(world.colors_len(), 64);
    assert_eq!(world.species_at(7, 7), None);
}

#[wasm_bindgen_test]
fn facade_rejects_bad_settings() {
    assert!(World::from_settings(r#"{"width": 0}"#).is_err());
    let world = World::from_settings(r#"{"width": 4, "height": 2}"#).unwrap();
    assert_eq!(world.width(), 4);
    assert_eq!(world.height(), 2);
}

#[wasm_bindgen_test]
fn species_names_fill_the_dropdown() {
    let names = sandfall_engine::species_names();
    assert_eq!(names.length(), 7);
    assert_eq!(names.get(0).as_string().as_deref(), Some("Sand"));
}
