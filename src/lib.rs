//! Sandfall Engine - Falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/       - Logging and the random source
//! - domain/     - Species catalog, particles, factory
//! - spatial/    - Grid storage and the move/swap primitive
//! - systems/    - Per-species update rules
//! - simulation/ - World orchestration and the JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use spatial::grid;
pub use domain::{factory, particle, species};
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Sandfall engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names for the species dropdown, in display order
#[wasm_bindgen]
pub fn species_names() -> js_sys::Array {
    factory::placeable_species()
        .map(|s| JsValue::from_str(s.name()))
        .collect()
}

// Re-export main types
pub use crate::core::random::{RandomSource, Xorshift32};
pub use domain::particle::{Particle, SwapPredicate};
pub use domain::species::Species;
pub use simulation::{StepStats, World, WorldCore, WorldSettings};
pub use spatial::grid::Grid;
