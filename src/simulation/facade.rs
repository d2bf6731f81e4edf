use wasm_bindgen::prelude::*;

use super::{WorldCore, WorldSettings};

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions (same limits as settings)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::with_dimensions(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Create a world from a JSON settings object
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = defaultSettings)]
    pub fn default_settings() -> String {
        WorldSettings::default().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Duration of the last step in milliseconds
    #[wasm_bindgen(getter)]
    pub fn last_step_ms(&self) -> f64 { self.core.last_step().step_ms }

    /// Place one particle by dropdown name
    pub fn add_particle(&mut self, row: i32, col: i32, species: &str) -> bool {
        self.core.add_particle(row, col, species)
    }

    /// Brush: place particles in a disc, returns how many were placed
    pub fn paint(&mut self, row: i32, col: i32, radius: i32, species: &str) -> u32 {
        self.core.add_particles_in_radius(row, col, radius, species)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, row: i32, col: i32) -> bool {
        self.core.remove_particle(row, col)
    }

    /// Eraser: clear a disc, returns how many particles were removed
    pub fn erase(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        self.core.remove_particles_in_radius(row, col, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Type tag ("sand", "water", ...) at position, if occupied
    pub fn species_at(&self, row: i32, col: i32) -> Option<String> {
        self.core.species_at(row, col).map(|s| s.type_tag().to_string())
    }

    /// Copy of the ABGR pixel buffer, row-major
    pub fn colors(&self) -> Vec<u32> {
        self.core.colors().to_vec()
    }

    /// Pointer to the ABGR pixel buffer (for zero-copy canvas upload)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors().len()
    }

    pub fn species_manifest_json(&self) -> String {
        crate::factory::manifest_json()
    }
}
