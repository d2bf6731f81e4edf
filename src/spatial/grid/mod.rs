//! Grid - Structure of Arrays (SoA) cell storage
//!
//! The grid is the only shared mutable state in the simulation. Rules reach it
//! exclusively through the bounds-checked primitives here:
//! - `check_bounds(row, col)`
//! - `get(row, col)` -> occupant, `None` when empty or out of bounds
//! - `set(row, col, particle_or_none)` -> silently ignored out of bounds
//! - `move_particle(from, to, swap)` -> move/swap resolution
//!
//! Coordinates are signed so rules can probe `col - 1` at the edge without
//! special cases; anything outside the grid reads as empty and never exists.

use crate::domain::species::Species;

// Background color in ABGR format, RGB(10,10,10) with alpha=255
pub(crate) const BG_COLOR: u32 = 0xFF0A0A0A;

mod indexing;
mod accessors;
mod moves;

/// SoA Grid - per-cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    types: Vec<Option<Species>>,    // Occupant species (None = empty)
    colors: Vec<u32>,               // ABGR packed pixel, travels with the particle
    updated: Vec<u8>,               // 1 = already ticked this step, travels with the particle
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;

        Self {
            width,
            height,
            size,
            types: vec![None; size],
            colors: vec![BG_COLOR; size],
            updated: vec![0; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Number of occupied cells
    pub fn particle_count(&self) -> usize {
        self.types.iter().filter(|t| t.is_some()).count()
    }

    /// Row-major ABGR pixels, one per cell
    #[inline]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.types.fill(None);
        self.colors.fill(BG_COLOR);
        self.updated.fill(0);
    }
}
