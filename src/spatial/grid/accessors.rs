use super::*;
use crate::domain::particle::Particle;

impl Grid {
    /// Occupant of (row, col); `None` when empty or out of bounds
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Particle> {
        let idx = self.checked_index(row, col)?;
        self.types[idx].map(Particle::new)
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Option<Particle> {
        self.types[idx].map(Particle::new)
    }

    /// Species at (row, col), or `None` if there is nothing there
    #[inline]
    pub fn species_at(&self, row: i32, col: i32) -> Option<Species> {
        self.checked_index(row, col).and_then(|idx| self.types[idx])
    }

    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_none()
    }

    /// Matches the occupant's species; always false for empty/out of bounds
    #[inline]
    pub fn is(&self, row: i32, col: i32, species: Species) -> bool {
        self.species_at(row, col) == Some(species)
    }

    /// Write or clear a cell. Out of bounds is a silent no-op.
    ///
    /// A particle written here counts as already ticked for the running step,
    /// so rule-spawned particles first act on the next step.
    pub fn set(&mut self, row: i32, col: i32, particle: Option<Particle>) {
        let Some(idx) = self.checked_index(row, col) else {
            return;
        };
        match particle {
            Some(p) => {
                self.types[idx] = Some(p.species());
                self.colors[idx] = p.species().pixel();
                self.updated[idx] = 1;
            }
            None => {
                self.types[idx] = None;
                self.colors[idx] = BG_COLOR;
                self.updated[idx] = 0;
            }
        }
    }

    // === Updated flag ===
    #[inline]
    pub fn is_updated_idx(&self, idx: usize) -> bool {
        self.updated[idx] == 1
    }

    #[inline]
    pub fn set_updated_idx(&mut self, idx: usize, u: bool) {
        self.updated[idx] = if u { 1 } else { 0 };
    }

    #[inline]
    pub fn reset_updated(&mut self) {
        self.updated.fill(0);
    }
}
