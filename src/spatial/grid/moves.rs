use super::*;
use crate::domain::particle::SwapPredicate;

impl Grid {
    /// Move the particle at `from` to `to`.
    ///
    /// - `to` out of bounds or `from` empty: nothing happens, `false`
    /// - `to` empty: the particle moves, `from` becomes empty, `true`
    /// - `to` occupied and `swap(occupant)` holds: the two trade places, `true`
    /// - otherwise nothing happens, `false`
    pub fn move_particle(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        swap: Option<SwapPredicate>,
    ) -> bool {
        let Some(to) = self.checked_index(to_row, to_col) else {
            return false;
        };
        let Some(from) = self.checked_index(from_row, from_col) else {
            return false;
        };
        if self.types[from].is_none() || from == to {
            return false;
        }

        match self.get_idx(to) {
            None => {
                self.swap_idx(from, to);
                true
            }
            Some(occupant) => match swap {
                Some(pred) if pred(&occupant) => {
                    self.swap_idx(from, to);
                    true
                }
                _ => false,
            },
        }
    }

    // === Swap two cells (all data) ===
    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.types.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.updated.swap(idx1, idx2);
    }
}
