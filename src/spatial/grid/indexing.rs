use super::*;

impl Grid {
    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// (row, col) of a linear index
    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx / self.width as usize) as u32;
        let col = (idx % self.width as usize) as u32;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn check_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height as i32 && col >= 0 && col < self.width as i32
    }

    /// Linear index of an in-bounds coordinate
    #[inline]
    pub(crate) fn checked_index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.check_bounds(row, col) {
            return None;
        }
        Some(self.index(row as u32, col as u32))
    }
}
