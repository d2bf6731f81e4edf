//! GrowBehavior - Wood
//!
//! For every orthogonal neighbor that is water, wood fills all of its own
//! currently empty orthogonal neighbors with new wood. Growth can happen in
//! several directions in one update, and the empty cells are re-read for each
//! water neighbor found.

use super::{Behavior, UpdateContext, ORTHOGONAL};
use crate::domain::particle::Particle;
use crate::domain::species::Species;

pub struct GrowBehavior;

impl GrowBehavior {
    pub fn new() -> Self {
        Self
    }

    fn grow(&self, ctx: &mut UpdateContext) {
        let (row, col) = (ctx.row, ctx.col);
        let empty: Vec<(i32, i32)> = ORTHOGONAL
            .iter()
            .map(|(d_row, d_col)| (row + d_row, col + d_col))
            .filter(|&(r, c)| ctx.grid.is_empty(r, c))
            .collect();

        for (r, c) in empty {
            ctx.grid.set(r, c, Some(Particle::new(Species::Wood)));
        }
    }
}

impl Behavior for GrowBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        for (d_row, d_col) in ORTHOGONAL {
            if ctx.grid.is(ctx.row + d_row, ctx.col + d_col, Species::Water) {
                self.grow(ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ScriptedRandom;
    use super::super::BehaviorRegistry;
    use crate::domain::particle::Particle;
    use crate::domain::species::Species;
    use crate::grid::Grid;

    fn put(grid: &mut Grid, row: i32, col: i32, species: Species) {
        grid.set(row, col, Some(Particle::new(species)));
    }

    fn update(grid: &mut Grid, row: i32, col: i32) {
        let mut rng = ScriptedRandom::new(&[0]);
        BehaviorRegistry::new().update_at(grid, row, col, &mut rng);
    }

    #[test]
    fn wood_touching_water_fills_empty_neighbors() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 2, 2, Species::Wood);
        put(&mut grid, 3, 2, Species::Water);
        put(&mut grid, 2, 3, Species::Stone);

        update(&mut grid, 2, 2);

        assert!(grid.is(1, 2, Species::Wood));
        assert!(grid.is(2, 1, Species::Wood));
        assert!(grid.is(3, 2, Species::Water));
        assert!(grid.is(2, 3, Species::Stone));
        assert!(grid.is_empty(1, 1));
        assert_eq!(grid.particle_count(), 5);
    }

    #[test]
    fn wood_without_water_does_nothing() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 2, 2, Species::Wood);
        put(&mut grid, 1, 1, Species::Water);

        update(&mut grid, 2, 2);

        assert_eq!(grid.particle_count(), 2);
    }

    #[test]
    fn wood_at_edge_grows_only_in_bounds() {
        let mut grid = Grid::new(3, 3);
        put(&mut grid, 0, 0, Species::Wood);
        put(&mut grid, 1, 0, Species::Water);

        update(&mut grid, 0, 0);

        assert!(grid.is(0, 1, Species::Wood));
        assert_eq!(grid.particle_count(), 3);
    }

    #[test]
    fn two_water_neighbors_grow_the_same_cells() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 2, 2, Species::Wood);
        put(&mut grid, 3, 2, Species::Water);
        put(&mut grid, 1, 2, Species::Water);

        update(&mut grid, 2, 2);

        assert!(grid.is(2, 1, Species::Wood));
        assert!(grid.is(2, 3, Species::Wood));
        assert_eq!(grid.particle_count(), 5);
    }
}
