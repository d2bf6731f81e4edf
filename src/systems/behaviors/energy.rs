//! BurnBehavior - Fire
//!
//! Fire burns away every orthogonally adjacent wood cell. The fire itself is
//! left as it is; only water puts it out.

use super::{Behavior, UpdateContext, ORTHOGONAL};
use crate::domain::species::Species;

pub struct BurnBehavior;

impl BurnBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for BurnBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        for (d_row, d_col) in ORTHOGONAL {
            let (n_row, n_col) = (ctx.row + d_row, ctx.col + d_col);
            if ctx.grid.is(n_row, n_col, Species::Wood) {
                ctx.grid.set(n_row, n_col, None);
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

    #[test]
    fn fire_burns_every_adjacent_wood() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 2, 2, Species::Fire);
        for (r, c) in [(3, 2), (1, 2), (2, 3), (2, 1)] {
            put(&mut grid, r, c, Species::Wood);
        }
        put(&mut grid, 1, 1, Species::Wood);

        let mut rng = ScriptedRandom::new(&[0]);
        BehaviorRegistry::new().update_at(&mut grid, 2, 2, &mut rng);

        for (r, c) in [(3, 2), (1, 2), (2, 3), (2, 1)] {
            assert!(grid.is_empty(r, c), "wood at ({}, {}) should burn", r, c);
        }
        assert!(grid.is(2, 2, Species::Fire));
        assert!(grid.is(1, 1, Species::Wood));
        assert_eq!(grid.particle_count(), 2);
    }

    #[test]
    fn fire_leaves_other_neighbors_alone() {
        let mut grid = Grid::new(3, 3);
        put(&mut grid, 1, 1, Species::Fire);
        put(&mut grid, 2, 1, Species::Stone);
        put(&mut grid, 0, 1, Species::Water);

        let mut rng = ScriptedRandom::new(&[0]);
        BehaviorRegistry::new().update_at(&mut grid, 1, 1, &mut rng);

        assert!(grid.is(2, 1, Species::Stone));
        assert!(grid.is(0, 1, Species::Water));
        assert!(grid.is(1, 1, Species::Fire));
    }
}
