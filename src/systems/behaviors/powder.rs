//! PowderBehavior - Sand and dirt
//!
//! Falls straight down, otherwise slides down-left, otherwise down-right.
//! Every attempt uses the particle's own swap predicate, so powder sinks
//! through water. The first successful move wins.

use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let (row, col) = (ctx.row, ctx.col);
        let Some(me) = ctx.grid.get(row, col) else {
            return;
        };
        let swap = Some(me.swap_predicate());
        let below = row + 1;

        for target_col in [col, col - 1, col + 1] {
            if ctx.grid.move_particle(row, col, below, target_col, swap) {
                return;
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

    fn run(grid: &mut Grid, row: i32, col: i32) {
        let mut rng = ScriptedRandom::new(&[0]);
        BehaviorRegistry::new().update_at(grid, row, col, &mut rng);
    }

    fn put(grid: &mut Grid, row: i32, col: i32, species: Species) {
        grid.set(row, col, Some(Particle::new(species)));
    }

    #[test]
    fn falls_straight_down() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 0, 2, Species::Sand);
        run(&mut grid, 0, 2);
        assert!(grid.is_empty(0, 2));
        assert!(grid.is(1, 2, Species::Sand));
    }

    #[test]
    fn sinks_through_water_below() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 1, 2, Species::Sand);
        put(&mut grid, 2, 2, Species::Water);
        run(&mut grid, 1, 2);
        assert!(grid.is(2, 2, Species::Sand));
        assert!(grid.is(1, 2, Species::Water));
        assert_eq!(grid.particle_count(), 2);
    }

    #[test]
    fn slides_down_left_before_down_right() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 1, 2, Species::Sand);
        put(&mut grid, 2, 2, Species::Stone);
        run(&mut grid, 1, 2);
        assert!(grid.is(2, 1, Species::Sand));
        assert!(grid.is_empty(2, 3));
    }

    #[test]
    fn slides_down_right_when_left_blocked() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 1, 2, Species::Dirt);
        put(&mut grid, 2, 2, Species::Stone);
        put(&mut grid, 2, 1, Species::Stone);
        run(&mut grid, 1, 2);
        assert!(grid.is(2, 3, Species::Dirt));
    }

    #[test]
    fn diagonal_sinks_into_water() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 1, 2, Species::Sand);
        put(&mut grid, 2, 2, Species::Stone);
        put(&mut grid, 2, 1, Species::Water);
        run(&mut grid, 1, 2);
        assert!(grid.is(2, 1, Species::Sand));
        assert!(grid.is(1, 2, Species::Water));
    }

    #[test]
    fn rests_when_fully_blocked() {
        let mut grid = Grid::new(5, 5);
        put(&mut grid, 1, 2, Species::Sand);
        for col in 1..=3 {
            put(&mut grid, 2, col, Species::Stone);
        }
        run(&mut grid, 1, 2);
        assert!(grid.is(1, 2, Species::Sand));
    }

    #[test]
    fn rests_on_bottom_row() {
        let mut grid = Grid::new(3, 3);
        put(&mut grid, 2, 0, Species::Dirt);
        run(&mut grid, 2, 0);
        assert!(grid.is(2, 0, Species::Dirt));
        assert_eq!(grid.particle_count(), 1);
    }
}
