//! LiquidBehavior - Water
//!
//! In priority order:
//! 1. Dirt directly below becomes grass and the water is used up
//! 2. Fire on any side is put out and the water is used up
//! 3. Sand directly below: try to move down with water's own predicate
//!    (which never swaps, so an occupied cell stays put)
//! 4. Coin flip: fall straight down into an empty cell
//! 5. Otherwise flow: right, down-left, down-right (each behind a coin flip),
//!    then left. A branch is chosen when its target reads empty; the move
//!    itself never displaces anything.
//!
//! Out-of-bounds targets read as empty, so a branch can be chosen and then
//! fail to move at the grid edge. The water just stays put for that step.

use super::{Behavior, UpdateContext, ORTHOGONAL};
use crate::domain::particle::Particle;
use crate::domain::species::Species;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the water was consumed
    fn react(&self, ctx: &mut UpdateContext) -> bool {
        let (row, col) = (ctx.row, ctx.col);

        if ctx.grid.is(row + 1, col, Species::Dirt) {
            ctx.grid.set(row + 1, col, Some(Particle::new(Species::Grass)));
            ctx.grid.set(row, col, None);
            return true;
        }

        for (d_row, d_col) in ORTHOGONAL {
            if ctx.grid.is(row + d_row, col + d_col, Species::Fire) {
                ctx.grid.set(row + d_row, col + d_col, None);
                ctx.grid.set(row, col, None);
                return true;
            }
        }

        false
    }

    fn flow(&self, ctx: &mut UpdateContext, me: Particle) {
        let (row, col) = (ctx.row, ctx.col);

        if ctx.grid.is(row + 1, col, Species::Sand)
            && ctx.grid.move_particle(row, col, row + 1, col, Some(me.swap_predicate()))
        {
            return;
        }

        if ctx.rng.coin_flip()
            && ctx.grid.is_empty(row + 1, col)
            && ctx.grid.move_particle(row, col, row + 1, col, None)
        {
            return;
        }

        let (to_row, to_col) = if ctx.rng.coin_flip() && ctx.grid.is_empty(row, col + 1) {
            (row, col + 1)
        } else if ctx.rng.coin_flip() && ctx.grid.is_empty(row + 1, col - 1) {
            (row + 1, col - 1)
        } else if ctx.rng.coin_flip() && ctx.grid.is_empty(row + 1, col + 1) {
            (row + 1, col + 1)
        } else if ctx.grid.is_empty(row, col - 1) {
            (row, col - 1)
        } else {
            return;
        };
        ctx.grid.move_particle(row, col, to_row, to_col, None);
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(me) = ctx.grid.get(ctx.row, ctx.col) else {
            return;
        };
        if self.react(ctx) {
            return;
        }
        self.flow(ctx, me);
    }
}
