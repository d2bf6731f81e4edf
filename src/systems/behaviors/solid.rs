//! Solid behaviors - Ice, stone, grass
//!
//! Ice freezes every orthogonally adjacent water cell in place. Stone and
//! grass never do anything.

use super::{Behavior, UpdateContext, ORTHOGONAL};
use crate::domain::particle::Particle;
use crate::domain::species::Species;

pub struct FreezeBehavior;

impl FreezeBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FreezeBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        for (d_row, d_col) in ORTHOGONAL {
            let (n_row, n_col) = (ctx.row + d_row, ctx.col + d_col);
            if ctx.grid.is(n_row, n_col, Species::Water) {
                ctx.grid.set(n_row, n_col, Some(Particle::new(Species::Ice)));
            }
        }
    }
}

pub struct InertBehavior;

impl InertBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for InertBehavior {
    #[inline]
    fn update(&self, _ctx: &mut UpdateContext) {}
}
