//! Behaviors - Per-species update rules
//!
//! Each behavior handles one kind of material. Rules only see the grid through
//! the `Grid` primitives and always act on live state, so a rule can observe
//! what earlier cells did during the same step.
//!
//! Neighbor checks use the four orthogonal offsets in a fixed order:
//! down, up, right, left.

mod powder;
mod liquid;
mod solid;
mod energy;
mod plant;

pub use powder::PowderBehavior;
pub use liquid::LiquidBehavior;
pub use solid::{FreezeBehavior, InertBehavior};
pub use energy::BurnBehavior;
pub use plant::GrowBehavior;

use crate::core::random::RandomSource;
use crate::domain::species::BehaviorKind;
use crate::grid::Grid;

/// Orthogonal neighbor offsets as (d_row, d_col): down, up, right, left
pub const ORTHOGONAL: [(i32, i32); 4] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub row: i32,
    pub col: i32,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> UpdateContext<'a> {
    pub fn new(grid: &'a mut Grid, row: i32, col: i32, rng: &'a mut dyn RandomSource) -> Self {
        Self { grid, row, col, rng }
    }
}

/// Behavior trait - each kind implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by kind
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    freeze: FreezeBehavior,
    burn: BurnBehavior,
    grow: GrowBehavior,
    inert: InertBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            freeze: FreezeBehavior::new(),
            burn: BurnBehavior::new(),
            grow: GrowBehavior::new(),
            inert: InertBehavior::new(),
        }
    }

    /// Dispatch update to the behavior for `kind`
    pub fn update(&self, kind: BehaviorKind, ctx: &mut UpdateContext) {
        match kind {
            BehaviorKind::Powder => self.powder.update(ctx),
            BehaviorKind::Liquid => self.liquid.update(ctx),
            BehaviorKind::Freeze => self.freeze.update(ctx),
            BehaviorKind::Burn => self.burn.update(ctx),
            BehaviorKind::Grow => self.grow.update(ctx),
            BehaviorKind::Inert => self.inert.update(ctx),
        }
    }

    /// Run the rule of whatever occupies (row, col). Empty cells are skipped.
    pub fn update_at(&self, grid: &mut Grid, row: i32, col: i32, rng: &mut dyn RandomSource) {
        let Some(particle) = grid.get(row, col) else {
            return;
        };
        let kind = particle.species().behavior();
        let mut ctx = UpdateContext::new(grid, row, col, rng);
        self.update(kind, &mut ctx);
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::random::RandomSource;

    /// Replays a fixed script of values, then repeats the last one
    pub struct ScriptedRandom {
        values: Vec<i32>,
        pos: usize,
    }

    impl ScriptedRandom {
        pub fn new(values: &[i32]) -> Self {
            Self { values: values.to_vec(), pos: 0 }
        }

        pub fn draws(&self) -> usize {
            self.pos
        }
    }

    impl RandomSource for ScriptedRandom {
        fn random_int(&mut self, min: i32, max: i32) -> i32 {
            let v = self
                .values
                .get(self.pos)
                .or(self.values.last())
                .copied()
                .unwrap_or(min);
            self.pos += 1;
            v.clamp(min, (max - 1).max(min))
        }
    }
}
