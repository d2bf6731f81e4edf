use crate::behaviors::BehaviorRegistry;
use crate::core::random::Xorshift32;
use crate::grid::Grid;

use super::{StepStats, WorldCore, WorldSettings};

pub(super) fn create_world_core(settings: WorldSettings) -> WorldCore {
    console_log!(
        "world {}x{} created (seed {})",
        settings.width,
        settings.height,
        settings.seed
    );

    WorldCore {
        grid: Grid::new(settings.width, settings.height),
        behaviors: BehaviorRegistry::new(),
        rng: Box::new(Xorshift32::new(settings.seed)),
        settings,
        frame: 0,
        last_step: StepStats::default(),
    }
}
