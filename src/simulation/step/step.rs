use crate::behaviors::UpdateContext;

use super::{StepStats, StepTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let timer = StepTimer::start();

    // Flags travel with particles, so a particle that moves ahead of the scan
    // is not visited twice. Particles spawned by rules start flagged.
    world.grid.reset_updated();

    let width = world.grid.width();
    let height = world.grid.height();
    let mut updated = 0u32;

    for row in 0..height {
        for col in 0..width {
            let idx = world.grid.index(row, col);
            if world.grid.is_updated_idx(idx) {
                continue;
            }
            let Some(particle) = world.grid.get_idx(idx) else {
                continue;
            };
            world.grid.set_updated_idx(idx, true);

            let kind = particle.species().behavior();
            let mut ctx = UpdateContext::new(&mut world.grid, row as i32, col as i32, &mut *world.rng);
            world.behaviors.update(kind, &mut ctx);
            updated += 1;
        }
    }

    world.frame += 1;
    world.last_step = StepStats {
        updated,
        particle_count: world.grid.particle_count() as u32,
        step_ms: timer.elapsed_ms(),
    };
}

pub(super) fn update_particle(world: &mut WorldCore, row: i32, col: i32) {
    world
        .behaviors
        .update_at(&mut world.grid, row, col, &mut *world.rng);
}
