use crate::factory;

use super::WorldCore;

pub(super) fn add_particle(world: &mut WorldCore, row: i32, col: i32, name: &str) -> bool {
    if !world.grid.check_bounds(row, col) || !world.grid.is_empty(row, col) {
        return false;
    }

    let Some(particle) = factory::create(name) else {
        return false;
    };

    world.grid.set(row, col, Some(particle));
    true
}

/// Visits every in-bounds cell of the disc around (row, col)
///
/// The loops are clipped to the grid, so the cost is bounded by the grid
/// size however large the radius or however far away the centre is.
fn for_each_in_radius(
    world: &mut WorldCore,
    row: i32,
    col: i32,
    radius: i32,
    mut f: impl FnMut(&mut WorldCore, i32, i32) -> bool,
) -> u32 {
    if radius < 0 {
        return 0;
    }
    let (row, col, radius) = (row as i64, col as i64, radius as i64);
    let r2 = radius * radius;

    let row_lo = (row - radius).max(0);
    let row_hi = (row + radius).min(world.grid.height() as i64 - 1);
    let col_lo = (col - radius).max(0);
    let col_hi = (col + radius).min(world.grid.width() as i64 - 1);

    let mut hits = 0;
    for r in row_lo..=row_hi {
        for c in col_lo..=col_hi {
            let (dr, dc) = (r - row, c - col);
            // In-bounds coordinates always fit in i32
            if dr * dr + dc * dc <= r2 && f(world, r as i32, c as i32) {
                hits += 1;
            }
        }
    }
    hits
}

pub(super) fn add_particles_in_radius(
    world: &mut WorldCore,
    row: i32,
    col: i32,
    radius: i32,
    name: &str,
) -> u32 {
    // Reject unknown names once instead of per cell
    if factory::create(name).is_none() {
        return 0;
    }
    for_each_in_radius(world, row, col, radius, |w, r, c| add_particle(w, r, c, name))
}

pub(super) fn remove_particle(world: &mut WorldCore, row: i32, col: i32) -> bool {
    if world.grid.is_empty(row, col) {
        return false;
    }
    world.grid.set(row, col, None);
    true
}

pub(super) fn remove_particles_in_radius(world: &mut WorldCore, row: i32, col: i32, radius: i32) -> u32 {
    for_each_in_radius(world, row, col, radius, remove_particle)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
    world.last_step = Default::default();
}
