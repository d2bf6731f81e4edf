//! Particle - an immutable species instance living in one grid cell
//!
//! A particle carries no state besides its species; color, type tag and the
//! swap predicate all come from the species table.

use super::species::Species;

/// Decides whether a mover may trade places with the occupant of its target
pub type SwapPredicate = fn(&Particle) -> bool;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Particle {
    species: Species,
}

impl Particle {
    #[inline]
    pub const fn new(species: Species) -> Self {
        Self { species }
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        self.species.color()
    }

    #[inline]
    pub fn type_tag(&self) -> &'static str {
        self.species.type_tag()
    }

    #[inline]
    pub fn is(&self, species: Species) -> bool {
        self.species == species
    }

    /// This particle's swap predicate, suitable for `Grid::move_particle`
    #[inline]
    pub fn swap_predicate(&self) -> SwapPredicate {
        self.species.props().swap
    }

    #[inline]
    pub fn swaps_with(&self, other: &Particle) -> bool {
        (self.swap_predicate())(other)
    }
}

impl From<Species> for Particle {
    fn from(species: Species) -> Self {
        Self::new(species)
    }
}

/// Default predicate: never displace an occupant
pub fn never_swaps(_other: &Particle) -> bool {
    false
}

/// Powder predicate: sink below water
pub fn swaps_with_water(other: &Particle) -> bool {
    other.is(Species::Water)
}
