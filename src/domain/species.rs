//! Species catalog
//!
//! Species are a closed set. Each one has a row in `SPECIES_DATA` holding its
//! display name, type tag, color, swap predicate and the behavior kind the
//! registry dispatches on. Dirt shares Sand's predicate and behavior kind, so
//! the two only differ in name and color.

use super::particle::{never_swaps, swaps_with_water, SwapPredicate};

/// Which update rule a species runs
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BehaviorKind {
    /// Falls, slides diagonally, sinks through water
    Powder,
    /// Flows, douses fire, turns dirt into grass
    Liquid,
    /// Freezes adjacent water
    Freeze,
    /// Burns adjacent wood
    Burn,
    /// Grows into empty space while touching water
    Grow,
    /// Does nothing
    Inert,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Sand,
    Water,
    Ice,
    Fire,
    Wood,
    Stone,
    Dirt,
    Grass,
}

#[derive(Copy, Clone)]
pub struct SpeciesProps {
    /// Name shown in the UI dropdown and accepted by the factory
    pub name: &'static str,
    /// Type tag other rules match against
    pub type_tag: &'static str,
    /// Display color tag
    pub color: &'static str,
    /// Packed ABGR pixel (0xAABBGGRR) for the canvas buffer
    pub pixel: u32,
    pub swap: SwapPredicate,
    pub behavior: BehaviorKind,
    /// Only placeable species can be created by name
    pub placeable: bool,
}

pub const SPECIES_COUNT: usize = 8;

/// Catalog order is also the dropdown order
pub const ALL_SPECIES: [Species; SPECIES_COUNT] = [
    Species::Sand,
    Species::Water,
    Species::Ice,
    Species::Fire,
    Species::Wood,
    Species::Stone,
    Species::Dirt,
    Species::Grass,
];

pub static SPECIES_DATA: [SpeciesProps; SPECIES_COUNT] = [
    SpeciesProps {
        name: "Sand",
        type_tag: "sand",
        color: "orange",
        pixel: 0xFF00A5FF,
        swap: swaps_with_water,
        behavior: BehaviorKind::Powder,
        placeable: true,
    },
    SpeciesProps {
        name: "Water",
        type_tag: "water",
        color: "blue",
        pixel: 0xFFFF0000,
        swap: never_swaps,
        behavior: BehaviorKind::Liquid,
        placeable: true,
    },
    SpeciesProps {
        name: "Ice",
        type_tag: "ice",
        color: "lightblue",
        pixel: 0xFFE6D8AD,
        swap: never_swaps,
        behavior: BehaviorKind::Freeze,
        placeable: true,
    },
    SpeciesProps {
        name: "Fire",
        type_tag: "fire",
        color: "red",
        pixel: 0xFF0000FF,
        swap: never_swaps,
        behavior: BehaviorKind::Burn,
        placeable: true,
    },
    SpeciesProps {
        name: "Wood",
        type_tag: "wood",
        color: "brown",
        pixel: 0xFF2A2AA5,
        swap: never_swaps,
        behavior: BehaviorKind::Grow,
        placeable: true,
    },
    SpeciesProps {
        name: "Stone",
        type_tag: "stone",
        color: "gray",
        pixel: 0xFF808080,
        swap: never_swaps,
        behavior: BehaviorKind::Inert,
        placeable: true,
    },
    // Alias of Sand: same predicate, same behavior
    SpeciesProps {
        name: "Dirt",
        type_tag: "dirt",
        color: "brown",
        pixel: 0xFF2A2AA5,
        swap: swaps_with_water,
        behavior: BehaviorKind::Powder,
        placeable: true,
    },
    SpeciesProps {
        name: "Grass",
        type_tag: "grass",
        color: "green",
        pixel: 0xFF008000,
        swap: never_swaps,
        behavior: BehaviorKind::Inert,
        placeable: false,
    },
];

impl Species {
    #[inline]
    pub fn props(self) -> &'static SpeciesProps {
        &SPECIES_DATA[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.props().name
    }

    #[inline]
    pub fn type_tag(self) -> &'static str {
        self.props().type_tag
    }

    #[inline]
    pub fn color(self) -> &'static str {
        self.props().color
    }

    #[inline]
    pub fn pixel(self) -> u32 {
        self.props().pixel
    }

    #[inline]
    pub fn behavior(self) -> BehaviorKind {
        self.props().behavior
    }
}
