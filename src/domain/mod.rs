//! Domain - What the simulation is made of
//!
//! - species:  the closed species catalog and its static props table
//! - particle: the immutable particle value and swap predicates
//! - factory:  user-facing species names -> particles

pub mod species;
pub mod particle;
pub mod factory;
