//! Core - Infrastructure shared by the grid, rules and world
//!
//! - log:    console logging that works in the browser and in native tests
//! - random: the randomness collaborator used by probabilistic rules

#[macro_use]
pub mod log;
pub mod random;
