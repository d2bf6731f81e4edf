//! Systems - Per-species update rules

pub mod behaviors;
