//! Spatial - Grid storage

pub mod grid;
