//! Spatial partitioning for the collision broad phase

pub mod grid;

pub use grid::Grid;
