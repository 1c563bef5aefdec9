//! Spatial state: the cell grid and the dirty-cell work queue

pub mod dirty;
pub mod grid;
