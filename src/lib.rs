#![warn(missing_docs)]
//! Static tile grids for maze-style game levels

pub mod gui;
pub mod level;
pub mod standard_levels;
pub mod surface;
