//! Gameplay data and logic: cells, the world grid, movement and input.

pub mod input;
pub mod map;
pub mod mode;
pub mod motion;
pub mod tile;
