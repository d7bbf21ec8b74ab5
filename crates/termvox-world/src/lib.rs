//! Voxel world storage and editing for termvox.
//!
//! The world is a single fixed-size grid; there is no chunking or streaming.

pub mod editor;
pub mod generation;
pub mod grid;

pub use editor::{nearest_face, place_adjacent, remove_targeted, Face};
pub use generation::GroundConfig;
pub use grid::{CellSwap, VoxelWorld};
