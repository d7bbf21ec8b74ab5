//! Core types, math, and constants for termvox.
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Block identities and their display glyphs
//! - Cell coordinates and the single float-to-cell conversion
//! - Vector helpers and orientation-to-direction conversion
//! - The shared error type

pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use coords::CellPos;
pub use error::{Error, Result};
pub use math::{from_angles, normalize, FieldOfView, Orientation};
pub use types::BlockId;

/// Fixed world and screen dimensions.
pub mod constants {
    /// World extent along x (columns).
    pub const WORLD_WIDTH: usize = 20;
    /// World extent along y (rows).
    pub const WORLD_HEIGHT: usize = 20;
    /// World extent along z (vertical layers).
    pub const WORLD_DEPTH: usize = 10;
    /// Total cells in the world grid.
    pub const WORLD_VOLUME: usize = WORLD_WIDTH * WORLD_HEIGHT * WORLD_DEPTH;

    /// Screen width in terminal cells.
    pub const SCREEN_WIDTH: usize = 100;
    /// Screen height in terminal cells.
    pub const SCREEN_HEIGHT: usize = 40;

    /// Vertical field of view in radians.
    pub const VIEW_HEIGHT: f32 = 0.7;
    /// Horizontal field of view in radians.
    pub const VIEW_WIDTH: f32 = 1.0;

    /// Height of the player's eye above their feet.
    pub const EYE_HEIGHT: f32 = 1.5;
    /// Number of solid layers in a freshly generated world.
    pub const GROUND_LAYERS: usize = 4;
}
