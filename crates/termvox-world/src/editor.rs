//! Block placement and removal at a targeted hit point.
//!
//! A target is the exact position where a view ray entered a solid cell. The
//! face of that cell nearest the hit point decides where a new block goes.

use glam::Vec3;
use termvox_core::{BlockId, CellPos, Error, Result};
use tracing::debug;

use crate::grid::VoxelWorld;

/// One of the six faces of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    /// All faces, in tie-breaking order.
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Neighbouring cell across this face.
    pub const fn neighbor(self, cell: CellPos) -> CellPos {
        match self {
            Self::PosX => cell.offset(1, 0, 0),
            Self::NegX => cell.offset(-1, 0, 0),
            Self::PosY => cell.offset(0, 1, 0),
            Self::NegY => cell.offset(0, -1, 0),
            Self::PosZ => cell.offset(0, 0, 1),
            Self::NegZ => cell.offset(0, 0, -1),
        }
    }
}

/// Face of the containing cell whose plane is closest to `hit`.
///
/// Ties go to the earlier face in [`Face::ALL`].
pub fn nearest_face(hit: Vec3) -> Face {
    let corner = CellPos::from_world(hit).to_vec3();
    let distances = [
        corner.x + 1.0 - hit.x,
        hit.x - corner.x,
        corner.y + 1.0 - hit.y,
        hit.y - corner.y,
        corner.z + 1.0 - hit.z,
        hit.z - corner.z,
    ];

    let mut best = 0;
    for (i, d) in distances.iter().enumerate().skip(1) {
        if *d < distances[best] {
            best = i;
        }
    }
    Face::ALL[best]
}

fn solid_target(world: &VoxelWorld, target: Vec3) -> Result<CellPos> {
    let cell = CellPos::from_world(target);
    match world.get(cell) {
        None => Err(Error::OutOfBounds(cell)),
        Some(block) if block.is_air() => Err(Error::EmptyTarget(cell)),
        Some(_) => Ok(cell),
    }
}

/// Place `block` against the face of the targeted block nearest the hit point.
///
/// Returns the cell that was written.
pub fn place_adjacent(target: Vec3, world: &mut VoxelWorld, block: BlockId) -> Result<CellPos> {
    let cell = solid_target(world, target)?;
    let face = nearest_face(target);
    let neighbor = face.neighbor(cell);
    world.set(neighbor, block)?;
    debug!(%cell, ?face, %neighbor, "block placed");
    Ok(neighbor)
}

/// Clear the targeted block.
///
/// Returns the cell that was cleared.
pub fn remove_targeted(target: Vec3, world: &mut VoxelWorld) -> Result<CellPos> {
    let cell = solid_target(world, target)?;
    world.set(cell, BlockId::AIR)?;
    debug!(%cell, "block removed");
    Ok(cell)
}
