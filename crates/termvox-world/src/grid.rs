//! Flat storage for the fixed-size voxel grid.

use glam::Vec3;
use termvox_core::constants::{WORLD_DEPTH, WORLD_HEIGHT, WORLD_VOLUME, WORLD_WIDTH};
use termvox_core::{BlockId, CellPos, Error, Result};

use crate::generation::GroundConfig;

/// A block temporarily written over a cell, undone by
/// [`VoxelWorld::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the swapped cell stays changed until restored"]
pub struct CellSwap {
    index: usize,
    original: BlockId,
}

impl CellSwap {
    /// The block that was in the cell before the swap.
    pub const fn original(&self) -> BlockId {
        self.original
    }
}

/// The voxel world: `WORLD_DEPTH` layers of `WORLD_HEIGHT` rows of
/// `WORLD_WIDTH` cells, stored in one flat array.
///
/// Every accessor is bounds-checked; there is no way to index a cell outside
/// the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelWorld {
    blocks: Box<[BlockId]>,
}

impl Default for VoxelWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelWorld {
    /// Create a world with every cell empty.
    pub fn new() -> Self {
        Self {
            blocks: vec![BlockId::AIR; WORLD_VOLUME].into_boxed_slice(),
        }
    }

    /// Create a world and fill its ground layer.
    pub fn with_ground(config: &GroundConfig) -> Self {
        let mut world = Self::new();
        config.apply(&mut world);
        world
    }

    /// Grid extents as (width, height, depth).
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (WORLD_WIDTH, WORLD_HEIGHT, WORLD_DEPTH)
    }

    /// Returns `true` if the cell lies inside the grid.
    #[inline]
    pub const fn contains(&self, cell: CellPos) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && (cell.x as usize) < WORLD_WIDTH
            && (cell.y as usize) < WORLD_HEIGHT
            && (cell.z as usize) < WORLD_DEPTH
    }

    /// Returns `true` if the world-space position lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, pos: Vec3) -> bool {
        self.contains(CellPos::from_world(pos))
    }

    #[inline]
    fn index(&self, cell: CellPos) -> Option<usize> {
        self.contains(cell).then(|| {
            cell.x as usize
                + cell.y as usize * WORLD_WIDTH
                + cell.z as usize * WORLD_WIDTH * WORLD_HEIGHT
        })
    }

    /// Block at the cell, or `None` outside the grid.
    #[inline]
    pub fn get(&self, cell: CellPos) -> Option<BlockId> {
        self.index(cell).map(|i| self.blocks[i])
    }

    /// Block at the cell containing a world-space position.
    #[inline]
    pub fn block_at(&self, pos: Vec3) -> Option<BlockId> {
        self.get(CellPos::from_world(pos))
    }

    /// Write a block, returning the value it replaced.
    pub fn set(&mut self, cell: CellPos, block: BlockId) -> Result<BlockId> {
        let index = self.index(cell).ok_or(Error::OutOfBounds(cell))?;
        Ok(std::mem::replace(&mut self.blocks[index], block))
    }

    /// Overwrite a solid cell until the returned swap is restored.
    ///
    /// Empty and out-of-grid cells are left alone and give `None`.
    pub fn swap_solid(&mut self, cell: CellPos, block: BlockId) -> Option<CellSwap> {
        let index = self.index(cell)?;
        let slot = &mut self.blocks[index];
        slot.is_solid().then(|| CellSwap {
            index,
            original: std::mem::replace(slot, block),
        })
    }

    /// Put back the block a [`CellSwap`] replaced.
    pub fn restore(&mut self, swap: CellSwap) {
        self.blocks[swap.index] = swap.original;
    }

    /// Fill the lowest `layers` layers with one block.
    pub(crate) fn fill_layers(&mut self, layers: usize, block: BlockId) {
        let end = layers.min(WORLD_DEPTH) * WORLD_WIDTH * WORLD_HEIGHT;
        self.blocks[..end].fill(block);
    }

    /// Returns `true` if the cell is inside the grid and holds a block.
    #[inline]
    pub fn is_solid(&self, cell: CellPos) -> bool {
        self.get(cell).is_some_and(BlockId::is_solid)
    }

    /// Returns `true` if the cell is inside the grid and empty.
    ///
    /// Cells outside the grid are neither solid nor empty.
    #[inline]
    pub fn is_empty(&self, cell: CellPos) -> bool {
        self.get(cell).is_some_and(BlockId::is_air)
    }

    /// Number of non-empty cells.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }
}
