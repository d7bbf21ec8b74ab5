//! Initial world contents.

use termvox_core::constants::{GROUND_LAYERS, WORLD_DEPTH};
use termvox_core::BlockId;
use tracing::debug;

use crate::grid::VoxelWorld;

/// Ground layer configuration.
#[derive(Debug, Clone)]
pub struct GroundConfig {
    /// Number of solid layers, counted up from z = 0.
    pub height: usize,
    /// Block used for the ground.
    pub block: BlockId,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            height: GROUND_LAYERS,
            block: BlockId::STONE,
        }
    }
}

impl GroundConfig {
    /// Fill every cell below `height` across the full width and height.
    ///
    /// Heights above the world depth fill the whole world.
    pub fn apply(&self, world: &mut VoxelWorld) {
        let layers = self.height.min(WORLD_DEPTH);
        world.fill_layers(layers, self.block);
        debug!(layers, block = %self.block.glyph(), "ground layer generated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termvox_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
    use termvox_core::CellPos;

    #[test]
    fn default_ground_fills_bottom_four_layers() {
        let world = VoxelWorld::with_ground(&GroundConfig::default());
        for z in 0..WORLD_DEPTH as i32 {
            let expected = if z < 4 { BlockId::STONE } else { BlockId::AIR };
            assert_eq!(world.get(CellPos::new(0, 0, z)), Some(expected));
            assert_eq!(world.get(CellPos::new(19, 19, z)), Some(expected));
            assert_eq!(world.get(CellPos::new(7, 13, z)), Some(expected));
        }
        assert_eq!(world.solid_count(), 4 * WORLD_WIDTH * WORLD_HEIGHT);
    }

    #[test]
    fn oversized_ground_is_clamped() {
        let config = GroundConfig {
            height: 99,
            block: BlockId::STONE,
        };
        let world = VoxelWorld::with_ground(&config);
        assert_eq!(world.solid_count(), WORLD_WIDTH * WORLD_HEIGHT * WORLD_DEPTH);
    }

    #[test]
    fn zero_height_leaves_world_empty() {
        let config = GroundConfig {
            height: 0,
            ..Default::default()
        };
        assert_eq!(VoxelWorld::with_ground(&config).solid_count(), 0);
    }
}
