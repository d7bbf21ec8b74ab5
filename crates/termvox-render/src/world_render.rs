//! Full-frame rendering of the voxel world.

use glam::Vec3;
use termvox_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use termvox_core::{BlockId, CellPos, FieldOfView, Orientation, Result};
use termvox_world::VoxelWorld;
use tracing::trace;

use crate::camera::Camera;
use crate::framebuffer::{DirectionField, FrameBuffer};
use crate::ray_march::RayMarcher;

/// Casts one ray per screen cell into a reusable frame buffer.
#[derive(Debug, Clone)]
pub struct WorldRenderer {
    fov: FieldOfView,
    marcher: RayMarcher,
    directions: DirectionField,
    buffer: FrameBuffer,
}

impl WorldRenderer {
    /// Create a renderer for a `width` x `height` screen.
    pub fn new(width: usize, height: usize, fov: FieldOfView, marcher: RayMarcher) -> Result<Self> {
        Ok(Self {
            fov,
            marcher,
            directions: DirectionField::new(width, height, Vec3::ZERO)?,
            buffer: FrameBuffer::new(width, height, ' ')?,
        })
    }

    /// Renderer for the fixed terminal screen with the default field of view.
    pub fn for_screen() -> Result<Self> {
        Self::new(
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            FieldOfView::default(),
            RayMarcher::default(),
        )
    }

    pub const fn marcher(&self) -> &RayMarcher {
        &self.marcher
    }

    /// The most recently rendered frame.
    pub const fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Render the world as seen from `eye`.
    ///
    /// When `highlight` names a non-empty cell, that cell is drawn with
    /// [`BlockId::HIGHLIGHT`] for this frame only; the world is left exactly
    /// as it was passed in.
    pub fn render(
        &mut self,
        world: &mut VoxelWorld,
        eye: Vec3,
        orientation: Orientation,
        highlight: Option<CellPos>,
    ) -> &FrameBuffer {
        let swap = highlight.and_then(|cell| world.swap_solid(cell, BlockId::HIGHLIGHT));

        self.render_plain(world, eye, orientation);

        if let Some(swap) = swap {
            world.restore(swap);
        }
        &self.buffer
    }

    /// Render without any highlight.
    pub fn render_plain(
        &mut self,
        world: &VoxelWorld,
        eye: Vec3,
        orientation: Orientation,
    ) -> &FrameBuffer {
        Camera::new(orientation, self.fov).fill_direction_field(&mut self.directions);

        for (dir_row, out_row) in self.directions.rows().zip(self.buffer.rows_mut()) {
            for (&dir, out) in dir_row.iter().zip(out_row.iter_mut()) {
                *out = self.marcher.cast(eye, dir, world).glyph();
            }
        }
        trace!(?eye, ?orientation, "frame cast");
        &self.buffer
    }
}
