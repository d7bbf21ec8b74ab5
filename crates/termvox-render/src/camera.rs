//! Camera and per-cell view directions.

use glam::Vec3;
use termvox_core::{normalize, FieldOfView, Orientation, Result};

use crate::framebuffer::DirectionField;

/// Camera for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub orientation: Orientation,
    pub fov: FieldOfView,
}

/// Edge directions and offsets spanning the field of view.
///
/// Cell directions are a bilinear blend of these vectors; see
/// [`ViewBasis::direction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub top: Vec3,
    pub bottom: Vec3,
    pub left: Vec3,
    pub right: Vec3,
    pub vertical_mid: Vec3,
    pub horizontal_mid: Vec3,
    /// `top - vertical_mid`
    pub vertical_offset: Vec3,
    /// `left - horizontal_mid`
    pub horizontal_offset: Vec3,
}

impl ViewBasis {
    /// Unit direction for column `x` of `width` and row `y` of `height`.
    ///
    /// Column 0 is the left edge and row 0 the top edge. Both dimensions
    /// must be at least 2.
    pub fn direction(&self, x: usize, y: usize, width: usize, height: usize) -> Vec3 {
        let u = x as f32 / (width - 1) as f32;
        let v = y as f32 / (height - 1) as f32;
        normalize(
            self.horizontal_mid + self.horizontal_offset + self.vertical_offset
                - self.horizontal_offset * (2.0 * u)
                - self.vertical_offset * (2.0 * v),
        )
    }
}

impl Camera {
    /// Create a new camera.
    pub const fn new(orientation: Orientation, fov: FieldOfView) -> Self {
        Self { orientation, fov }
    }

    /// Compute the edge directions for the current orientation.
    pub fn basis(&self) -> ViewBasis {
        let half_v = self.fov.vertical / 2.0;
        let half_h = self.fov.horizontal / 2.0;

        let top = self.orientation.rotated(half_v, 0.0).direction();
        let bottom = self.orientation.rotated(-half_v, 0.0).direction();
        let left = self.orientation.rotated(0.0, -half_h).direction();
        let right = self.orientation.rotated(0.0, half_h).direction();

        let vertical_mid = (top + bottom) * 0.5;
        let horizontal_mid = (left + right) * 0.5;

        ViewBasis {
            top,
            bottom,
            left,
            right,
            vertical_mid,
            horizontal_mid,
            vertical_offset: top - vertical_mid,
            horizontal_offset: left - horizontal_mid,
        }
    }

    /// Allocate a direction field of the given size.
    pub fn direction_field(&self, width: usize, height: usize) -> Result<DirectionField> {
        let mut field = DirectionField::new(width, height, Vec3::ZERO)?;
        self.fill_direction_field(&mut field);
        Ok(field)
    }

    /// Recompute every direction of an existing field.
    pub fn fill_direction_field(&self, field: &mut DirectionField) {
        let basis = self.basis();
        let (width, height) = (field.width(), field.height());
        for (y, row) in field.rows_mut().enumerate() {
            for (x, dir) in row.iter_mut().enumerate() {
                *dir = basis.direction(x, y, width, height);
            }
        }
    }
}
