//! Math utilities and helpers.
//!
//! Vectors are plain [`glam::Vec3`]; addition, scaling and subtraction are
//! glam's operators. This module adds the two operations whose behaviour the
//! renderer relies on exactly: zero-safe normalization and the
//! pitch/yaw-to-direction conversion.

use glam::Vec3;

use crate::constants::{VIEW_HEIGHT, VIEW_WIDTH};

/// Normalize `v` to unit length.
///
/// A vector of magnitude exactly zero has no direction and is returned
/// unchanged.
#[inline]
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 {
        v
    } else {
        v / len
    }
}

/// Unit direction for the given orientation.
///
/// Pitch tilts toward +z, yaw turns from +x toward +y.
#[inline]
#[must_use]
pub fn from_angles(orientation: Orientation) -> Vec3 {
    let (sin_pitch, cos_pitch) = orientation.pitch.sin_cos();
    let (sin_yaw, cos_yaw) = orientation.yaw.sin_cos();
    Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
}

/// Camera/player facing in radians.
///
/// Neither angle is wrapped or clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    /// Create a new orientation
    #[inline]
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Unit facing direction.
    #[inline]
    pub fn direction(self) -> Vec3 {
        from_angles(self)
    }

    /// Orientation with both angles shifted.
    #[inline]
    #[must_use]
    pub fn rotated(self, d_pitch: f32, d_yaw: f32) -> Self {
        Self::new(self.pitch + d_pitch, self.yaw + d_yaw)
    }
}

/// Angular span of the visible world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOfView {
    /// Horizontal span in radians.
    pub horizontal: f32,
    /// Vertical span in radians.
    pub vertical: f32,
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self {
            horizontal: VIEW_WIDTH,
            vertical: VIEW_HEIGHT,
        }
    }
}
