//! Software ray casting renderer for termvox.
//!
//! This crate provides:
//! - Per-cell view direction fields from camera orientation
//! - Voxel grid traversal and hit classification
//! - Full-frame rendering into a character buffer
//! - ANSI encoding of the frame buffer

pub mod camera;
pub mod encode;
pub mod framebuffer;
pub mod ray_march;
pub mod world_render;

pub use camera::{Camera, ViewBasis};
pub use encode::{encode, encode_into, COLOR_HIGHLIGHT, COLOR_RESET};
pub use framebuffer::{DirectionField, FrameBuffer, Grid2};
pub use ray_march::{Hit, RayMarchConfig, RayMarcher};
pub use world_render::WorldRenderer;
