//! Voxel grid traversal.
//!
//! Rays advance from one cell boundary to the next: at each step the distance
//! to the nearest boundary along the ray is computed per axis, and the ray is
//! pushed a small epsilon past it so the next sample lands in the new cell.

use glam::Vec3;
use termvox_core::BlockId;
use termvox_world::VoxelWorld;
use tracing::trace;

/// What a ray hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// The ray left the world without touching a block.
    Empty,
    /// A block face.
    Surface { block: BlockId, position: Vec3 },
    /// A block close to two or more cell boundary planes at once.
    Edge { block: BlockId, position: Vec3 },
}

impl Hit {
    /// Display glyph for this hit.
    pub const fn glyph(&self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Edge { .. } => '-',
            Self::Surface { block, .. } => block.glyph(),
        }
    }

    /// Block that was hit, if any.
    pub const fn block(&self) -> Option<BlockId> {
        match self {
            Self::Empty => None,
            Self::Surface { block, .. } | Self::Edge { block, .. } => Some(*block),
        }
    }

    /// Sample position inside the hit cell, if any.
    pub const fn position(&self) -> Option<Vec3> {
        match self {
            Self::Empty => None,
            Self::Surface { position, .. } | Self::Edge { position, .. } => Some(*position),
        }
    }
}

/// Configuration for the ray marcher.
#[derive(Debug, Clone)]
pub struct RayMarchConfig {
    /// Upper bound on samples per ray; a ray that reaches it counts as a miss.
    pub max_steps: u32,
    /// Direction components at or below this magnitude do not constrain a
    /// step, and every step overshoots its boundary by this much.
    pub epsilon: f32,
    /// Step length when no axis constrains the step.
    pub max_step: f32,
    /// Distance from a boundary plane within which a hit counts as near it.
    pub border_size: f32,
}

impl Default for RayMarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 512,
            epsilon: 0.01,
            max_step: 2.0,
            border_size: 0.05,
        }
    }
}

/// Walks rays through a [`VoxelWorld`].
#[derive(Debug, Clone, Default)]
pub struct RayMarcher {
    config: RayMarchConfig,
}

impl RayMarcher {
    pub const fn new(config: RayMarchConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &RayMarchConfig {
        &self.config
    }

    /// Step along the ray, handing every in-bounds sample to `visit`.
    ///
    /// Stops with the first `Some` returned by `visit`. Returns `None` once
    /// the ray leaves the world or the step cap is reached. A ray starting
    /// outside the world never calls `visit`.
    pub fn traverse<T>(
        &self,
        origin: Vec3,
        direction: Vec3,
        world: &VoxelWorld,
        mut visit: impl FnMut(Vec3, BlockId) -> Option<T>,
    ) -> Option<T> {
        let mut pos = origin;
        for _ in 0..self.config.max_steps {
            let block = world.block_at(pos)?;
            if let Some(result) = visit(pos, block) {
                return Some(result);
            }
            let dist = self.step_distance(pos, direction);
            pos += direction * (dist + self.config.epsilon);
        }
        trace!(?origin, ?direction, "ray hit step cap");
        None
    }

    /// Distance along `direction` to the nearest cell boundary ahead of `pos`.
    fn step_distance(&self, pos: Vec3, direction: Vec3) -> f32 {
        let eps = self.config.epsilon;
        let axis = |p: f32, d: f32| {
            if d > eps {
                Some((p.floor() + 1.0 - p) / d)
            } else if d < -eps {
                Some((p.floor() - p) / d)
            } else {
                None
            }
        };

        [
            axis(pos.x, direction.x),
            axis(pos.y, direction.y),
            axis(pos.z, direction.z),
        ]
        .into_iter()
        .flatten()
        .fold(self.config.max_step, f32::min)
    }

    /// Returns `true` if `pos` is within the border size of a boundary plane
    /// on at least two axes.
    pub fn is_edge(&self, pos: Vec3) -> bool {
        let near = |p: f32| (p - p.round()).abs() < self.config.border_size;
        [near(pos.x), near(pos.y), near(pos.z)]
            .into_iter()
            .filter(|&n| n)
            .count()
            >= 2
    }

    /// Classify a sample that landed in a non-empty cell.
    pub fn classify(&self, position: Vec3, block: BlockId) -> Hit {
        if self.is_edge(position) {
            Hit::Edge { block, position }
        } else {
            Hit::Surface { block, position }
        }
    }

    /// Cast a ray and classify the first block it reaches.
    pub fn cast(&self, origin: Vec3, direction: Vec3, world: &VoxelWorld) -> Hit {
        self.traverse(origin, direction, world, |pos, block| {
            block.is_solid().then(|| self.classify(pos, block))
        })
        .unwrap_or(Hit::Empty)
    }

    /// Position of the first sample that lands in a non-empty cell.
    pub fn find_target(&self, origin: Vec3, direction: Vec3, world: &VoxelWorld) -> Option<Vec3> {
        self.traverse(origin, direction, world, |pos, block| {
            block.is_solid().then_some(pos)
        })
    }
}
