//! Flat row-major 2D storage for per-screen-cell data.

use glam::Vec3;
use termvox_core::{Error, Result};

/// Fixed-size row-major grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Characters produced by one frame of ray casting.
pub type FrameBuffer = Grid2<char>;

/// Unit view direction per screen cell.
pub type DirectionField = Grid2<Vec3>;

impl<T: Clone> Grid2<T> {
    /// Create a grid filled with `fill`.
    ///
    /// Both dimensions must be at least 2 so that a field of view can span
    /// from the first to the last row and column.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::DegenerateScreen { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }
}

impl<T> Grid2<T> {
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at column `x`, row `y`.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    /// Mutable rows from top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.cells.chunks_exact_mut(self.width)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl FrameBuffer {
    /// Row `y` as a string.
    pub fn row_string(&self, y: usize) -> Option<String> {
        self.rows().nth(y).map(|row| row.iter().collect())
    }
}
