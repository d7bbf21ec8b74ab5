//! Error types shared by the termvox libraries.

use thiserror::Error;

use crate::coords::CellPos;

/// Workspace-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cell access outside the fixed world grid
    #[error("Out of bounds: cell {0}")]
    OutOfBounds(CellPos),

    /// Edit requested on a cell that holds no block
    #[error("No block to edit at cell {0}")]
    EmptyTarget(CellPos),

    /// Screen grid too small to span a field of view
    #[error("Degenerate screen {width}x{height}: both dimensions must be at least 2")]
    DegenerateScreen { width: usize, height: usize },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
