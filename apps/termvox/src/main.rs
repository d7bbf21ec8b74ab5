//! termvox: a voxel world drawn in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p termvox
//! ```
//!
//! ## Controls
//!
//! - `w`/`s`/`a`/`d` or arrow keys: look up/down/left/right
//! - `i`/`k`: move forward/back
//! - `j`/`l`: strafe left/right
//! - space: place a block on the targeted face
//! - `x`: remove the targeted block
//! - `q`, `Q` or Esc: quit
//!
//! The terminal should be at least 100 columns by 40 rows.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace). Logs go to stderr,
//!   so redirect it when debugging: `RUST_LOG=debug cargo run -p termvox 2> termvox.log`

mod app;

use termvox_app::{run_app, AppConfig};

use crate::app::Explorer;

fn main() -> anyhow::Result<()> {
    run_app::<Explorer>(AppConfig::new("termvox"))
}
