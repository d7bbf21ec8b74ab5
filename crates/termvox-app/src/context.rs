//! Application context.

use std::time::Instant;

use termvox_input::InputManager;

/// Application context shared across all app methods.
#[derive(Debug)]
pub struct AppContext {
    /// Input snapshot for the current frame.
    pub input: InputManager,
    /// Total frames rendered.
    pub frame_count: u64,
    /// Time of last frame (for delta time calculation).
    pub(crate) last_frame_time: Instant,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(input: InputManager) -> Self {
        Self {
            input,
            frame_count: 0,
            last_frame_time: Instant::now(),
        }
    }
}
