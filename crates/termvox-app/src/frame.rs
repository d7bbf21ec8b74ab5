//! Per-frame context for rendering.

/// Context for the frame being rendered.
#[derive(Debug, Default)]
pub struct FrameContext {
    /// Terminal text for this frame, reused across frames.
    pub text: String,
    /// Delta time since last frame in seconds.
    pub dt: f32,
    /// Current frame number.
    pub frame_number: u64,
}

impl FrameContext {
    /// Clear the text and move on to frame `frame_number`.
    pub(crate) fn begin(&mut self, frame_number: u64, dt: f32) {
        self.text.clear();
        self.frame_number = frame_number;
        self.dt = dt;
    }
}
