//! `TerminalApp` trait definition.

use termvox_input::Action;

use crate::context::AppContext;
use crate::frame::FrameContext;

/// Trait for termvox applications.
///
/// The framework owns the terminal and the loop: every frame it polls input,
/// asks [`should_quit`](Self::should_quit), then calls
/// [`update`](Self::update) and [`render`](Self::render) and writes the
/// rendered text over the previous frame.
pub trait TerminalApp: Sized {
    /// Initialize the application.
    ///
    /// Called once, after the terminal has been set up.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Update application state from the current input snapshot.
    fn update(&mut self, ctx: &AppContext);

    /// Render a frame by appending terminal text to `frame.text`.
    ///
    /// The text is written starting at the top-left corner of the screen.
    fn render(&mut self, ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()>;

    /// Returns `true` to leave the loop before this frame is updated.
    ///
    /// Default implementation checks [`Action::Quit`].
    fn should_quit(&self, ctx: &AppContext) -> bool {
        ctx.input.is_action_held(Action::Quit)
    }

    /// Cleanup before shutdown.
    ///
    /// Called while the terminal is still set up. Default implementation
    /// does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
