//! Application framework for termvox.
//!
//! This crate provides a trait-based application framework that handles
//! common boilerplate like:
//! - Logging initialisation
//! - Terminal mode setup and restoration
//! - Per-frame input polling and the quit check
//! - Writing each frame to the terminal
//! - Frame pacing
//!
//! # Example
//!
//! ```no_run
//! use termvox_app::{run_app, AppConfig, AppContext, FrameContext, TerminalApp};
//!
//! struct MyApp;
//!
//! impl TerminalApp for MyApp {
//!     fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         Ok(MyApp)
//!     }
//!
//!     fn update(&mut self, _ctx: &AppContext) {}
//!
//!     fn render(&mut self, _ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()> {
//!         frame.text.push_str("hello\n");
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::new("my app"))
//! }
//! ```

mod app;
mod context;
mod frame;
mod runner;
mod terminal;

pub use app::TerminalApp;
pub use context::AppContext;
pub use frame::FrameContext;
pub use runner::{run_app, run_frames, AppConfig, RunStats};
pub use terminal::{MemoryOutput, StdoutOutput, TerminalOutput, TerminalSession};

// Re-export input types apps need to poll and query keys
pub use termvox_input::{
    Action, ActionMap, InputManager, KeyCode, KeySource, KeyboardState, ScriptedKeys, TerminalKeys,
};
