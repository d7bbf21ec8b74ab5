//! Input handling for termvox.
//!
//! Input is sampled once per frame as a snapshot: every key delivered by the
//! [`KeySource`] since the previous poll counts as held for the frame, and
//! every other key counts as released.
//!
//! # Core Types
//!
//! - [`InputManager`]: Main entry point combining a key source, the snapshot and actions
//! - [`KeyboardState`]: The set of keys seen in the latest poll
//! - [`KeySource`]: Where keys come from ([`TerminalKeys`] or [`ScriptedKeys`])
//! - [`ActionMap`]: Maps [`Action`]s to keys
//!
//! # Usage
//!
//! ```ignore
//! use termvox_input::{Action, ActionMap, InputManager, TerminalKeys};
//!
//! let mut input = InputManager::new(Box::new(TerminalKeys::new()), ActionMap::default_bindings());
//!
//! // Once per frame
//! input.poll();
//! if input.is_action_held(Action::Quit) {
//!     return Ok(());
//! }
//! ```

mod action;
mod input;
mod keyboard;
mod source;

pub use action::{Action, ActionMap, ActionMapBuilder};
pub use input::InputManager;
pub use keyboard::KeyboardState;
pub use source::{KeySource, ScriptedKeys, TerminalKeys};

// Re-export crossterm's key type used throughout the bindings
pub use crossterm::event::KeyCode;
