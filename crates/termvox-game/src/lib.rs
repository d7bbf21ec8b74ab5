//! Game logic for termvox.
//!
//! [`PlayerController`] moves the player from held actions and keeps them
//! standing on the ground; [`GameSession`] runs one whole frame: move, target,
//! edit, render.

pub mod player;
pub mod session;

pub use player::{Controls, ControllerConfig, PlayerController, PlayerState};
pub use session::GameSession;
