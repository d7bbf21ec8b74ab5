//! Main input manager combining a key source, the key snapshot and action mapping.

use crossterm::event::KeyCode;
use tracing::warn;

use crate::action::{Action, ActionMap};
use crate::keyboard::KeyboardState;
use crate::source::{KeySource, ScriptedKeys};

/// Input manager owning the key source and the per-frame snapshot.
///
/// # Usage
///
/// ```ignore
/// fn update(input: &mut InputManager) {
///     // Once, at the start of the frame
///     input.poll();
///     if input.is_action_held(Action::MoveForward) {
///         // Move forward
///     }
/// }
/// ```
pub struct InputManager {
    source: Box<dyn KeySource>,
    /// Set after the source fails; no further keys are read.
    source_failed: bool,
    keyboard: KeyboardState,
    actions: ActionMap,
}

impl std::fmt::Debug for InputManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputManager")
            .field("source_failed", &self.source_failed)
            .field("keyboard", &self.keyboard)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}

impl Default for InputManager {
    /// No keys ever, with the default bindings.
    fn default() -> Self {
        Self::new(Box::new(ScriptedKeys::default()), ActionMap::default_bindings())
    }
}

impl InputManager {
    /// Create an input manager reading from `source`.
    #[must_use]
    pub fn new(source: Box<dyn KeySource>, actions: ActionMap) -> Self {
        Self {
            source,
            source_failed: false,
            keyboard: KeyboardState::new(),
            actions,
        }
    }

    /// Take a fresh snapshot.
    ///
    /// Keys from the previous snapshot are released before the source is
    /// drained. A source that fails is logged once and never read again, so
    /// every later snapshot is empty.
    pub fn poll(&mut self) {
        self.keyboard.clear();
        if self.source_failed {
            return;
        }
        if let Err(e) = self.source.poll_keys(&mut self.keyboard) {
            warn!("Key input unavailable, continuing without keys: {e}");
            self.source_failed = true;
            self.keyboard.clear();
        }
    }

    /// Returns `true` once the key source has failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.source_failed
    }

    /// Get a reference to the keyboard snapshot.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Get a mutable reference to the action map for runtime rebinding.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// Returns `true` if the key was seen in the latest poll.
    #[must_use]
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keyboard.is_held(key)
    }

    /// Returns `true` if any key bound to the action was seen in the latest poll.
    #[must_use]
    pub fn is_action_held(&self, action: Action) -> bool {
        self.actions.is_held(action, &self.keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(frames: &[&str]) -> InputManager {
        InputManager::new(
            Box::new(ScriptedKeys::from_chars(frames)),
            ActionMap::default_bindings(),
        )
    }

    #[test]
    fn default_manager_sees_nothing() {
        let mut input = InputManager::default();
        input.poll();
        assert!(input.keyboard().is_empty());
        assert!(!input.is_action_held(Action::Quit));
    }

    #[test]
    fn keys_not_seen_in_latest_poll_are_released() {
        let mut input = scripted(&["i", "", "k"]);

        input.poll();
        assert!(input.is_key_held(KeyCode::Char('i')));
        assert!(input.is_action_held(Action::MoveForward));

        input.poll();
        assert!(!input.is_action_held(Action::MoveForward));

        input.poll();
        assert!(!input.is_key_held(KeyCode::Char('i')));
        assert!(input.is_action_held(Action::MoveBack));
    }

    #[test]
    fn rebinding_takes_effect() {
        let mut input = scripted(&["z"]);
        input.actions_mut().bind(Action::PlaceBlock, KeyCode::Char('z'));
        input.poll();
        assert!(input.is_action_held(Action::PlaceBlock));
    }

    /// Fails on its second poll after delivering a key.
    struct Flaky {
        polls: u32,
    }

    impl KeySource for Flaky {
        fn poll_keys(&mut self, keys: &mut KeyboardState) -> termvox_core::Result<()> {
            self.polls += 1;
            match self.polls {
                1 => {
                    keys.press(KeyCode::Char('i'));
                    Ok(())
                }
                2 => {
                    keys.press(KeyCode::Char('x'));
                    Err(std::io::Error::other("no tty").into())
                }
                _ => panic!("failed source polled again"),
            }
        }
    }

    #[test]
    fn failed_source_degrades_to_no_keys() {
        let mut input = InputManager::new(Box::new(Flaky { polls: 0 }), ActionMap::default_bindings());

        input.poll();
        assert!(input.is_action_held(Action::MoveForward));
        assert!(!input.is_degraded());

        input.poll();
        assert!(input.is_degraded());
        assert!(input.keyboard().is_empty());

        input.poll();
        input.poll();
        assert!(input.keyboard().is_empty());
    }
}
