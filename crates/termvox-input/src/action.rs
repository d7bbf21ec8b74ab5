//! Action bindings.

use crossterm::event::KeyCode;
use hashbrown::HashMap;

use crate::keyboard::KeyboardState;

/// Something the player can do in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    PlaceBlock,
    RemoveBlock,
    Quit,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::LookUp,
        Self::LookDown,
        Self::LookLeft,
        Self::LookRight,
        Self::MoveForward,
        Self::MoveBack,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::PlaceBlock,
        Self::RemoveBlock,
        Self::Quit,
    ];
}

/// Maps actions to the keys that trigger them.
///
/// An action is held when any of its keys is held.
#[derive(Debug, Default, Clone)]
pub struct ActionMap {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl ActionMap {
    /// Create an empty action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new action map with a builder pattern.
    #[must_use]
    pub fn builder() -> ActionMapBuilder {
        ActionMapBuilder::new()
    }

    /// The standard keyboard layout.
    ///
    /// `wasd` and the arrow keys look around, `ijkl` move, space places a
    /// block, `x` removes one and `q`, `Q` or Esc quit.
    #[must_use]
    pub fn default_bindings() -> Self {
        Self::builder()
            .bind_many(Action::LookUp, [KeyCode::Char('w'), KeyCode::Up])
            .bind_many(Action::LookDown, [KeyCode::Char('s'), KeyCode::Down])
            .bind_many(Action::LookLeft, [KeyCode::Char('a'), KeyCode::Left])
            .bind_many(Action::LookRight, [KeyCode::Char('d'), KeyCode::Right])
            .bind(Action::MoveForward, KeyCode::Char('i'))
            .bind(Action::MoveBack, KeyCode::Char('k'))
            .bind(Action::StrafeLeft, KeyCode::Char('j'))
            .bind(Action::StrafeRight, KeyCode::Char('l'))
            .bind(Action::PlaceBlock, KeyCode::Char(' '))
            .bind(Action::RemoveBlock, KeyCode::Char('x'))
            .bind_many(
                Action::Quit,
                [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc],
            )
            .build()
    }

    /// Add a key to an action.
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        let keys = self.bindings.entry(action).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    /// Remove a key from an action.
    pub fn unbind(&mut self, action: Action, key: KeyCode) {
        if let Some(keys) = self.bindings.get_mut(&action) {
            keys.retain(|k| *k != key);
        }
    }

    /// Get the keys bound to an action.
    #[must_use]
    pub fn get_bindings(&self, action: Action) -> Option<&[KeyCode]> {
        self.bindings.get(&action).map(Vec::as_slice)
    }

    /// Returns `true` if any key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: Action, keyboard: &KeyboardState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|&k| keyboard.is_held(k)))
    }
}

/// Builder for creating an action map with a fluent API.
#[derive(Debug, Default)]
pub struct ActionMapBuilder {
    actions: ActionMap,
}

impl ActionMapBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key to an action.
    #[must_use]
    pub fn bind(mut self, action: Action, key: KeyCode) -> Self {
        self.actions.bind(action, key);
        self
    }

    /// Add several keys to an action.
    #[must_use]
    pub fn bind_many(mut self, action: Action, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        for key in keys {
            self.actions.bind(action, key);
        }
        self
    }

    /// Build the action map.
    #[must_use]
    pub fn build(self) -> ActionMap {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_merges_bindings() {
        let actions = ActionMap::builder()
            .bind(Action::MoveForward, KeyCode::Char('i'))
            .bind(Action::MoveForward, KeyCode::Up)
            .bind(Action::MoveForward, KeyCode::Up)
            .bind(Action::Quit, KeyCode::Esc)
            .build();

        assert_eq!(actions.get_bindings(Action::MoveForward).unwrap().len(), 2);
        assert_eq!(actions.get_bindings(Action::Quit).unwrap(), &[KeyCode::Esc]);
        assert!(actions.get_bindings(Action::PlaceBlock).is_none());
    }

    #[test]
    fn unbind() {
        let mut actions = ActionMap::new();
        actions.bind(Action::LookUp, KeyCode::Char('w'));
        actions.bind(Action::LookUp, KeyCode::Up);

        actions.unbind(Action::LookUp, KeyCode::Char('w'));
        assert_eq!(actions.get_bindings(Action::LookUp).unwrap(), &[KeyCode::Up]);
    }

    #[test]
    fn default_bindings_cover_every_action() {
        let actions = ActionMap::default_bindings();
        for action in Action::ALL {
            assert!(
                actions.get_bindings(action).is_some_and(|k| !k.is_empty()),
                "{action:?} has no key"
            );
        }
    }

    #[test]
    fn any_bound_key_holds_the_action() {
        let actions = ActionMap::default_bindings();
        let mut keyboard = KeyboardState::new();
        assert!(!actions.is_held(Action::Quit, &keyboard));

        keyboard.press(KeyCode::Char('Q'));
        assert!(actions.is_held(Action::Quit, &keyboard));

        keyboard.clear();
        keyboard.press(KeyCode::Left);
        assert!(actions.is_held(Action::LookLeft, &keyboard));
        assert!(!actions.is_held(Action::LookRight, &keyboard));
    }

    #[test]
    fn space_places_and_x_removes() {
        let actions = ActionMap::default_bindings();
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::Char(' '));
        keyboard.press(KeyCode::Char('x'));
        assert!(actions.is_held(Action::PlaceBlock, &keyboard));
        assert!(actions.is_held(Action::RemoveBlock, &keyboard));
    }
}
