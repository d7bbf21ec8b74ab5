//! Keyboard snapshot.

use crossterm::event::KeyCode;
use hashbrown::HashSet;

/// Keys seen during the most recent poll.
///
/// Terminals report key presses but not releases, so a key is "held" for
/// exactly the frames in which the source delivered it.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key as held for this frame.
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    /// Returns `true` if the key was seen in the latest poll.
    #[must_use]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` if no key was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Keys held this frame, in no particular order.
    pub fn held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_clear() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert!(!keyboard.is_held(KeyCode::Char('w')));

        keyboard.press(KeyCode::Char('w'));
        keyboard.press(KeyCode::Up);
        keyboard.press(KeyCode::Char('w'));
        assert!(keyboard.is_held(KeyCode::Char('w')));
        assert!(keyboard.is_held(KeyCode::Up));
        assert_eq!(keyboard.held().count(), 2);

        keyboard.clear();
        assert!(keyboard.is_empty());
        assert!(!keyboard.is_held(KeyCode::Up));
    }

    #[test]
    fn chars_are_case_sensitive() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::Char('Q'));
        assert!(keyboard.is_held(KeyCode::Char('Q')));
        assert!(!keyboard.is_held(KeyCode::Char('q')));
    }
}
