//! Key sources.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use termvox_core::Result;
use tracing::trace;

use crate::keyboard::KeyboardState;

/// Delivers the keys pressed since the previous poll.
pub trait KeySource {
    /// Add every key seen since the last call to `keys`. Must not block.
    fn poll_keys(&mut self, keys: &mut KeyboardState) -> Result<()>;
}

/// Reads key events from the terminal.
///
/// Expects raw mode to be enabled so keys arrive without waiting for Enter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl TerminalKeys {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_keys(&mut self, keys: &mut KeyboardState) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                // Release events only appear with keyboard enhancement enabled.
                if kind != KeyEventKind::Release {
                    trace!(?code, "key");
                    keys.press(code);
                }
            }
        }
        Ok(())
    }
}

/// Replays pre-recorded frames of keys, one frame per poll.
///
/// Once the script is exhausted every poll delivers nothing.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    frames: VecDeque<Vec<KeyCode>>,
}

impl ScriptedKeys {
    /// Create a script from frames of keys.
    pub fn new<F>(frames: impl IntoIterator<Item = F>) -> Self
    where
        F: IntoIterator<Item = KeyCode>,
    {
        Self {
            frames: frames
                .into_iter()
                .map(|frame| frame.into_iter().collect())
                .collect(),
        }
    }

    /// Create a script where each string lists the characters typed in one frame.
    #[must_use]
    pub fn from_chars(frames: &[&str]) -> Self {
        Self::new(frames.iter().map(|f| f.chars().map(KeyCode::Char)))
    }

    /// Append a frame to the end of the script.
    pub fn push_frame(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.frames.push_back(keys.into_iter().collect());
    }

    /// Number of frames not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_keys(&mut self, keys: &mut KeyboardState) -> Result<()> {
        if let Some(frame) = self.frames.pop_front() {
            for key in frame {
                keys.press(key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_frames_are_delivered_in_order() {
        let mut source = ScriptedKeys::from_chars(&["wa", "", "q"]);
        let mut keys = KeyboardState::new();
        assert_eq!(source.remaining(), 3);

        source.poll_keys(&mut keys).unwrap();
        assert!(keys.is_held(KeyCode::Char('w')));
        assert!(keys.is_held(KeyCode::Char('a')));

        keys.clear();
        source.poll_keys(&mut keys).unwrap();
        assert!(keys.is_empty());

        source.poll_keys(&mut keys).unwrap();
        assert!(keys.is_held(KeyCode::Char('q')));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn exhausted_script_delivers_nothing() {
        let mut source = ScriptedKeys::default();
        source.push_frame([KeyCode::Esc]);

        let mut keys = KeyboardState::new();
        source.poll_keys(&mut keys).unwrap();
        keys.clear();
        source.poll_keys(&mut keys).unwrap();
        source.poll_keys(&mut keys).unwrap();
        assert!(keys.is_empty());
    }
}
