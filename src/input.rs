//! Keyboard input boundary
//!
//! The event source (browser keydown/keyup) writes the pressed-flag set; the
//! simulation only ever reads a `TickInput` snapshot at the start of a tick.
//! Keys are matched by lowercase name; anything unrecognized is ignored.

use crate::sim::TickInput;

/// Pressed state of the four movement directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: &str, pressed: bool) {
        match key.to_lowercase().as_str() {
            "w" | "arrowup" => self.up = pressed,
            "s" | "arrowdown" => self.down = pressed,
            "a" | "arrowleft" => self.left = pressed,
            "d" | "arrowright" => self.right = pressed,
            _ => {}
        }
    }

    /// Release everything (used when the window loses focus, so keys don't
    /// stay stuck down across a pause)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_flags() {
        let mut input = InputState::new();
        input.key_down("w");
        assert!(input.snapshot().up);
        input.key_up("w");
        assert!(!input.snapshot().up);

        input.key_down("ArrowUp");
        assert!(input.snapshot().up);

        input.key_down("arrowleft");
        input.key_down("d");
        let snap = input.snapshot();
        assert!(snap.up && snap.left && snap.right && !snap.down);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let mut input = InputState::new();
        input.key_down("escape");
        input.key_down(" ");
        input.key_down("q");
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_clear_releases_all() {
        let mut input = InputState::new();
        input.key_down("w");
        input.key_down("a");
        input.clear();
        assert_eq!(input.snapshot(), TickInput::default());
    }
}
