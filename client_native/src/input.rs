//! Keyboard input handling
//!
//! Key transitions are recorded as pressed-state, then polled once per frame
//! to build each cowboy's movement direction.

use winit::keyboard::KeyCode;

/// Held-key state for both cowboys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    left_up: bool,    // W
    left_down: bool,  // S
    right_up: bool,   // Up arrow
    right_down: bool, // Down arrow
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns false for keys we don't track.
    pub fn apply(&mut self, code: KeyCode, pressed: bool) -> bool {
        match code {
            KeyCode::KeyW => self.left_up = pressed,
            KeyCode::KeyS => self.left_down = pressed,
            KeyCode::ArrowUp => self.right_up = pressed,
            KeyCode::ArrowDown => self.right_down = pressed,
            _ => return false,
        }
        true
    }

    /// Direction for a player: -1 = down, 0 = stop, 1 = up
    pub fn dir(&self, player_id: u8) -> i8 {
        let (up, down) = if player_id == 0 {
            (self.left_up, self.left_down)
        } else {
            (self.right_up, self.right_down)
        };
        up as i8 - down as i8
    }
}
