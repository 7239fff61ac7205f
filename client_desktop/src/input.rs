//! Keyboard and mouse input handling

use game_core::{InputState, KeyPress};
use winit::event::{ElementState, VirtualKeyCode};

/// Handle key down event
pub fn handle_key_down(key: VirtualKeyCode, current_dir: i8) -> i8 {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => -1,
        VirtualKeyCode::Down | VirtualKeyCode::S => 1,
        _ => current_dir,
    }
}

/// Handle key up event
pub fn handle_key_up(key: VirtualKeyCode, current_dir: i8) -> i8 {
    match (key, current_dir) {
        (VirtualKeyCode::Up | VirtualKeyCode::W, -1) => 0,
        (VirtualKeyCode::Down | VirtualKeyCode::S, 1) => 0,
        _ => current_dir,
    }
}

/// Prompt keys, recognised on press only
pub fn prompt_key(key: VirtualKeyCode) -> Option<KeyPress> {
    match key {
        VirtualKeyCode::Y => Some(KeyPress::Affirm),
        VirtualKeyCode::N => Some(KeyPress::Decline),
        VirtualKeyCode::Escape => Some(KeyPress::Cancel),
        _ => None,
    }
}

/// Accumulates window events between ticks
#[derive(Debug, Default)]
pub struct InputTracker {
    paddle_dir: i8,
    pointer_y: Option<f32>,
    key: Option<KeyPress>,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.paddle_dir = handle_key_down(key, self.paddle_dir);
                if let Some(press) = prompt_key(key) {
                    // Cancel wins over anything pressed in the same tick
                    if self.key != Some(KeyPress::Cancel) {
                        self.key = Some(press);
                    }
                }
            }
            ElementState::Released => {
                self.paddle_dir = handle_key_up(key, self.paddle_dir);
            }
        }
    }

    /// Latest cursor position in court coordinates
    pub fn set_pointer(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Snapshot for the next tick. Pointer motion and key presses are
    /// consumed; held direction keys and quit persist.
    pub fn take(&mut self) -> InputState {
        InputState {
            quit: self.quit,
            pointer_y: self.pointer_y.take(),
            key: self.key.take(),
            paddle_dir: self.paddle_dir,
        }
    }
}
