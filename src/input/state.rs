//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad input once per frame and folds
//! them into a `FrameInput` snapshot.

use macroquad::prelude::*;
use super::{button, Action, Gamepad};

/// Stick deflection that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// What the simulation reads each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    /// True only on the frame jump went from released to held
    pub jump_pressed: bool,
}

/// Turns a held/released level into a press edge
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    was_down: bool,
}

impl ButtonEdge {
    /// Feed the current level; true on the released -> held transition
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }
}

/// Unified keyboard + gamepad input
pub struct InputState {
    gamepad: Option<Gamepad>,
    gamepad_jump: ButtonEdge,
    gamepad_quit: ButtonEdge,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            gamepad_jump: ButtonEdge::default(),
            gamepad_quit: ButtonEdge::default(),
        }
    }

    /// Call once per frame, before the simulation step
    pub fn poll(&mut self) -> FrameInput {
        if let Some(gp) = self.gamepad.as_mut() {
            gp.poll();
        }
        let jump_down = self.gamepad_down(Action::Jump);
        let gamepad_jump = self.gamepad_jump.update(jump_down);

        FrameInput {
            move_left: self.action_down(Action::MoveLeft),
            move_right: self.action_down(Action::MoveRight),
            jump_pressed: self.keyboard_pressed(Action::Jump) || gamepad_jump,
        }
    }

    /// Escape or Start; edge-triggered for the gamepad
    pub fn quit_requested(&mut self) -> bool {
        let start_down = self.gamepad_down(Action::Quit);
        let start = self.gamepad_quit.update(start_down);
        self.keyboard_pressed(Action::Quit) || start
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Jump => is_key_down(KeyCode::Space),
            Action::Quit => is_key_down(KeyCode::Escape),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Quit => is_key_pressed(KeyCode::Escape),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let Some(gp) = self.gamepad.as_ref() else { return false };
        if !gp.has_gamepad() {
            return false;
        }

        match action {
            Action::MoveLeft => {
                gp.is_button_down(button::DPAD_LEFT) || gp.left_stick_x() < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                gp.is_button_down(button::DPAD_RIGHT) || gp.left_stick_x() > STICK_THRESHOLD
            }
            Action::Jump => gp.is_button_down(button::A),
            Action::Quit => gp.is_button_down(button::START),
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.as_ref().is_some_and(|gp| gp.has_gamepad())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut edge = ButtonEdge::default();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        // Held: no repeat
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_frame_input_default_is_idle() {
        let input = FrameInput::default();
        assert!(!input.move_left && !input.move_right && !input.jump_pressed);
    }
}
