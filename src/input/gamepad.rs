//! Gamepad support
//!
//! Native: gilrs, first connected pad wins
//! WASM: no gamepad, every query reports released

// Standard gamepad button indices (Xbox layout, Web Gamepad API numbering)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const START: u32 = 9;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Option<Self> {
            None
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick_x(&self) -> f32 {
            0.0
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        gilrs: Gilrs,
        deadzone: f32,
    }

    impl Gamepad {
        /// None if the platform gamepad backend could not start
        pub fn new() -> Option<Self> {
            match Gilrs::new() {
                Ok(gilrs) => Some(Self { gilrs, deadzone: 0.15 }),
                Err(e) => {
                    eprintln!("Input: gamepad support unavailable: {}", e);
                    None
                }
            }
        }

        pub fn poll(&mut self) {
            // Drain events so gilrs updates its cached state
            while self.gilrs.next_event().is_some() {}
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.gamepads().next().is_some()
        }

        fn get_active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            let Some(gp) = self.get_active_gamepad() else { return false };
            let b = match button {
                super::button::A => GilrsButton::South,
                super::button::START => GilrsButton::Start,
                super::button::DPAD_LEFT => GilrsButton::DPadLeft,
                super::button::DPAD_RIGHT => GilrsButton::DPadRight,
                _ => return false,
            };
            gp.is_pressed(b)
        }

        /// Left stick X with deadzone applied, -1.0 (left) to 1.0 (right)
        pub fn left_stick_x(&self) -> f32 {
            let Some(gp) = self.get_active_gamepad() else { return 0.0 };
            super::apply_deadzone(gp.value(Axis::LeftStickX), self.deadzone)
        }
    }
}

/// Zero inside the deadzone, linear rescale outside
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let len = value.abs();
    if len < deadzone {
        return 0.0;
    }
    value.signum() * (len - deadzone) / (1.0 - deadzone)
}

pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone() {
        assert_eq!(apply_deadzone(0.1, 0.15), 0.0);
        assert!((apply_deadzone(1.0, 0.15) - 1.0).abs() < 1e-6);
        assert!((apply_deadzone(-1.0, 0.15) + 1.0).abs() < 1e-6);
    }
}
