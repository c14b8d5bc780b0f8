//! Input handling with gamepad support
//!
//! Keyboard (macroquad) and gamepad input are folded into one action-based
//! snapshot per frame, `FrameInput`, which is all the simulation sees.
//!
//! Native: gilrs for gamepads
//! WASM: keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{button, Gamepad};
pub use state::*;
