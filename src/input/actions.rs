//! Game action definitions

/// Everything the player can ask for
///
/// Keyboard / gamepad mapping:
/// - A, Left arrow / D-pad left, left stick = MoveLeft
/// - D, Right arrow / D-pad right, left stick = MoveRight
/// - Space / South (A/X) = Jump
/// - Escape / Start = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,

    // Edge-triggered
    Jump,

    // System
    Quit,
}
