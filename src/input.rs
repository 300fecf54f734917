use crate::vector::Vector2;

/// Logical actions asserted during one frame, independent of the device
/// that produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputActions {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub reverse: bool,
    pub thrust: bool,
    /// Fire along the current heading.
    pub fire: bool,
    /// Turn to face this screen point, then fire.
    pub fire_at: Option<Vector2>,
    pub hyperjump: bool,
    /// Leave the title or game-over screen.
    pub start: bool,
}

impl InputActions {
    pub fn idle() -> Self {
        Self::default()
    }
}
