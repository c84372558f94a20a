//! Board actions, their results and board coordinates.

use serde::{Deserialize, Serialize};

/// A discrete input applied to the active piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Shift one column left. Never places the piece.
    Left,
    /// Shift one column right. Never places the piece.
    Right,
    /// Fall one row, or place the piece where it is if it cannot.
    Down,
    /// Fall as far as possible and place.
    Drop,
    Clockwise,
    Counterclockwise,
    Nothing,
    /// No hold slot exists; behaves like [`Action::Nothing`].
    Hold,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Left,
        Action::Right,
        Action::Down,
        Action::Drop,
        Action::Clockwise,
        Action::Counterclockwise,
        Action::Nothing,
        Action::Hold,
    ];
}

/// Outcome of applying an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    Success,
    /// The move would leave the board or overlap the stack; nothing changed.
    OutBounds,
    /// There is no active piece.
    NoPiece,
    /// A `Down` placed the piece.
    Place,
}

/// Board coordinate. Origin is the bottom-left cell, x grows rightward and
/// y grows upward.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
