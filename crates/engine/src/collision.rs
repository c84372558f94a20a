//! collision detection - walls, floor, placed cells

use srsbot_core::{Grid, PieceShape, Position};

/// does the shape overlap a wall, the floor, the ceiling or a placed cell?
#[inline]
pub fn collides(grid: &Grid, shape: &PieceShape, at: Position) -> bool {
    shape
        .body()
        .iter()
        .any(|&(dx, dy)| grid.is_blocked(at.x + dx as i32, at.y + dy as i32))
}

/// can we place here? (just !collides)
#[inline]
pub fn can_place(grid: &Grid, shape: &PieceShape, at: Position) -> bool {
    !collides(grid, shape, at)
}

/// Lowest anchor y reachable by falling straight down from `at`.
/// `at` itself must be free.
pub fn hard_drop_y(grid: &Grid, shape: &PieceShape, at: Position) -> i32 {
    let mut landing = at;
    while can_place(grid, shape, landing.offset(0, -1)) {
        landing = landing.offset(0, -1);
    }
    landing.y
}
