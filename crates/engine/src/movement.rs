//! Shift, fall and kicked rotation probes. Pure functions of the grid.

use srsbot_core::{Grid, Piece, PieceCatalog, Position};

use crate::collision::can_place;
use crate::kicks::get_kicks;

/// Result of a rotation attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationResult {
    pub piece: Piece,
    pub position: Position,
    /// Index into the kick row; 0 is the unkicked test.
    pub kick_index: usize,
}

/// Turn `piece` at `at`, trying each kick of the source rotation in order.
/// Returns None if every kick collides.
pub fn try_rotate(
    grid: &Grid,
    catalog: &PieceCatalog,
    piece: Piece,
    at: Position,
    clockwise: bool,
) -> Option<RotationResult> {
    let rotated = if clockwise {
        catalog.clockwise(piece)
    } else {
        catalog.counterclockwise(piece)
    };
    let shape = catalog.shape(rotated);
    get_kicks(piece.kind(), piece.rotation(), clockwise)
        .iter()
        .enumerate()
        .map(|(i, &(dx, dy))| (i, at.offset(dx as i32, dy as i32)))
        .find(|&(_, candidate)| can_place(grid, shape, candidate))
        .map(|(kick_index, position)| RotationResult {
            piece: rotated,
            position,
            kick_index,
        })
}

/// Try to move piece horizontally
pub fn try_shift(
    grid: &Grid,
    catalog: &PieceCatalog,
    piece: Piece,
    at: Position,
    dx: i32,
) -> Option<Position> {
    let moved = at.offset(dx, 0);
    can_place(grid, catalog.shape(piece), moved).then_some(moved)
}

/// Try to move piece down one row
pub fn try_fall(grid: &Grid, catalog: &PieceCatalog, piece: Piece, at: Position) -> Option<Position> {
    let moved = at.offset(0, -1);
    can_place(grid, catalog.shape(piece), moved).then_some(moved)
}
