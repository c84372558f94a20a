//! Board state machine: placed grid plus an optional active piece.
//!
//! All transitions go through [`Board::apply`] (or [`Board::next_piece`]).
//! [`Board::simulate`] applies an action to a deep copy, leaving the receiver
//! untouched, which is what move search is built on.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use srsbot_core::{Action, Grid, MoveResult, Piece, PieceCatalog, PieceType, Position};
use thiserror::Error;

use crate::collision::{can_place, collides, hard_drop_y};
use crate::movement::{try_fall, try_rotate, try_shift};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("{piece:?} collides at ({}, {})", .position.x, .position.y)]
    Collision { piece: Piece, position: Position },
}

/// The falling piece and the lower-left corner of its bounding box.
/// The anchor may sit outside the grid; the body never does.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct Board {
    catalog: Arc<PieceCatalog>,
    grid: Grid,
    active: Option<ActivePiece>,
    last_action: Option<Action>,
    last_result: Option<MoveResult>,
    rows_cleared: usize,
}

impl Board {
    pub fn new(width: usize, height: usize, catalog: Arc<PieceCatalog>) -> Self {
        Self::with_grid(Grid::new(width, height), catalog)
    }

    /// Board over an existing grid with no active piece. Full rows in `grid`
    /// are removed here, before any piece can be spawned against them.
    pub fn with_grid(mut grid: Grid, catalog: Arc<PieceCatalog>) -> Self {
        grid.clear_lines();
        Self {
            catalog,
            grid,
            active: None,
            last_action: None,
            last_result: None,
            rows_cleared: 0,
        }
    }

    pub fn catalog(&self) -> &Arc<PieceCatalog> {
        &self.catalog
    }

    /// Read-only view of the placed cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn max_height(&self) -> usize {
        self.grid.max_height()
    }

    pub fn column_height(&self, x: usize) -> usize {
        self.grid.column_height(x)
    }

    pub fn row_width(&self, y: usize) -> usize {
        self.grid.row_width(y)
    }

    /// Placed piece at `(x, y)`, ignoring the active piece.
    pub fn cell(&self, x: i32, y: i32) -> Option<PieceType> {
        self.grid.get(x, y)
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.active.map(|a| a.piece)
    }

    pub fn current_position(&self) -> Option<Position> {
        self.active.map(|a| a.position)
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn last_result(&self) -> Option<MoveResult> {
        self.last_result
    }

    /// Rows removed by the most recent [`Board::apply`] alone.
    pub fn rows_cleared(&self) -> usize {
        self.rows_cleared
    }

    /// Installs `piece` with its bounding box anchored at `position`.
    pub fn next_piece(&mut self, piece: Piece, position: Position) -> Result<(), SpawnError> {
        if collides(&self.grid, self.catalog.shape(piece), position) {
            return Err(SpawnError::Collision { piece, position });
        }
        self.active = Some(ActivePiece { piece, position });
        Ok(())
    }

    /// Anchor y at which `piece` would rest if dropped with its bounding box's
    /// left edge on column `x`. Columns outside the grid count as empty;
    /// empty skirt entries never bind.
    pub fn drop_height(&self, piece: Piece, x: i32) -> i32 {
        let shape = self.catalog.shape(piece);
        shape
            .skirt()
            .iter()
            .enumerate()
            .filter_map(|(i, lowest)| {
                let lowest = (*lowest)? as i32;
                let column = x + i as i32;
                let height = if column >= 0 && (column as usize) < self.grid.width() {
                    self.grid.column_height(column as usize) as i32
                } else {
                    0
                };
                Some(height - lowest)
            })
            .max()
            .unwrap_or(0)
    }

    /// Applies one action. Line clearing and cache refresh run after every
    /// call, whichever branch was taken.
    pub fn apply(&mut self, action: Action) -> MoveResult {
        let result = match self.active {
            None => MoveResult::NoPiece,
            Some(active) => self.apply_to(active, action),
        };
        self.rows_cleared = self.grid.clear_lines();
        self.last_action = Some(action);
        self.last_result = Some(result);
        result
    }

    /// Deep copy with `action` applied; `self` is never touched.
    pub fn simulate(&self, action: Action) -> Board {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    fn apply_to(&mut self, active: ActivePiece, action: Action) -> MoveResult {
        let ActivePiece { piece, position } = active;
        match action {
            Action::Left | Action::Right => {
                let dx = if action == Action::Left { -1 } else { 1 };
                match try_shift(&self.grid, &self.catalog, piece, position, dx) {
                    Some(moved) => {
                        self.set_position(moved);
                        MoveResult::Success
                    }
                    None => MoveResult::OutBounds,
                }
            }
            Action::Down => match try_fall(&self.grid, &self.catalog, piece, position) {
                Some(moved) => {
                    self.set_position(moved);
                    MoveResult::Success
                }
                None => {
                    self.place(piece, position);
                    MoveResult::Place
                }
            },
            Action::Drop => {
                let shape = self.catalog.shape(piece);
                debug_assert!(can_place(&self.grid, shape, position));
                let landing = Position::new(position.x, hard_drop_y(&self.grid, shape, position));
                self.place(piece, landing);
                MoveResult::Success
            }
            Action::Clockwise | Action::Counterclockwise => {
                let clockwise = action == Action::Clockwise;
                match try_rotate(&self.grid, &self.catalog, piece, position, clockwise) {
                    Some(turned) => {
                        self.active = Some(ActivePiece {
                            piece: turned.piece,
                            position: turned.position,
                        });
                        MoveResult::Success
                    }
                    None => MoveResult::OutBounds,
                }
            }
            Action::Nothing | Action::Hold => MoveResult::Success,
        }
    }

    fn set_position(&mut self, position: Position) {
        if let Some(active) = self.active.as_mut() {
            active.position = position;
        }
    }

    /// Merges the piece into the grid and clears the active slot.
    fn place(&mut self, piece: Piece, at: Position) {
        let kind = piece.kind();
        for &(dx, dy) in self.catalog.shape(piece).body() {
            let x = at.x + dx as i32;
            let y = at.y + dy as i32;
            if self.grid.in_bounds(x, y) {
                self.grid.set(x as usize, y as usize, kind);
            }
        }
        self.grid.refresh();
        self.active = None;
    }
}

/// Semantic equality: active piece, its anchor and the placed cells.
/// The last action, last result and cleared-row count are ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active && self.grid == other.grid
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active_cells: Vec<(i32, i32)> = match self.active {
            Some(ActivePiece { piece, position }) => self
                .catalog
                .shape(piece)
                .body()
                .iter()
                .map(|&(dx, dy)| (position.x + dx as i32, position.y + dy as i32))
                .collect(),
            None => Vec::new(),
        };
        for y in (0..self.grid.height() as i32).rev() {
            for x in 0..self.grid.width() as i32 {
                let c = if active_cells.contains(&(x, y)) {
                    '@'
                } else {
                    self.grid.get(x, y).map_or('.', PieceType::letter)
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srsbot_core::Rotation;

    fn catalog() -> Arc<PieceCatalog> {
        Arc::new(PieceCatalog::new().unwrap())
    }

    fn spawned(kind: PieceType, at: Position) -> Board {
        let mut board = Board::new(10, 24, catalog());
        board.next_piece(Piece::spawn(kind), at).unwrap();
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(10, 24, catalog());
        assert_eq!(board.max_height(), 0);
        assert!(board.current_piece().is_none());
        assert!(board.current_position().is_none());
        assert_eq!(board.last_action(), None);
        assert_eq!(board.rows_cleared(), 0);
    }

    #[test]
    fn test_no_piece_for_every_action() {
        for action in Action::ALL {
            let mut board = Board::new(10, 24, catalog());
            assert_eq!(board.apply(action), MoveResult::NoPiece);
            assert_eq!(board.last_action(), Some(action));
            assert_eq!(board.last_result(), Some(MoveResult::NoPiece));
        }
    }

    #[test]
    fn test_spawn_collision_leaves_board_alone() {
        let grid = Grid::parse(&["....", "....", "..T.", "...."]).unwrap();
        let mut board = Board::with_grid(grid, catalog());
        let before = board.clone();
        let err = board
            .next_piece(Piece::spawn(PieceType::O), Position::new(2, 1))
            .unwrap_err();
        assert_eq!(
            err,
            SpawnError::Collision {
                piece: Piece::spawn(PieceType::O),
                position: Position::new(2, 1),
            }
        );
        assert_eq!(board, before);
        assert!(board.current_piece().is_none());
    }

    #[test]
    fn test_spawn_out_of_bounds_rejected() {
        let mut board = Board::new(10, 24, catalog());
        let result = board.next_piece(Piece::spawn(PieceType::I), Position::new(7, 20));
        assert!(result.is_err());
    }

    #[test]
    fn test_shift_left_and_right() {
        let mut board = spawned(PieceType::T, Position::new(4, 20));
        assert_eq!(board.apply(Action::Left), MoveResult::Success);
        assert_eq!(board.current_position(), Some(Position::new(3, 20)));
        assert_eq!(board.apply(Action::Right), MoveResult::Success);
        assert_eq!(board.apply(Action::Right), MoveResult::Success);
        assert_eq!(board.current_position(), Some(Position::new(5, 20)));
    }

    #[test]
    fn test_shift_into_wall_is_out_bounds() {
        let mut board = spawned(PieceType::O, Position::new(0, 20));
        let before = board.clone();
        assert_eq!(board.apply(Action::Left), MoveResult::OutBounds);
        assert_eq!(board, before);
    }

    #[test]
    fn test_down_then_place() {
        let mut board = spawned(PieceType::O, Position::new(0, 1));
        assert_eq!(board.apply(Action::Down), MoveResult::Success);
        assert_eq!(board.current_position(), Some(Position::new(0, 0)));
        assert_eq!(board.apply(Action::Down), MoveResult::Place);
        assert!(board.current_piece().is_none());
        assert_eq!(board.cell(0, 0), Some(PieceType::O));
        assert_eq!(board.cell(1, 1), Some(PieceType::O));
        assert_eq!(board.column_height(0), 2);
        assert_eq!(board.row_width(0), 2);
        assert_eq!(board.apply(Action::Down), MoveResult::NoPiece);
    }

    #[test]
    fn test_drop_places_and_reports_success() {
        let mut board = spawned(PieceType::I, Position::new(3, 20));
        assert_eq!(board.apply(Action::Drop), MoveResult::Success);
        assert!(board.current_piece().is_none());
        for x in 3..7 {
            assert_eq!(board.cell(x, 0), Some(PieceType::I));
        }
        assert_eq!(board.max_height(), 1);
        assert_eq!(board.row_width(0), 4);
    }

    #[test]
    fn test_grid_never_shows_active_piece() {
        let board = spawned(PieceType::T, Position::new(4, 20));
        for y in 0..24 {
            for x in 0..10 {
                assert_eq!(board.cell(x, y), None);
            }
        }
        assert_eq!(board.max_height(), 0);
    }

    #[test]
    fn test_rotation_without_kick() {
        let mut board = spawned(PieceType::T, Position::new(4, 10));
        assert_eq!(board.apply(Action::Clockwise), MoveResult::Success);
        let piece = board.current_piece().unwrap();
        assert_eq!(piece.rotation(), Rotation::East);
        assert_eq!(board.current_position(), Some(Position::new(4, 10)));
        assert_eq!(board.apply(Action::Counterclockwise), MoveResult::Success);
        assert_eq!(board.current_piece(), Some(Piece::spawn(PieceType::T)));
    }

    #[test]
    fn test_nothing_and_hold_are_no_ops() {
        let mut board = spawned(PieceType::S, Position::new(4, 10));
        let before = board.clone();
        assert_eq!(board.apply(Action::Nothing), MoveResult::Success);
        assert_eq!(board.apply(Action::Hold), MoveResult::Success);
        assert_eq!(board, before);
    }

    #[test]
    fn test_equality_ignores_history() {
        let a = spawned(PieceType::T, Position::new(4, 10));
        let mut b = a.clone();
        assert_eq!(b.apply(Action::Nothing), MoveResult::Success);
        assert_ne!(a.last_action(), b.last_action());
        assert_eq!(a, b);
        b.apply(Action::Left);
        assert_ne!(a, b);
    }

    #[test]
    fn test_simulate_leaves_receiver() {
        let board = spawned(PieceType::L, Position::new(4, 20));
        let before = board.clone();
        for action in Action::ALL {
            let next = board.simulate(action);
            assert_eq!(next.last_action(), Some(action));
            assert_eq!(board, before);
            assert_eq!(board.last_action(), None);
        }
        let dropped = board.simulate(Action::Drop);
        assert!(dropped.current_piece().is_none());
        assert!(board.current_piece().is_some());
    }

    #[test]
    fn test_drop_height_empty_board() {
        let board = Board::new(10, 24, catalog());
        let c = board.catalog().clone();
        let i = Piece::spawn(PieceType::I);
        // spawn I body sits on relative row 2
        assert_eq!(board.drop_height(i, 0), -2);
        assert_eq!(board.drop_height(c.clockwise(i), -2), 0);
        assert_eq!(board.drop_height(Piece::spawn(PieceType::O), 8), 0);
    }

    #[test]
    fn test_display_draws_active_piece() {
        let grid = Grid::parse(&["....", "....", "....", "OO.."]).unwrap();
        let mut board = Board::with_grid(grid, catalog());
        board
            .next_piece(Piece::spawn(PieceType::O), Position::new(2, 2))
            .unwrap();
        assert_eq!(board.to_string(), "..@@\n..@@\n....\nOO..\n");
    }
}
