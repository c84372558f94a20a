//! srsbot search crate - move selection for the active piece.
//!
//! A [`Brain`] looks at a board and names the single next action. It is
//! called again after every action, so a multi-step plan is re-derived
//! each tick rather than committed to.

mod baseline;
mod candidates;
mod heuristic;

pub use baseline::BaselineBrain;
pub use candidates::{placements, shifted_drops, Candidate};
pub use heuristic::HeuristicBrain;

use srsbot_core::Action;
use srsbot_engine::Board;

pub trait Brain {
    /// Next action for `board`. Must not mutate it and must be deterministic.
    fn next_move(&self, board: &Board) -> Action;
}

impl<B: Brain + ?Sized> Brain for &B {
    fn next_move(&self, board: &Board) -> Action {
        (**self).next_move(board)
    }
}

impl<B: Brain + ?Sized> Brain for Box<B> {
    fn next_move(&self, board: &Board) -> Action {
        (**self).next_move(board)
    }
}
