//! Rotation-free baseline brain.

use srsbot_core::Action;
use srsbot_engine::Board;
use srsbot_eval::baseline_score;

use crate::candidates::shifted_drops;
use crate::Brain;

/// Ignores rotation and keeps the stack low: maximises `100 - 5 * max height`
/// over the drops reachable by sliding.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineBrain;

impl Brain for BaselineBrain {
    fn next_move(&self, board: &Board) -> Action {
        let mut best = f32::NEG_INFINITY;
        let mut action = Action::Drop;
        for candidate in shifted_drops(board) {
            let score = baseline_score(candidate.board.grid());
            if score > best {
                best = score;
                action = candidate.first_action;
            }
        }
        action
    }
}
