//! Weighted-heuristic brain: lowest score over every reachable placement.

use srsbot_core::Action;
use srsbot_engine::Board;
use srsbot_eval::{evaluate, EvalWeights};

use crate::candidates::{placements, Candidate};
use crate::Brain;

/// Scores every placement of the active piece with the weighted heuristics
/// and steers towards the lowest.
#[derive(Clone, Debug, Default)]
pub struct HeuristicBrain {
    pub weights: EvalWeights,
}

impl HeuristicBrain {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, landed: &Board) -> f32 {
        evaluate(landed.grid(), landed.rows_cleared(), &self.weights)
    }

    /// Lowest-scoring candidate; the earliest enumerated one wins ties.
    pub fn find_best(&self, board: &Board) -> Option<(Candidate, f32)> {
        let mut best: Option<(Candidate, f32)> = None;
        for candidate in placements(board) {
            let score = self.score(&candidate.board);
            if best.as_ref().map_or(true, |(_, lowest)| score < *lowest) {
                best = Some((candidate, score));
            }
        }
        best
    }
}

impl Brain for HeuristicBrain {
    fn next_move(&self, board: &Board) -> Action {
        self.find_best(board)
            .map_or(Action::Drop, |(candidate, _)| candidate.first_action)
    }
}
