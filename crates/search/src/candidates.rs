//! Placement enumeration over speculative board copies.
//!
//! Order is fixed and part of the contract: ties between equally scored
//! candidates go to the one enumerated first.

use srsbot_core::{Action, MoveResult};
use srsbot_engine::Board;

/// A landed board and the action that starts the path towards it.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub first_action: Action,
    pub board: Board,
}

/// Every drop reachable by sliding the active piece left or right, for the
/// current orientation and for one to three clockwise or counterclockwise
/// turns. Rotation contexts are explored in the order identity, cw 1..3,
/// ccw 1..3; inside each, drop-in-place then each left offset then each
/// right offset.
///
/// Inside a turned context the first action is the turn itself, so a plan
/// needing two or three turns only commits to the first one.
pub fn placements(board: &Board) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(7 * (1 + 2 * board.width()));
    push_shifted_drops(&mut out, board, None);
    for turn in [Action::Clockwise, Action::Counterclockwise] {
        let mut turned = board.clone();
        for _ in 0..3 {
            turned.apply(turn);
            push_shifted_drops(&mut out, &turned, Some(turn));
        }
    }
    out
}

/// Drop-in-place plus every left and right offset, orientation unchanged.
pub fn shifted_drops(board: &Board) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(1 + 2 * board.width());
    push_shifted_drops(&mut out, board, None);
    out
}

fn push_shifted_drops(out: &mut Vec<Candidate>, board: &Board, via: Option<Action>) {
    out.push(Candidate {
        first_action: via.unwrap_or(Action::Drop),
        board: board.simulate(Action::Drop),
    });
    for step in [Action::Left, Action::Right] {
        let mut shifted = board.simulate(step);
        while shifted.last_result() == Some(MoveResult::Success) {
            out.push(Candidate {
                first_action: via.unwrap_or(step),
                board: shifted.simulate(Action::Drop),
            });
            shifted.apply(step);
        }
    }
}
