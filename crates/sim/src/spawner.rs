//! Piece supply and spawn placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use srsbot_core::{PieceType, Position};

/// Uniform choice over the seven types, reproducible per seed.
#[derive(Clone, Debug)]
pub struct PieceSpawner {
    rng: StdRng,
}

impl PieceSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_kind(&mut self) -> PieceType {
        PieceType::ALL[self.rng.gen_range(0..PieceType::ALL.len())]
    }
}

/// Bounding box centred on the board, bottom edge on the first row above the
/// visible play area.
pub fn spawn_position(board_width: usize, visible_height: usize, piece_width: usize) -> Position {
    Position::new(
        (board_width / 2) as i32 - (piece_width / 2) as i32,
        visible_height as i32,
    )
}
