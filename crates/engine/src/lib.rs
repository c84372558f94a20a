//! srsbot-engine - SRS kicks, collision probes and the board state machine.

pub mod board;
pub mod collision;
pub mod kicks;
pub mod movement;

pub use board::{ActivePiece, Board, SpawnError};
pub use collision::{can_place, collides, hard_drop_y};
pub use kicks::get_kicks;
pub use movement::{try_fall, try_rotate, try_shift, RotationResult};
