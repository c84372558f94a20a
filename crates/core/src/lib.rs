//! srsbot core crate - piece catalog, placed-cell grid and the action vocabulary.

mod catalog;
mod grid;
mod moves;
mod piece;

pub use catalog::{CatalogError, Piece, PieceCatalog, PieceShape};
pub use grid::{Grid, GridError};
pub use moves::{Action, MoveResult, Position};
pub use piece::{PieceType, Rotation};
