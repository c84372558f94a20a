//! Piece types, rotation states and their SRS spawn geometry.

use serde::{Deserialize, Serialize};

/// The seven tetrominoes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// Stick.
    I,
    /// Square.
    O,
    T,
    /// Left-facing L.
    J,
    /// Right-facing L.
    L,
    /// Right dog.
    S,
    /// Left dog.
    Z,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotation index: 0 is spawn, each clockwise quarter turn adds one.
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::O,
        PieceType::T,
        PieceType::J,
        PieceType::L,
        PieceType::S,
        PieceType::Z,
    ];

    pub fn index(self) -> usize {
        match self {
            PieceType::I => 0,
            PieceType::O => 1,
            PieceType::T => 2,
            PieceType::J => 3,
            PieceType::L => 4,
            PieceType::S => 5,
            PieceType::Z => 6,
        }
    }

    /// Cells of the spawn orientation, relative to the lower-left corner of
    /// the SRS bounding box.
    pub fn spawn_body(self) -> [(i8, i8); 4] {
        match self {
            PieceType::I => [(0, 2), (1, 2), (2, 2), (3, 2)],
            PieceType::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            PieceType::T => [(0, 1), (1, 1), (2, 1), (1, 2)],
            PieceType::J => [(0, 1), (1, 1), (2, 1), (0, 2)],
            PieceType::L => [(0, 1), (1, 1), (2, 1), (2, 2)],
            PieceType::S => [(0, 1), (1, 1), (1, 2), (2, 2)],
            PieceType::Z => [(0, 2), (1, 2), (1, 1), (2, 1)],
        }
    }

    /// (width, height) of the SRS bounding box. Square for every type.
    pub fn bounding_box(self) -> (u8, u8) {
        match self {
            PieceType::I => (4, 4),
            PieceType::O => (2, 2),
            _ => (3, 3),
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceType::I => 'I',
            PieceType::O => 'O',
            PieceType::T => 'T',
            PieceType::J => 'J',
            PieceType::L => 'L',
            PieceType::S => 'S',
            PieceType::Z => 'Z',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        PieceType::ALL.into_iter().find(|kind| kind.letter() == c)
    }
}
