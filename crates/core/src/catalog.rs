//! Precomputed rotation catalog: 7 types x 4 rotations = 28 immutable shapes.
//!
//! Built once by [`PieceCatalog::new`] and shared (usually behind an `Arc`) by
//! every board and brain. Neighbour lookups are plain indices into the arena.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PieceType, Rotation};

const SHAPE_COUNT: usize = 28;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("four clockwise turns of {kind:?} do not return to its spawn body")]
    OpenRotationCycle { kind: PieceType },
}

/// A piece in one rotation state. Cheap handle; geometry lives in the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceType,
    rotation: Rotation,
}

impl Piece {
    pub fn new(kind: PieceType, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }

    /// Spawn orientation (rotation index 0).
    pub fn spawn(kind: PieceType) -> Self {
        Self::new(kind, Rotation::North)
    }

    pub fn kind(self) -> PieceType {
        self.kind
    }

    pub fn rotation(self) -> Rotation {
        self.rotation
    }

    #[inline]
    fn slot(self) -> usize {
        self.kind.index() * 4 + self.rotation.index()
    }
}

/// Geometry of one (type, rotation) record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceShape {
    piece: Piece,
    body: [(i8, i8); 4],
    width: u8,
    height: u8,
    skirt: [Option<i8>; 4],
    cw: usize,
    ccw: usize,
}

impl PieceShape {
    fn new(piece: Piece, body: [(i8, i8); 4], width: u8, height: u8) -> Self {
        let slot = piece.slot();
        let base = slot - piece.rotation.index();
        Self {
            piece,
            body,
            width,
            height,
            skirt: compute_skirt(&body),
            cw: base + (piece.rotation.index() + 1) % 4,
            ccw: base + (piece.rotation.index() + 3) % 4,
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Cells relative to the lower-left corner of the bounding box.
    pub fn body(&self) -> &[(i8, i8); 4] {
        &self.body
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Lowest body row per relative column; `None` where the column is empty.
    pub fn skirt(&self) -> &[Option<i8>] {
        &self.skirt[..self.width as usize]
    }
}

/// Arena of all 28 rotation records, indexed by `(type, rotation)`.
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    shapes: Vec<PieceShape>,
}

impl PieceCatalog {
    /// Derives rotations 1..=3 from each spawn body by quarter turns, then
    /// checks that a fourth turn closes the cycle.
    pub fn new() -> Result<Self, CatalogError> {
        let mut shapes = Vec::with_capacity(SHAPE_COUNT);
        for kind in PieceType::ALL {
            let (width, height) = kind.bounding_box();
            let spawn = kind.spawn_body();
            let mut body = spawn;
            for rotation in Rotation::ALL {
                shapes.push(PieceShape::new(
                    Piece::new(kind, rotation),
                    body,
                    width,
                    height,
                ));
                body = rotate_cw(&body, width);
            }
            if !same_cells(&body, &spawn) {
                return Err(CatalogError::OpenRotationCycle { kind });
            }
        }
        Ok(Self { shapes })
    }

    #[inline]
    pub fn shape(&self, piece: Piece) -> &PieceShape {
        &self.shapes[piece.slot()]
    }

    #[inline]
    pub fn clockwise(&self, piece: Piece) -> Piece {
        self.shapes[self.shape(piece).cw].piece
    }

    #[inline]
    pub fn counterclockwise(&self, piece: Piece) -> Piece {
        self.shapes[self.shape(piece).ccw].piece
    }

    pub fn shapes(&self) -> impl Iterator<Item = &PieceShape> {
        self.shapes.iter()
    }
}

/// Quarter turn clockwise inside a square box of side `width`.
fn rotate_cw(body: &[(i8, i8); 4], width: u8) -> [(i8, i8); 4] {
    let w = width as i8;
    body.map(|(x, y)| (y, w - 1 - x))
}

fn compute_skirt(body: &[(i8, i8); 4]) -> [Option<i8>; 4] {
    let mut skirt: [Option<i8>; 4] = [None; 4];
    for &(x, y) in body {
        let column = &mut skirt[x as usize];
        *column = Some(match *column {
            Some(lowest) => lowest.min(y),
            None => y,
        });
    }
    skirt
}

fn same_cells(a: &[(i8, i8); 4], b: &[(i8, i8); 4]) -> bool {
    let mut a = *a;
    let mut b = *b;
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PieceCatalog {
        PieceCatalog::new().expect("catalog builds")
    }

    fn nth_cw(catalog: &PieceCatalog, kind: PieceType, turns: usize) -> Piece {
        (0..turns).fold(Piece::spawn(kind), |p, _| catalog.clockwise(p))
    }

    fn sorted(body: &[(i8, i8); 4]) -> [(i8, i8); 4] {
        let mut body = *body;
        body.sort_unstable();
        body
    }

    const E: Option<i8> = None;

    // (type, rotation, body, skirt) for every record.
    #[rustfmt::skip]
    fn table() -> Vec<(PieceType, usize, [(i8, i8); 4], Vec<Option<i8>>)> {
        use PieceType::*;
        vec![
            (O, 0, [(0, 0), (0, 1), (1, 0), (1, 1)], vec![Some(0), Some(0)]),
            (O, 1, [(0, 0), (0, 1), (1, 0), (1, 1)], vec![Some(0), Some(0)]),
            (O, 2, [(0, 0), (0, 1), (1, 0), (1, 1)], vec![Some(0), Some(0)]),
            (O, 3, [(0, 0), (0, 1), (1, 0), (1, 1)], vec![Some(0), Some(0)]),
            (T, 0, [(0, 1), (1, 1), (2, 1), (1, 2)], vec![Some(1), Some(1), Some(1)]),
            (T, 1, [(1, 0), (1, 1), (1, 2), (2, 1)], vec![E, Some(0), Some(1)]),
            (T, 2, [(0, 1), (1, 1), (2, 1), (1, 0)], vec![Some(1), Some(0), Some(1)]),
            (T, 3, [(0, 1), (1, 0), (1, 1), (1, 2)], vec![Some(1), Some(0), E]),
            (I, 0, [(0, 2), (1, 2), (2, 2), (3, 2)], vec![Some(2), Some(2), Some(2), Some(2)]),
            (I, 1, [(2, 0), (2, 1), (2, 2), (2, 3)], vec![E, E, Some(0), E]),
            (I, 2, [(0, 1), (1, 1), (2, 1), (3, 1)], vec![Some(1), Some(1), Some(1), Some(1)]),
            (I, 3, [(1, 0), (1, 1), (1, 2), (1, 3)], vec![E, Some(0), E, E]),
            (J, 0, [(0, 1), (1, 1), (2, 1), (0, 2)], vec![Some(1), Some(1), Some(1)]),
            (J, 1, [(1, 0), (1, 1), (1, 2), (2, 2)], vec![E, Some(0), Some(2)]),
            (J, 2, [(0, 1), (1, 1), (2, 1), (2, 0)], vec![Some(1), Some(1), Some(0)]),
            (J, 3, [(0, 0), (1, 0), (1, 1), (1, 2)], vec![Some(0), Some(0), E]),
            (L, 0, [(0, 1), (1, 1), (2, 1), (2, 2)], vec![Some(1), Some(1), Some(1)]),
            (L, 1, [(1, 0), (1, 1), (1, 2), (2, 0)], vec![E, Some(0), Some(0)]),
            (L, 2, [(0, 1), (0, 0), (1, 1), (2, 1)], vec![Some(0), Some(1), Some(1)]),
            (L, 3, [(0, 2), (1, 0), (1, 1), (1, 2)], vec![Some(2), Some(0), E]),
            (Z, 0, [(0, 2), (1, 2), (1, 1), (2, 1)], vec![Some(2), Some(1), Some(1)]),
            (Z, 1, [(1, 0), (1, 1), (2, 1), (2, 2)], vec![E, Some(0), Some(1)]),
            (Z, 2, [(0, 1), (1, 1), (1, 0), (2, 0)], vec![Some(1), Some(0), Some(0)]),
            (Z, 3, [(0, 0), (0, 1), (1, 1), (1, 2)], vec![Some(0), Some(1), E]),
            (S, 0, [(0, 1), (1, 1), (1, 2), (2, 2)], vec![Some(1), Some(1), Some(2)]),
            (S, 1, [(1, 1), (1, 2), (2, 0), (2, 1)], vec![E, Some(1), Some(0)]),
            (S, 2, [(0, 0), (1, 0), (1, 1), (2, 1)], vec![Some(0), Some(0), Some(1)]),
            (S, 3, [(0, 2), (0, 1), (1, 1), (1, 0)], vec![Some(1), Some(0), E]),
        ]
    }

    #[test]
    fn test_every_record_matches_table() {
        let catalog = catalog();
        let rows = table();
        assert_eq!(rows.len(), SHAPE_COUNT);
        for (kind, turns, body, skirt) in rows {
            let piece = nth_cw(&catalog, kind, turns);
            let shape = catalog.shape(piece);
            assert_eq!(piece.kind(), kind);
            assert_eq!(piece.rotation().index(), turns);
            assert_eq!(sorted(shape.body()), sorted(&body), "{kind:?} rot {turns}");
            assert_eq!(shape.skirt(), skirt.as_slice(), "{kind:?} rot {turns}");
        }
    }

    #[test]
    fn test_dimensions_fixed_per_type() {
        let catalog = catalog();
        for shape in catalog.shapes() {
            let (w, h) = shape.piece().kind().bounding_box();
            assert_eq!(shape.width(), w as usize);
            assert_eq!(shape.height(), h as usize);
        }
    }

    #[test]
    fn test_four_turns_is_identity() {
        let catalog = catalog();
        for kind in PieceType::ALL {
            for start in Rotation::ALL {
                let piece = Piece::new(kind, start);
                let cw = (0..4).fold(piece, |p, _| catalog.clockwise(p));
                let ccw = (0..4).fold(piece, |p, _| catalog.counterclockwise(p));
                assert_eq!(cw, piece);
                assert_eq!(ccw, piece);
                assert_eq!(catalog.shape(cw).body(), catalog.shape(piece).body());
            }
        }
    }

    #[test]
    fn test_neighbours_are_inverse() {
        let catalog = catalog();
        for shape in catalog.shapes() {
            let piece = shape.piece();
            assert_eq!(catalog.counterclockwise(catalog.clockwise(piece)), piece);
            assert_eq!(catalog.clockwise(piece).rotation(), piece.rotation().cw());
            assert_eq!(catalog.counterclockwise(piece).rotation(), piece.rotation().ccw());
        }
    }

    #[test]
    fn test_spawn_record_is_spawn_body() {
        let catalog = catalog();
        for kind in PieceType::ALL {
            assert_eq!(catalog.shape(Piece::spawn(kind)).body(), &kind.spawn_body());
        }
    }

    #[test]
    fn test_rotate_cw_in_3x3_box() {
        let turned = rotate_cw(&[(0, 0), (0, 2), (2, 0), (1, 1)], 3);
        assert_eq!(turned, [(0, 2), (2, 2), (0, 0), (1, 1)]);
    }
}
