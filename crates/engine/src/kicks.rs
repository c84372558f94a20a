//! SRS wall-kick tables, indexed by the source rotation.
//! Every row starts with the unkicked (0, 0) test.

use srsbot_core::{PieceType, Rotation};

pub type Kick = (i8, i8);

/// J, L, S, T, Z (and O, whose first test always fits)
const JLSTZ_CW: [[Kick; 5]; 4] = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0 -> R
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // R -> 2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 2 -> L
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // L -> 0
];

const JLSTZ_CCW: [[Kick; 5]; 4] = [
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 0 -> L
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // R -> 0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 2 -> R
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // L -> 2
];

const I_CW: [[Kick; 5]; 4] = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // 0 -> R
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // R -> 2
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // 2 -> L
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // L -> 0
];

const I_CCW: [[Kick; 5]; 4] = [
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // 0 -> L
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // R -> 0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // 2 -> R
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // L -> 2
];

/// Offsets to try, in order, when turning `kind` out of `from`.
pub fn get_kicks(kind: PieceType, from: Rotation, clockwise: bool) -> &'static [Kick; 5] {
    let table = match (kind, clockwise) {
        (PieceType::I, true) => &I_CW,
        (PieceType::I, false) => &I_CCW,
        (_, true) => &JLSTZ_CW,
        (_, false) => &JLSTZ_CCW,
    };
    &table[from.index()]
}
