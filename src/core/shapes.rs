//! Shape catalog - rotation states for the seven piece kinds
//!
//! Each rotation state is a list of four cell offsets from the piece
//! anchor (x grows right, y grows down). Kinds differ in symmetry: O has
//! a single state, I/S/Z have two, J/L/T have four. Rotation indices are
//! taken modulo the kind's state count, so callers can advance rotation
//! without range checks.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Number of distinct rotation states for a kind
pub const fn rotation_states(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::O => 1,
        PieceKind::I | PieceKind::S | PieceKind::Z => 2,
        PieceKind::J | PieceKind::L | PieceKind::T => 4,
    }
}

/// Get the cell offsets for a kind and rotation index.
/// The rotation index wraps modulo the kind's state count.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let r = (rotation % rotation_states(kind)) as usize;
    match kind {
        PieceKind::I => I_STATES[r],
        PieceKind::J => J_STATES[r],
        PieceKind::L => L_STATES[r],
        PieceKind::O => O_STATES[r],
        PieceKind::S => S_STATES[r],
        PieceKind::T => T_STATES[r],
        PieceKind::Z => Z_STATES[r],
    }
}
