//! Falling piece value type and the collision predicate
//!
//! A piece is kind + rotation index + anchor position. Its absolute cell
//! set is derived from the shape catalog, never stored. The collision
//! predicate allows cells above the visible board (y < 0) so a freshly
//! spawned piece can overlap the top edge while falling in.

use crate::core::board::Board;
use crate::core::shapes::{rotation_states, shape, PieceShape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor with rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute board cells occupied by this piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut out = [(0, 0); 4];
        for (i, (dx, dy)) in self.shape().into_iter().enumerate() {
            out[i] = (self.x + dx, self.y + dy);
        }
        out
    }

    /// Copy translated by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with rotation advanced one state clockwise, wrapping at the
    /// kind's state count
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % rotation_states(self.kind),
            ..*self
        }
    }

    /// Collision check: every cell must be inside the columns and above
    /// the floor; cells with y < 0 are allowed (spawn buffer) and only
    /// cells with y >= 0 are checked against board occupancy.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().into_iter().all(|(x, y)| {
            x >= 0
                && x < BOARD_WIDTH as i8
                && y < BOARD_HEIGHT as i8
                && (y < 0 || !board.is_occupied(x, y))
        })
    }
}
