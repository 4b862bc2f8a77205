//! Deterministic piece selection.
//!
//! Kinds are drawn uniformly and independently from the seven-entry
//! catalog. The generator lives inside the engine and is seeded at
//! session start, so a seed fully determines the piece sequence.

use crate::types::PieceKind;

/// Xorshift32 generator. Small state, no allocation, and good enough
/// distribution for dealing pieces.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. Xorshift has a fixed point at zero, so a zero
    /// seed is remapped.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in [0, max). Modulo bias is irrelevant at the
    /// ranges used here (7 and smaller).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Deal one piece kind
    pub fn draw_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.next_range(PieceKind::ALL.len() as u32) as usize)
    }

    /// Current generator state, usable as the seed of a follow-up session
    pub fn state(&self) -> u32 {
        self.state
    }
}
