//! Engine module - the simulation orchestrator
//!
//! Owns the board and the current/next/held pieces, applies player
//! commands, runs gravity, locking, row clears, scoring, and level
//! progression. Emits discrete events the host consumes for presentation
//! cues; the engine itself never touches rendering or sound.

use arrayvec::ArrayVec;

use crate::core::{Board, Piece, SimpleRng};
use crate::types::{
    GameAction, GameEvent, BASE_FALL_SECS, FALL_STEP_SECS, LINES_PER_LEVEL, LINE_SCORES,
    MIN_FALL_SECS,
};

/// Seconds between automatic fall steps at a given level (level starts
/// at 1). Non-increasing in level, clamped at the floor.
pub fn fall_interval_secs(level: u32) -> f32 {
    (BASE_FALL_SECS - level.saturating_sub(1) as f32 * FALL_STEP_SECS).max(MIN_FALL_SECS)
}

/// One game session: board, piece slots, score and timing state.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current: Piece,
    next: Piece,
    /// Held piece keeps the rotation it was stashed with; it is reset to
    /// spawn defaults only when swapped back in
    held: Option<Piece>,
    /// True until hold is used, re-armed by the next lock
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    /// Accumulated time since the last automatic fall step
    fall_timer: f32,
    game_over: bool,
    rng: SimpleRng,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Create a fresh session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::spawn(rng.draw_kind());
        let next = Piece::spawn(rng.draw_kind());

        Self {
            board: Board::new(),
            current,
            next,
            held: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer: 0.0,
            game_over: false,
            rng,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn fall_interval(&self) -> f32 {
        fall_interval_secs(self.level)
    }

    /// Current RNG state, usable to reseed a follow-up session
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Drain the events produced since the last call
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Apply a player command. Invalid moves and rotations are no-ops.
    /// Returns true if the session state changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_replace(self.current.translated(-1, 0)),
            GameAction::MoveRight => self.try_replace(self.current.translated(1, 0)),
            GameAction::SoftDrop => self.try_replace(self.current.translated(0, 1)),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
        }
    }

    /// Advance time; runs at most one automatic fall step (and thus at
    /// most one lock) per call. Excess time past the fall interval is
    /// retained for the next call rather than batched into extra steps.
    /// Returns true if a fall step resolved.
    pub fn advance(&mut self, dt_secs: f32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer += dt_secs;
        if self.fall_timer < self.fall_interval() {
            return false;
        }
        self.fall_timer -= self.fall_interval();

        let down = self.current.translated(0, 1);
        if down.fits(&self.board) {
            self.current = down;
        } else {
            self.lock();
        }
        true
    }

    /// Row where the current piece would land on hard drop. Read-only
    /// projection, derived on demand.
    pub fn ghost_y(&self) -> i8 {
        let mut ghost = self.current;
        loop {
            let down = ghost.translated(0, 1);
            if down.fits(&self.board) {
                ghost = down;
            } else {
                return ghost.y;
            }
        }
    }

    /// Visible cells of the ghost projection (cells above the board top
    /// are dropped)
    pub fn ghost_cells(&self) -> ArrayVec<(i8, i8), 4> {
        let ghost = Piece {
            y: self.ghost_y(),
            ..self.current
        };
        ghost.cells().into_iter().filter(|&(_, y)| y >= 0).collect()
    }

    fn try_replace(&mut self, candidate: Piece) -> bool {
        if candidate.fits(&self.board) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Rotate clockwise if the rotated position is valid; no kick or
    /// offset adjustment is attempted. The Rotated event fires whenever
    /// the result is valid, even for single-state kinds where the shape
    /// is unchanged (audible confirmation in the presentation layer).
    fn rotate_cw(&mut self) -> bool {
        let candidate = self.current.rotated_cw();
        if candidate.fits(&self.board) {
            self.current = candidate;
            self.events.push(GameEvent::Rotated);
            true
        } else {
            false
        }
    }

    /// Drop the current piece to the last valid row and lock it, as one
    /// atomic operation. Also restarts the gravity accumulator.
    fn hard_drop(&mut self) {
        self.current = Piece {
            y: self.ghost_y(),
            ..self.current
        };
        self.fall_timer = 0.0;
        self.lock();
    }

    /// Commit the current piece to the board, promote the next piece and
    /// draw a fresh one, then evaluate row clears and scoring. A promoted
    /// piece with no valid position ends the session.
    fn lock(&mut self) {
        for (x, y) in self.current.cells() {
            if y >= 0 {
                self.board.set(x, y, Some(self.current.kind));
            }
        }
        self.events.push(GameEvent::Locked);

        self.current = self.next;
        self.next = Piece::spawn(self.rng.draw_kind());
        self.can_hold = true;

        if !self.current.fits(&self.board) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver(self.score));
            return;
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score += LINE_SCORES[cleared as usize] * self.level;
            self.lines += cleared;
            self.level = 1 + self.lines / LINES_PER_LEVEL;
            self.events.push(GameEvent::RowsCleared(cleared));
        }
    }

    /// Stash or swap the current piece. Usable once per lock cycle. A
    /// swapped-in piece is reset to spawn position and rotation so it
    /// never reappears mid-rotation.
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }

        match self.held.take() {
            Some(held) => {
                self.held = Some(self.current);
                self.current = Piece::spawn(held.kind);
            }
            None => {
                self.held = Some(self.current);
                self.current = self.next;
                self.next = Piece::spawn(self.rng.draw_kind());
            }
        }

        self.can_hold = false;
        true
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    #[cfg(test)]
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }
}
