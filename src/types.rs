//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the top rows double as the spawn buffer; a piece may
/// sit partially above row 0 while falling in)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 25;

/// Spawn anchor: horizontally centered, top row, rotation 0
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Frame cadence for the host loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity pacing (seconds). The fall interval shrinks by one step per
/// level and never drops below the floor.
pub const BASE_FALL_SECS: f32 = 0.5;
pub const FALL_STEP_SECS: f32 = 0.05;
pub const MIN_FALL_SECS: f32 = 0.1;

/// Points per simultaneous row clear (indexed by row count, 1-4),
/// multiplied by the current level
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Level advances every 10 total lines cleared
pub const LINES_PER_LEVEL: u32 = 10;

/// Piece kinds, in catalog order (kind id 0..6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog index of this kind (0..6)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind for a catalog index, wrapping out-of-range values
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Cell on the board (None = empty, Some = filled with the kind of the
/// piece that locked there, which the renderer maps to a color)
pub type Cell = Option<PieceKind>;

/// Player commands understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    HardDrop,
    Hold,
}

/// Discrete events emitted by the engine for presentation cues.
/// The engine never renders or plays sound itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A rotation command produced a valid position (fires even when the
    /// shape is symmetric and visually unchanged)
    Rotated,
    /// The current piece was committed to the board
    Locked,
    /// Full rows were removed in one lock event (1-4)
    RowsCleared(u32),
    /// A freshly spawned piece had no valid position; carries final score
    GameOver(u32),
}
