//! Core module - pure game simulation with no I/O dependencies
//!
//! Everything under here is deterministic given a seed: the shape
//! catalog, the board, piece collision, and the engine that ties them
//! together. Rendering, input, and persistence live outside.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use engine::{fall_interval_secs, Engine};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::shape;
