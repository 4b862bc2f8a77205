//! Terminal falling-block puzzle.
//!
//! `core` holds the pure simulation (board, pieces, engine); `app` is the
//! menu/play/pause lifecycle around one engine session; `input`, `term`,
//! and `scores` are the crossterm and filesystem glue.

pub mod app;
pub mod core;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;
