//! Score persistence - newline-delimited integer files
//!
//! Two files next to the binary: `highscores.txt` holds the best five
//! scores (read until EOF or five values, missing slots default to 0) and
//! `highscore.txt` holds the single all-time best. The engine never does
//! I/O; the app hands the final score over here at game over.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Number of scores kept on the board
pub const TOP_SCORES: usize = 5;

pub const TOP_SCORES_FILE: &str = "highscores.txt";
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Read the best-of-five list. A missing or short file pads with zeros;
/// parsing stops at the first non-integer line.
pub fn load_top_scores(path: &Path) -> [u32; TOP_SCORES] {
    let mut scores = [0u32; TOP_SCORES];
    let Ok(contents) = fs::read_to_string(path) else {
        return scores;
    };

    for (slot, line) in scores.iter_mut().zip(contents.split_whitespace()) {
        match line.parse::<u32>() {
            Ok(value) => *slot = value,
            Err(_) => break,
        }
    }
    scores
}

/// Merge a new score into the best-of-five list and rewrite the file.
/// Returns the updated list, sorted descending.
pub fn save_top_scores(path: &Path, new_score: u32) -> Result<[u32; TOP_SCORES]> {
    let current = load_top_scores(path);

    let mut merged: Vec<u32> = current.to_vec();
    merged.push(new_score);
    merged.sort_unstable_by(|a, b| b.cmp(a));
    merged.truncate(TOP_SCORES);

    let mut out = String::new();
    for score in &merged {
        out.push_str(&score.to_string());
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;

    let mut result = [0u32; TOP_SCORES];
    result.copy_from_slice(&merged);
    Ok(result)
}

/// Read the single all-time high score; missing or unparsable file is 0.
pub fn load_high_score(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Persist the high score if the new value beats it. Returns the value
/// now on record.
pub fn save_high_score(path: &Path, score: u32, previous: u32) -> Result<u32> {
    if score <= previous {
        return Ok(previous);
    }
    fs::write(path, format!("{}\n", score))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(score)
}
