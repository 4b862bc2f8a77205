//! App module - game lifecycle around one engine session
//!
//! State machine: Menu -> Playing <-> Paused, Playing -> GameOver ->
//! Menu | Playing (restart), plus the read-only HowToPlay and HighScores
//! overlays reachable from Menu. Gravity and engine commands apply only
//! while Playing; pausing simply stops feeding time to the engine, so
//! paused wall-clock time never reaches the fall accumulator.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::Engine;
use crate::input;
use crate::scores;
use crate::types::GameEvent;

pub const MENU_ITEMS: [&str; 4] = ["Start Game", "How to Play", "High Scores", "Exit"];

/// How long the board flashes after a row clear (seconds)
pub const CLEAR_FLASH_SECS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
    HowToPlay,
    HighScores,
}

pub struct App {
    screen: Screen,
    engine: Engine,
    menu_index: usize,
    high_score: u32,
    top_scores: [u32; scores::TOP_SCORES],
    flash_secs: f32,
    quit: bool,
    /// Directory holding the score files
    data_dir: PathBuf,
}

impl App {
    pub fn new(seed: u32, data_dir: PathBuf) -> Self {
        let high_score = scores::load_high_score(&data_dir.join(scores::HIGH_SCORE_FILE));
        let top_scores = scores::load_top_scores(&data_dir.join(scores::TOP_SCORES_FILE));

        Self {
            screen: Screen::Menu,
            engine: Engine::new(seed),
            menu_index: 0,
            high_score,
            top_scores,
            flash_secs: 0.0,
            quit: false,
            data_dir,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn top_scores(&self) -> &[u32; scores::TOP_SCORES] {
        &self.top_scores
    }

    /// Row-clear flash still active (render cue)
    pub fn flash_active(&self) -> bool {
        self.flash_secs > 0.0
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time. Gravity runs only while Playing.
    pub fn update(&mut self, dt_secs: f32) {
        self.flash_secs = (self.flash_secs - dt_secs).max(0.0);

        if self.screen == Screen::Playing {
            self.engine.advance(dt_secs);
            self.consume_events();
        }
    }

    /// Route a key press to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::Paused => match key.code {
                KeyCode::Esc => self.screen = Screen::Playing,
                KeyCode::Char('q') | KeyCode::Char('Q') => self.screen = Screen::Menu,
                _ => {}
            },
            Screen::GameOver => match key.code {
                KeyCode::Char(' ') => self.start_session(),
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => {}
            },
            Screen::HowToPlay | Screen::HighScores => {
                if key.code == KeyCode::Esc {
                    self.screen = Screen::Menu;
                }
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let len = MENU_ITEMS.len();
        match key.code {
            KeyCode::Up => self.menu_index = (self.menu_index + len - 1) % len,
            KeyCode::Down => self.menu_index = (self.menu_index + 1) % len,
            KeyCode::Enter => match self.menu_index {
                0 => self.start_session(),
                1 => self.screen = Screen::HowToPlay,
                2 => {
                    self.top_scores = scores::load_top_scores(&self.top_scores_path());
                    self.screen = Screen::HighScores;
                }
                _ => self.quit = true,
            },
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.screen = Screen::Paused;
            return;
        }
        if let Some(action) = input::playing_action(key) {
            self.engine.handle(action);
            self.consume_events();
        }
    }

    /// Fresh session state: new engine reseeded from the old one's RNG,
    /// commands and gravity re-enabled
    fn start_session(&mut self) {
        let seed = self.engine.seed();
        self.engine = Engine::new(seed);
        self.flash_secs = 0.0;
        self.screen = Screen::Playing;
    }

    /// Turn engine events into presentation state changes. Persistence
    /// failures are swallowed: losing a score file write is not worth
    /// killing the session over.
    fn consume_events(&mut self) {
        let events: Vec<GameEvent> = self.engine.drain_events().collect();
        for event in events {
            match event {
                GameEvent::Rotated | GameEvent::Locked => {}
                GameEvent::RowsCleared(_) => self.flash_secs = CLEAR_FLASH_SECS,
                GameEvent::GameOver(final_score) => {
                    self.screen = Screen::GameOver;
                    if let Ok(updated) = scores::save_top_scores(&self.top_scores_path(), final_score)
                    {
                        self.top_scores = updated;
                    }
                    if let Ok(high) =
                        scores::save_high_score(&self.high_score_path(), final_score, self.high_score)
                    {
                        self.high_score = high;
                    }
                }
            }
        }
    }

    fn top_scores_path(&self) -> PathBuf {
        self.data_dir.join(scores::TOP_SCORES_FILE)
    }

    fn high_score_path(&self) -> PathBuf {
        self.data_dir.join(scores::HIGH_SCORE_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
