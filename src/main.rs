//! Terminal blockfall runner.
//!
//! Frame loop: render, poll input with a timeout until the next tick,
//! then feed elapsed time to the app. Single-threaded; the engine sees
//! commands in arrival order and at most one gravity step per tick.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::app::App;
use blockfall::input;
use blockfall::term::TerminalRenderer;
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);

    let mut app = App::new(seed, PathBuf::from("."));

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        term.draw(&app)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if input::should_quit(key) {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            app.update(dt);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
