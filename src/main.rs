//! Terminal memory-match runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_match::core::{Clock, GameSession};
use tui_match::input::{handle_key_event, should_quit, GridCursor};
use tui_match::term::{BoardModel, BoardView, Hud, TerminalRenderer, Viewport};
use tui_match::types::{SessionAction, CLOCK_TICK_MS};

/// Frame pacing for input polling and the conceal-hold animation.
const FRAME_MS: u64 = 50;

/// Session clock backed by the process clock. The session flips it on and
/// off; `run` delivers the actual ticks while it is on.
struct WallClock {
    running: bool,
}

impl Clock for WallClock {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed: u64 = rand::random();
    let mut session = GameSession::new(seed, BoardModel::new(), WallClock { running: false });
    session.start();

    let view = BoardView::default();
    let mut cursor = GridCursor::new();

    let tick = Duration::from_millis(CLOCK_TICK_MS as u64);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();
    let mut second_mark = Instant::now();
    let mut was_running = false;

    loop {
        // Advance conceal holds by real elapsed time.
        let elapsed_ms = last_frame.elapsed().as_millis() as u32;
        last_frame = Instant::now();
        session.renderer_mut().advance(elapsed_ms);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            seconds: session.scoreboard().elapsed_seconds(),
            moves: session.scoreboard().moves(),
            stars: session.scoreboard().stars_remaining(),
        };
        let fb = view.render(
            session.renderer(),
            &hud,
            Some((cursor.col(), cursor.row())),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            SessionAction::Activate => {
                                session.handle_select(cursor.card_id());
                            }
                            SessionAction::Replay => {
                                session.replay();
                            }
                            movement => cursor.apply(movement),
                        }
                    }
                }
            }
        }

        // Deliver one tick per elapsed second while the session clock runs.
        let running = session.clock_running();
        if running && !was_running {
            second_mark = Instant::now();
        }
        if running {
            while second_mark.elapsed() >= tick {
                session.tick_second();
                second_mark += tick;
            }
        }
        was_running = running;
    }
}
