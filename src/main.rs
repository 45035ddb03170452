use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, stdout, Write},
    time::{Duration, Instant},
};
use tracing::info;

use stackfall::constants::FRAME_PERIOD;
use stackfall::input::key_command;
use stackfall::ui::ui;
use stackfall::Game;

mod cli;
mod logging;

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level)?;

    let config = args.game_config()?;
    let mut game = Game::new(&config)?;
    info!(
        width = config.width,
        height = config.height,
        seed = ?config.seed,
        queued = config.queue.len(),
        "starting game"
    );

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = play(&mut game);
    let restored = restore_terminal();

    first_error(result, restored)
}

fn play(game: &mut Game) -> anyhow::Result<()> {
    execute!(stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    run(&mut terminal, game)
}

/// Runs every cleanup step even when an earlier one fails.
fn restore_terminal() -> anyhow::Result<()> {
    let raw = terminal::disable_raw_mode().context("failed to disable raw mode");
    let screen = leave_screen(&mut stdout()).context("failed to leave alternate screen");
    raw.and(screen)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// The game's own error is reported ahead of any cleanup error.
fn first_error(result: anyhow::Result<()>, cleanup: anyhow::Result<()>) -> anyhow::Result<()> {
    result.and(cleanup)
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();
    let mut halted = false;

    loop {
        // Handle input: everything that arrived during this frame
        let mut commands = Vec::new();
        if event::poll(FRAME_PERIOD)? {
            loop {
                if let Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) = event::read()?
                {
                    if kind == KeyEventKind::Press && is_quit(code, modifiers) {
                        return Ok(());
                    }
                    commands.extend(key_command(code, kind));
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Frames stop for good once the game is over; the last one stays up
        if halted {
            continue;
        }

        let now = Instant::now();
        game.step(now - last_frame, commands);
        last_frame = now;

        terminal
            .draw(|f| ui(f, game))
            .context("failed to draw frame")?;

        if game.is_over() {
            info!("game over, frame loop halted");
            halted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_restores_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_game_error_reported_before_cleanup_error() {
        let err = first_error(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("raw mode stuck")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "draw failed");

        let err = first_error(Ok(()), Err(anyhow::anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_quit(KeyCode::Left, KeyModifiers::NONE));
    }
}
