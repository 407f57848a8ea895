use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

use crate::error::InsightError;

use super::handlers;
use super::render;
use super::state::TuiState;

const FRAME_POLL: Duration = Duration::from_millis(100);

/// Run the full-screen UI until the user quits. The terminal is restored
/// even when the loop fails.
pub fn run_app(mut state: TuiState) -> Result<()> {
    terminal::enable_raw_mode()
        .map_err(|e| InsightError::Ui(format!("failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut state);
    state.session.close();

    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
) -> Result<()> {
    loop {
        // Board and conversation log their own changes.
        state.session.tick();

        terminal.draw(|frame| {
            let area = frame.area();
            render::draw_ui(area, frame.buffer_mut(), state);
        })?;

        if state.should_quit {
            return Ok(());
        }

        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                handlers::handle_key(state, key);
            }
        } else {
            state.typing.advance();
        }
    }
}
