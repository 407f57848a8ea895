//! Full-screen three-panel terminal UI.

mod app;
mod handlers;
pub mod panels;
mod render;
pub mod state;
pub mod theme;
pub mod widgets;

use anyhow::Result;

use crate::session::SessionOptions;

pub use state::TuiState;

/// Open a session and hand it to the full-screen UI.
pub fn run_tui(options: SessionOptions, assistance_on_start: bool) -> Result<()> {
    let mut state = TuiState::new(options);
    if assistance_on_start {
        state.start_assistance();
    }
    tracing::info!(locale = %state.locale(), "starting terminal ui");
    app::run_app(state)
}
