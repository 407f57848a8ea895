use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::RejectedInput;
use crate::presentation::{Panel, PresentationState};
use crate::process::Clock;

use super::state::TuiState;

pub(super) fn handle_key<C: Clock>(state: &mut TuiState<C>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            state.should_quit = true;
            return;
        }
        KeyCode::Char('a') if ctrl => {
            toggle_assistance(state);
            return;
        }
        _ => {}
    }

    if state.tour.is_active() {
        handle_tour_key(state, key.code);
        return;
    }

    match key.code {
        KeyCode::Char('n') if ctrl => {
            state.session.new_chat();
            state.presentation = PresentationState::new();
            state.input.clear();
        }
        KeyCode::F(1) => state.presentation.toggle(Panel::References),
        KeyCode::F(2) => state.presentation.toggle(Panel::Chat),
        KeyCode::F(3) => state.presentation.toggle(Panel::Database),
        KeyCode::Enter => submit_input(state),
        KeyCode::Char(ch) if !ctrl && state.input_enabled() => state.input.insert(ch),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.home(),
        KeyCode::End => state.input.end(),
        _ => {}
    }
}

fn handle_tour_key<C: Clock>(state: &mut TuiState<C>, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Enter => state.tour.next(&mut state.presentation),
        KeyCode::Left => state.tour.previous(),
        KeyCode::Esc => state.tour.dismiss(&mut state.presentation),
        _ => {}
    }
}

fn toggle_assistance<C: Clock>(state: &mut TuiState<C>) {
    if state.presentation.assistance_mode {
        state.tour.dismiss(&mut state.presentation);
        state.presentation.assistance_mode = false;
    } else {
        state.start_assistance();
    }
}

fn submit_input<C: Clock>(state: &mut TuiState<C>) {
    match state.session.send(&state.input.value) {
        Ok(()) => state.input.clear(),
        // Keep the draft so it can be sent once the reply lands.
        Err(RejectedInput::Busy) => {}
        Err(RejectedInput::Blank | RejectedInput::Closed) => state.input.clear(),
    }
}
