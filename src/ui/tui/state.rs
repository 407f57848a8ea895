use crate::presentation::{PresentationState, Tour};
use crate::process::{Clock, SystemClock};
use crate::session::{Session, SessionOptions};

use super::widgets::{TextInput, TypingIndicator};

/// Everything the full-screen UI reads and mutates between frames.
pub struct TuiState<C: Clock = SystemClock> {
    pub session: Session<C>,
    pub presentation: PresentationState,
    pub tour: Tour,
    pub input: TextInput,
    pub typing: TypingIndicator,
    pub should_quit: bool,
}

impl TuiState<SystemClock> {
    pub fn new(options: SessionOptions) -> Self {
        Self::with_session(Session::with_system_clock(options))
    }
}

impl<C: Clock> TuiState<C> {
    pub fn with_session(session: Session<C>) -> Self {
        Self {
            session,
            presentation: PresentationState::new(),
            tour: Tour::default(),
            input: TextInput::new(),
            typing: TypingIndicator::new(),
            should_quit: false,
        }
    }

    pub fn locale(&self) -> &str {
        &self.session.options().locale
    }

    /// Whether typed characters reach the input bar.
    pub fn input_enabled(&self) -> bool {
        self.session.engine().accepts_input() && !self.session.is_replying()
    }

    pub fn start_assistance(&mut self) {
        if !self.presentation.assistance_mode {
            self.presentation.toggle_assistance();
        }
        self.tour.start();
    }
}
