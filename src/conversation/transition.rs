//! Step-keyed transition table. Pure: no ids, no clock, no log.

use crate::error::RejectedInput;

use super::state::{Collected, ConversationState};
use super::step::ChatStep;

const RESTART_YES: [&str; 4] = ["sí", "si", "yes", "y"];
const RESTART_NO: [&str; 2] = ["no", "n"];

/// What the assistant says after a transition, before localisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    Greeting,
    AskContext { recipient: String },
    AskFeedback { context: String },
    Registered,
    Restarted,
    Finished,
    RestartPrompt,
}

impl Reply {
    pub(crate) fn render(&self, locale: &str) -> String {
        match self {
            Self::Greeting => t!("chat.greeting", locale = locale),
            Self::AskContext { recipient } => {
                t!("chat.ask_context", locale = locale, recipient = recipient)
            }
            Self::AskFeedback { context } => {
                t!("chat.ask_feedback", locale = locale, context = context)
            }
            Self::Registered => t!("chat.registered", locale = locale),
            Self::Restarted => t!("chat.restarted", locale = locale),
            Self::Finished => t!("chat.finished", locale = locale),
            Self::RestartPrompt => t!("chat.restart_prompt", locale = locale),
        }
        .into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub next: ConversationState,
    pub reply: Reply,
    /// Set exactly when `asking_feedback` is answered.
    pub completes_cycle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestartAnswer {
    Yes,
    No,
    Unrecognised,
}

fn parse_restart_answer(input: &str) -> RestartAnswer {
    let answer = input.trim().to_lowercase();
    if RESTART_YES.contains(&answer.as_str()) {
        RestartAnswer::Yes
    } else if RESTART_NO.contains(&answer.as_str()) {
        RestartAnswer::No
    } else {
        RestartAnswer::Unrecognised
    }
}

/// The `greeting → asking_name` auto-transition.
pub(crate) fn open() -> Transition {
    Transition {
        next: ConversationState::at(ChatStep::AskingName, Collected::default()),
        reply: Reply::Greeting,
        completes_cycle: false,
    }
}

/// Apply one user submission to `state`.
///
/// `Greeting` is answered like `AskingName`; the engine always emits the
/// greeting first, so that arm only keeps the table total.
pub(crate) fn apply(state: &ConversationState, input: &str) -> Result<Transition, RejectedInput> {
    if input.trim().is_empty() {
        return Err(RejectedInput::Blank);
    }

    let collected = &state.collected;
    let transition = match state.step {
        ChatStep::Greeting | ChatStep::AskingName => Transition {
            next: ConversationState::at(
                ChatStep::AskingContext,
                Collected {
                    recipient: Some(input.to_string()),
                    ..Collected::default()
                },
            ),
            reply: Reply::AskContext {
                recipient: input.to_string(),
            },
            completes_cycle: false,
        },
        ChatStep::AskingContext => Transition {
            next: ConversationState::at(
                ChatStep::AskingFeedback,
                Collected {
                    context: Some(input.to_string()),
                    ..collected.clone()
                },
            ),
            reply: Reply::AskFeedback {
                context: input.to_string(),
            },
            completes_cycle: false,
        },
        ChatStep::AskingFeedback => Transition {
            next: ConversationState::at(
                ChatStep::WaitingRestart,
                Collected {
                    feedback_text: Some(input.to_string()),
                    ..collected.clone()
                },
            ),
            reply: Reply::Registered,
            completes_cycle: true,
        },
        ChatStep::WaitingRestart => match parse_restart_answer(input) {
            RestartAnswer::Yes => Transition {
                next: ConversationState::at(ChatStep::AskingName, Collected::default()),
                reply: Reply::Restarted,
                completes_cycle: false,
            },
            RestartAnswer::No => Transition {
                next: ConversationState::at(ChatStep::Completed, collected.clone()),
                reply: Reply::Finished,
                completes_cycle: false,
            },
            RestartAnswer::Unrecognised => Transition {
                next: state.clone(),
                reply: Reply::RestartPrompt,
                completes_cycle: false,
            },
        },
        ChatStep::Completed => return Err(RejectedInput::Closed),
    };

    Ok(transition)
}
