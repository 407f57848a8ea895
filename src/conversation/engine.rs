use serde::Serialize;

use crate::error::RejectedInput;
use crate::records::FeedbackRecord;

use super::message::{ChatMessage, MessageId, Sender};
use super::projection::ReferenceProjection;
use super::state::ConversationState;
use super::step::ChatStep;
use super::transition::{self, Transition};

pub const DEFAULT_AUTHOR_LABEL: &str = "InsightBot";

/// Result of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub reply: ChatMessage,
    pub state: ConversationState,
    pub projection: ReferenceProjection,
    /// Present exactly when this turn answered `asking_feedback`.
    pub record: Option<FeedbackRecord>,
}

/// Owns the chat step machine, the message log and the projection.
///
/// Total: every call either applies a transition or returns a
/// [`RejectedInput`] with nothing mutated.
#[derive(Debug, Clone)]
pub struct ConversationEngine {
    locale: String,
    author_label: String,
    state: ConversationState,
    projection: ReferenceProjection,
    log: Vec<ChatMessage>,
    next_id: u64,
}

impl ConversationEngine {
    pub fn new(locale: &str) -> Self {
        Self::with_author(locale, DEFAULT_AUTHOR_LABEL)
    }

    pub fn with_author(locale: &str, author_label: &str) -> Self {
        let state = ConversationState::new();
        Self {
            projection: ReferenceProjection::for_state(&state, locale),
            locale: locale.to_string(),
            author_label: author_label.to_string(),
            state,
            log: Vec::new(),
            next_id: 1,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn step(&self) -> ChatStep {
        self.state.step
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.log
    }

    pub fn projection(&self) -> &ReferenceProjection {
        &self.projection
    }

    pub fn accepts_input(&self) -> bool {
        self.state.step.accepts_input()
    }

    pub fn placeholder(&self) -> String {
        let key = format!("chat.placeholder.{}", self.state.step);
        t!(&key, locale = self.locale.as_str()).into_owned()
    }

    /// Emit the introductory message and move to `asking_name`.
    ///
    /// Only acts in `greeting`; later calls return `None`.
    pub fn open(&mut self) -> Option<ChatMessage> {
        if self.state.step != ChatStep::Greeting {
            return None;
        }
        let transition = transition::open();
        tracing::debug!(step = %transition.next.step, "conversation opened");
        Some(self.commit(transition))
    }

    /// Apply one user submission.
    ///
    /// Blank text is rejected in every step; so is anything once the
    /// conversation is `completed`. A submission in `greeting` opens the
    /// conversation first.
    pub fn submit(&mut self, text: &str) -> Result<Turn, RejectedInput> {
        if text.trim().is_empty() {
            tracing::debug!(step = %self.state.step, "blank submission ignored");
            return Err(RejectedInput::Blank);
        }
        if self.state.step.is_terminal() {
            tracing::debug!("submission after completion ignored");
            return Err(RejectedInput::Closed);
        }

        self.open();
        let transition = transition::apply(&self.state, text)?;

        let record = transition.completes_cycle.then(|| {
            let collected = &transition.next.collected;
            FeedbackRecord::new(
                &self.author_label,
                collected.recipient.as_deref().unwrap_or_default(),
                collected.feedback_text.as_deref().unwrap_or_default(),
                collected.context.as_deref().unwrap_or_default(),
            )
        });

        let from = self.state.step;
        self.append(Sender::User, text.to_string());
        let reply = self.commit(transition);

        tracing::info!(
            from = %from,
            to = %self.state.step,
            record = record.is_some(),
            "conversation advanced"
        );

        Ok(Turn {
            reply,
            state: self.state.clone(),
            projection: self.projection.clone(),
            record,
        })
    }

    /// Drop the whole conversation and start over from `greeting`.
    pub fn reset(&mut self) {
        *self = Self::with_author(&self.locale, &self.author_label);
    }

    fn commit(&mut self, transition: Transition) -> ChatMessage {
        let text = transition.reply.render(&self.locale);
        if transition.next != self.state {
            self.projection = ReferenceProjection::for_state(&transition.next, &self.locale);
        }
        self.state = transition.next;
        self.append(Sender::Assistant, text)
    }

    fn append(&mut self, sender: Sender, text: String) -> ChatMessage {
        let message = ChatMessage {
            id: MessageId(self.next_id),
            sender,
            text,
        };
        self.next_id += 1;
        self.log.push(message.clone());
        message
    }
}
