use serde::{Deserialize, Serialize};

use super::state::{Collected, ConversationState};
use super::step::ChatStep;

const FEEDBACK_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceField {
    pub label: String,
    pub value: String,
}

/// Content of the references side panel.
///
/// Holds no state of its own: [`ReferenceProjection::for_state`] rebuilds it
/// from `(step, collected)` on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProjection {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<ReferenceField>,
    pub context_note: Option<String>,
}

impl ReferenceProjection {
    pub fn for_state(state: &ConversationState, locale: &str) -> Self {
        Self::build(state.step, &state.collected, locale)
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    fn build(step: ChatStep, collected: &Collected, locale: &str) -> Self {
        let text = |key: &str| t!(key, locale = locale).into_owned();
        let field = |label_key: &str, value: String| ReferenceField {
            label: text(label_key),
            value,
        };
        let or_pending = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| text("reference.pending"))
        };
        let or_blank = |value: &Option<String>| value.clone().unwrap_or_default();
        let preview = || feedback_preview(collected.feedback_text.as_deref().unwrap_or(""));

        let key = step.as_ref();
        let title = text(&format!("reference.{key}.title"));
        let description = Some(text(&format!("reference.{key}.description")));
        let context_note = Some(text(&format!("reference.{key}.note")));
        let step_label = "reference.label.current_step";
        let status_label = "reference.label.status";
        let status = text(&format!("reference.{key}.status"));

        let fields = match step {
            ChatStep::Greeting | ChatStep::AskingName => vec![
                field(step_label, text(&format!("reference.{key}.step"))),
                field(status_label, status),
            ],
            ChatStep::AskingContext => vec![
                field("reference.label.recipient", or_pending(&collected.recipient)),
                field(step_label, text(&format!("reference.{key}.step"))),
                field(status_label, status),
            ],
            ChatStep::AskingFeedback => vec![
                field("reference.label.recipient", or_pending(&collected.recipient)),
                field("reference.label.context", or_pending(&collected.context)),
                field(step_label, text(&format!("reference.{key}.step"))),
                field(status_label, status),
            ],
            ChatStep::WaitingRestart | ChatStep::Completed => vec![
                field("reference.label.recipient", or_blank(&collected.recipient)),
                field("reference.label.context", or_blank(&collected.context)),
                field("reference.label.feedback", preview()),
                field(status_label, status),
            ],
        };

        Self {
            title,
            description,
            fields,
            context_note,
        }
    }
}

/// First 50 characters followed by an ellipsis, as the panel shows it.
pub fn feedback_preview(text: &str) -> String {
    let head: String = text.chars().take(FEEDBACK_PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn full() -> Collected {
        Collected {
            recipient: Some("Ana López".into()),
            context: Some("Sprint review".into()),
            feedback_text: Some("Great collaboration this sprint".into()),
        }
    }

    #[test]
    fn every_step_has_a_title_and_status() {
        for step in ChatStep::iter() {
            let p = ReferenceProjection::build(step, &full(), "es");
            assert!(!p.title.is_empty(), "{step}");
            assert!(p.field("Estado").is_some(), "{step}");
            assert!(!p.title.starts_with("reference."), "missing catalog key for {step}");
        }
    }

    #[test]
    fn asking_context_shows_recipient_or_pending() {
        let state = ConversationState::at(ChatStep::AskingContext, Collected::default());
        let p = ReferenceProjection::for_state(&state, "es");
        assert_eq!(p.field("Destinatario"), Some("Pendiente"));

        let state = ConversationState::at(ChatStep::AskingContext, full());
        let p = ReferenceProjection::for_state(&state, "en");
        assert_eq!(p.field("Recipient"), Some("Ana López"));
    }

    #[test]
    fn waiting_restart_lists_everything_collected() {
        let state = ConversationState::at(ChatStep::WaitingRestart, full());
        let p = ReferenceProjection::for_state(&state, "en");
        let labels: Vec<_> = p.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Recipient", "Context", "Feedback", "Status"]);
        assert_eq!(p.field("Feedback"), Some("Great collaboration this sprint..."));
        assert_eq!(p.field("Status"), Some("Awaiting answer"));
    }

    #[test]
    fn projection_is_a_function_of_state() {
        let state = ConversationState::at(ChatStep::AskingFeedback, full());
        assert_eq!(
            ReferenceProjection::for_state(&state, "es"),
            ReferenceProjection::for_state(&state.clone(), "es")
        );
    }

    #[test]
    fn preview_truncates_on_characters() {
        let long = "á".repeat(80);
        let preview = feedback_preview(&long);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
        assert_eq!(feedback_preview("short"), "short...");
    }
}
