use serde::{Deserialize, Serialize};

use super::step::ChatStep;

/// Answers gathered during the current cycle. Each field is written once
/// per cycle; all three are cleared together on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collected {
    pub recipient: Option<String>,
    pub context: Option<String>,
    pub feedback_text: Option<String>,
}

impl Collected {
    pub fn is_empty(&self) -> bool {
        self.recipient.is_none() && self.context.is_none() && self.feedback_text.is_none()
    }

}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub step: ChatStep,
    pub collected: Collected,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn at(step: ChatStep, collected: Collected) -> Self {
        Self { step, collected }
    }
}
