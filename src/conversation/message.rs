use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential id, unique within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry of the chat log. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn is_from_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }

    pub fn label(&self, locale: &str) -> String {
        match self.sender {
            Sender::User => t!("chat.sender.user", locale = locale).into_owned(),
            Sender::Assistant => t!("chat.sender.assistant", locale = locale).into_owned(),
        }
    }
}
