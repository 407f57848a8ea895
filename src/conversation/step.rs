use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Position of the conversation in the feedback script.
///
/// The chain is linear except for `WaitingRestart`, which loops back to
/// `AskingName` or forks into the terminal `Completed`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChatStep {
    #[default]
    Greeting,
    AskingName,
    AskingContext,
    AskingFeedback,
    WaitingRestart,
    Completed,
}

impl ChatStep {
    /// `false` only once the conversation is over; the input bar is disabled.
    pub fn accepts_input(self) -> bool {
        self != Self::Completed
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }
}
