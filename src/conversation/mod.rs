//! Scripted feedback conversation: step machine, message log and the
//! reference-panel projection derived from it.

pub mod engine;
pub mod message;
pub mod projection;
pub mod state;
pub mod step;
mod transition;

pub use engine::{ConversationEngine, Turn};
pub use message::{ChatMessage, MessageId, Sender};
pub use projection::{ReferenceField, ReferenceProjection};
pub use state::{Collected, ConversationState};
pub use step::ChatStep;
