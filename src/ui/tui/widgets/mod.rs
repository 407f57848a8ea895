pub mod text_input;
pub mod typing;

pub use text_input::{TextInput, TextInputWidget};
pub use typing::{TypingIndicator, TypingWidget};
