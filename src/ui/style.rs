//! `console` styling for the line-mode chat and plain listings.

use console::style;
use std::fmt::Display;

use crate::process::ProcessStatus;

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, rejected-input notes
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, reference notes
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Cyan bold: the assistant's sender label
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Green: collected values, the user's sender label
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Process status label, colored like the status badges of the board.
pub fn status<D: Display>(status: ProcessStatus, text: D) -> String {
    let styled = style(text);
    match status {
        ProcessStatus::Paused => styled.yellow(),
        ProcessStatus::InProgress => styled.blue(),
        ProcessStatus::Done => styled.green(),
        ProcessStatus::DoneNegative => styled.red(),
    }
    .to_string()
}
