use ratatui::style::{Color, Modifier, Style};

use crate::process::ProcessStatus;

pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
pub const INFO: Color = Color::Blue;
pub const DIM: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}

pub fn input_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn cursor_style() -> Style {
    Style::default().fg(Color::Black).bg(TEXT)
}

pub fn border_style() -> Style {
    Style::default().fg(DIM)
}

pub fn highlight_border_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn user_message_style() -> Style {
    Style::default().fg(Color::Black).bg(TEXT)
}

pub fn assistant_message_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn warning_style() -> Style {
    Style::default().fg(WARNING)
}

pub fn keybinding_style() -> Style {
    Style::default().fg(DIM)
}

pub fn status_style(status: ProcessStatus) -> Style {
    let color = match status {
        ProcessStatus::Paused => WARNING,
        ProcessStatus::InProgress => INFO,
        ProcessStatus::Done => ACCENT,
        ProcessStatus::DoneNegative => ERROR,
    };
    Style::default().fg(color)
}

pub fn status_marker(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Paused => "⏸",
        ProcessStatus::InProgress => "▶",
        ProcessStatus::Done => "✔",
        ProcessStatus::DoneNegative => "✖",
    }
}
