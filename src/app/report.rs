//! Plain-text renderings for the non-interactive commands.

use std::fmt::Write as _;

use crate::conversation::{ChatMessage, ChatStep, ReferenceProjection};
use crate::presentation::TOUR_STEPS;
use crate::process::ProcessBoard;
use crate::records::FeedbackRecord;
use crate::ui::style;

pub fn render_message(message: &ChatMessage, locale: &str) -> String {
    let label = message.label(locale);
    let label = if message.is_from_assistant() {
        style::accent(label)
    } else {
        style::value(label)
    };
    format!("{label}: {}", message.text)
}

pub fn render_transcript(messages: &[ChatMessage], locale: &str) -> String {
    let mut out = format!("{}\n", style::header(t!("report.transcript", locale = locale)));
    for message in messages {
        let _ = writeln!(out, "  {}", render_message(message, locale));
    }
    out
}

pub fn render_projection(step: ChatStep, projection: &ReferenceProjection, locale: &str) -> String {
    let mut out = format!("{}\n", style::header(t!("report.state", locale = locale)));
    let _ = writeln!(out, "  {}: {step}", style::cyan(t!("report.step", locale = locale)));
    let _ = writeln!(out, "  {}", style::header(&projection.title));
    for field in &projection.fields {
        let _ = writeln!(out, "  {}: {}", style::cyan(&field.label), field.value);
    }
    if let Some(note) = &projection.context_note {
        let _ = writeln!(out, "  {}", style::yellow(note));
    }
    out
}

pub fn render_record(record: &FeedbackRecord) -> String {
    format!(
        "{} · {} · {} · {}",
        style::value(&record.recipient_name),
        record.context,
        record.date_label(),
        style::dim(&record.author_label)
    )
}

pub fn render_records<'a>(
    records: impl ExactSizeIterator<Item = &'a FeedbackRecord>,
    locale: &str,
) -> String {
    let mut out = format!("{}\n", style::header(t!("panel.records", locale = locale)));
    if records.len() == 0 {
        let _ = writeln!(out, "  {}", style::dim(t!("panel.no_records", locale = locale)));
    }
    for record in records {
        let _ = writeln!(out, "  {}", render_record(record));
        let _ = writeln!(out, "    {}", record.feedback_text);
    }
    out
}

pub fn render_board(board: &ProcessBoard, locale: &str) -> String {
    let mut out = format!("{}\n", style::header(t!("panel.processes", locale = locale)));
    for step in board.steps() {
        let _ = writeln!(
            out,
            "  {}. {} [{}] {}",
            step.id,
            step.name,
            style::status(step.status, step.status.label(locale)),
            style::dim(&step.context)
        );
    }
    out
}

/// The guided tour as a numbered list with each step's anchor and placement.
pub fn render_tour(locale: &str) -> String {
    let mut out = format!("{}\n", style::header(t!("report.tour", locale = locale)));
    for (i, step) in TOUR_STEPS.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            style::accent(step.title(locale)),
            style::dim(format!("({}, {} {})", step.anchor, step.side, step.align))
        );
        let _ = writeln!(out, "     {}", step.body(locale));
    }
    out
}
