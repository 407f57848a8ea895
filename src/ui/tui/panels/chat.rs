use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::conversation::{ChatMessage, Sender};
use crate::presentation::{Anchor, Panel};

use super::super::theme;
use super::super::widgets::{TextInput, TextInputWidget, TypingIndicator, TypingWidget};
use super::{AnchorMap, panel_block, styled_lines, wrapped};

pub struct ChatPanel<'a> {
    pub messages: &'a [ChatMessage],
    /// Submitted text still waiting for its reply.
    pub pending: Option<&'a str>,
    pub input: &'a TextInput,
    pub placeholder: &'a str,
    pub input_enabled: bool,
    pub typing: TypingIndicator,
    pub locale: &'a str,
}

impl ChatPanel<'_> {
    pub fn render(self, area: Rect, buf: &mut Buffer, anchors: &mut AnchorMap) {
        let block = panel_block(Panel::Chat, self.locale);
        let inner = block.inner(area);
        block.render(area, buf);

        let [messages_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);
        anchors.insert(Anchor::ChatMessages, messages_area);
        anchors.insert(Anchor::ChatInput, input_area);

        self.render_messages(messages_area, buf);

        let input_block = Block::bordered().border_style(if self.input_enabled {
            theme::highlight_border_style()
        } else {
            theme::border_style()
        });
        let input_inner = input_block.inner(input_area);
        input_block.render(input_area, buf);
        TextInputWidget::new(self.input, self.placeholder, self.input_enabled)
            .render(input_inner, buf);
    }

    fn render_messages(&self, area: Rect, buf: &mut Buffer) {
        if self.messages.is_empty() && self.pending.is_none() {
            let empty = t!("chat.empty", locale = self.locale);
            Line::from(Span::styled(empty.into_owned(), theme::dim_style()))
                .centered()
                .render(Rect::new(area.x, area.y + area.height / 2, area.width, 1), buf);
            return;
        }

        let (log_area, typing_area) = if self.pending.is_some() && area.height > 1 {
            let [log, typing] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
            (log, Some(typing))
        } else {
            (area, None)
        };

        transcript(self.messages, self.pending, log_area, self.locale).render(log_area, buf);

        if let Some(typing_area) = typing_area {
            let thinking = t!("chat.thinking", locale = self.locale);
            TypingWidget::new(self.typing, &thinking).render(typing_area, buf);
        }
    }
}

/// The wrapped transcript, scrolled so its last row sits at the bottom of
/// `area`.
fn transcript(
    messages: &[ChatMessage],
    pending: Option<&str>,
    area: Rect,
    locale: &str,
) -> Paragraph<'static> {
    let paragraph = wrapped(transcript_lines(messages, pending, locale));
    let overflow = paragraph
        .line_count(area.width)
        .saturating_sub(area.height as usize);
    paragraph.scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0))
}

fn transcript_lines(
    messages: &[ChatMessage],
    pending: Option<&str>,
    locale: &str,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let entries = messages
        .iter()
        .map(|m| (m.sender, m.text.as_str()))
        .chain(pending.map(|text| (Sender::User, text)));

    for (sender, text) in entries {
        let (label, style) = match sender {
            Sender::User => (
                t!("chat.sender.user", locale = locale),
                theme::user_message_style(),
            ),
            Sender::Assistant => (
                t!("chat.sender.assistant", locale = locale),
                theme::assistant_message_style(),
            ),
        };
        lines.push(Line::from(Span::styled(
            label.into_owned(),
            theme::dim_style(),
        )));
        lines.extend(styled_lines(text, style));
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationEngine;

    #[test]
    fn pending_text_is_shown_as_a_user_message() {
        let mut engine = ConversationEngine::new("en");
        engine.open();
        let lines = transcript_lines(engine.messages(), Some("Ana"), "en");
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(rendered.iter().any(|l| l == "You"));
        assert!(rendered.iter().any(|l| l.trim() == "Ana"));
    }

    #[test]
    fn each_message_gets_label_body_and_gap() {
        let mut engine = ConversationEngine::new("en");
        engine.open();
        let lines = transcript_lines(engine.messages(), None, "en");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "Assistant");
    }

    fn visible(paragraph: Paragraph<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        paragraph.render(area, &mut buf);
        (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn wide_names_are_shown_in_full() {
        let name = "田中太郎さんへ素晴らしい仕事でした本当に";
        let area = Rect::new(0, 0, 22, 12);
        let shown: String = visible(transcript(&[], Some(name), area, "en"), area)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(shown.contains(name), "{shown}");
    }

    #[test]
    fn long_transcript_keeps_the_newest_rows_in_view() {
        let mut engine = ConversationEngine::new("en");
        engine.open();
        engine.submit("Ana").unwrap();
        engine.submit("Quarterly review").unwrap();
        let area = Rect::new(0, 0, 30, 4);
        let shown = visible(
            transcript(engine.messages(), Some("the latest draft"), area, "en"),
            area,
        );
        assert!(shown.contains("the latest draft"));
        assert!(!shown.contains("Assistant"));
    }
}
