pub mod chat;
pub mod database;
pub mod references;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::presentation::{Anchor, Panel};

use super::theme;

/// Screen rectangles of the tour anchors, filled while drawing a frame.
pub type AnchorMap = HashMap<Anchor, Rect>;

/// Bordered block of an expanded panel, titled with its toggle key.
pub(super) fn panel_block(panel: Panel, locale: &str) -> Block<'static> {
    Block::bordered()
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" {} ({}) ", panel.title(locale), toggle_key(panel)),
            theme::title_style(),
        ))
}

/// A collapsed panel: a narrow strip with its title written top to bottom.
pub(super) fn render_collapsed(area: Rect, buf: &mut Buffer, panel: Panel, locale: &str) {
    let block = Block::bordered().border_style(theme::border_style());
    let inner = block.inner(area);
    block.render(area, buf);

    let label = format!("{} {}", toggle_key(panel), panel.title(locale));
    for (row, ch) in label.chars().take(inner.height as usize).enumerate() {
        Line::from(Span::styled(ch.to_string(), theme::dim_style()))
            .render(Rect::new(inner.x, inner.y + row as u16, inner.width, 1), buf);
    }
}

fn toggle_key(panel: Panel) -> &'static str {
    match panel {
        Panel::References => "F1",
        Panel::Chat => "F2",
        Panel::Database => "F3",
    }
}

/// Word-wrapped paragraph over `lines`. Wrapping counts display columns and
/// keeps the whitespace of the text as written.
pub(super) fn wrapped<'a>(lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Lines of `text`, one per `\n`, all in `style`.
pub(super) fn styled_lines(text: &str, style: Style) -> impl Iterator<Item = Line<'static>> {
    text.split('\n')
        .map(move |row| Line::from(Span::styled(row.to_string(), style)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(paragraph: Paragraph<'_>, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        paragraph.render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn wide_glyphs_wrap_by_display_width() {
        let text = "田中太郎さんへ素晴らしい仕事でした本当に";
        let rows = rendered(wrapped(styled_lines(text, Style::default()).collect()), 10, 6);
        let shown: String = rows.concat().chars().filter(|c| *c != ' ').collect();
        assert_eq!(shown, text);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let rows = rendered(wrapped(styled_lines("a   b", Style::default()).collect()), 20, 1);
        assert!(rows[0].starts_with("a   b"));
    }

    #[test]
    fn newlines_start_new_rows() {
        let rows = rendered(wrapped(styled_lines("uno\ndos", Style::default()).collect()), 20, 2);
        assert!(rows[0].starts_with("uno"));
        assert!(rows[1].starts_with("dos"));
    }
}
