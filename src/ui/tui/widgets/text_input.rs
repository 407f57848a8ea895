use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::theme;

/// Single-line chat input with cursor navigation. `cursor` is a byte offset
/// that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.value.len(), |(i, _)| self.cursor + i);
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.value.len(), |(i, _)| self.cursor + i);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the current text out, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Renders a `TextInput` on one line, or its placeholder when empty.
pub struct TextInputWidget<'a> {
    pub input: &'a TextInput,
    pub placeholder: &'a str,
    pub enabled: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, placeholder: &'a str, enabled: bool) -> Self {
        Self {
            input,
            placeholder,
            enabled,
        }
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let prompt = Span::styled("› ", theme::title_style());
        let line = if self.input.value.is_empty() {
            let cursor = if self.enabled {
                Span::styled(" ", theme::cursor_style())
            } else {
                Span::raw("")
            };
            Line::from(vec![
                prompt,
                cursor,
                Span::styled(self.placeholder, theme::dim_style()),
            ])
        } else {
            let (before, at_cursor, after) = split_at_cursor(&self.input.value, self.input.cursor);
            Line::from(vec![
                prompt,
                Span::styled(before, theme::input_style()),
                Span::styled(at_cursor, theme::cursor_style()),
                Span::styled(after, theme::input_style()),
            ])
        };
        line.render(area, buf);
    }
}

fn split_at_cursor(display: &str, cursor: usize) -> (String, String, String) {
    let chars: Vec<char> = display.chars().collect();
    let char_cursor = display[..cursor.min(display.len())].chars().count();

    let before: String = chars[..char_cursor].iter().collect();
    let at: String = if char_cursor < chars.len() {
        chars[char_cursor].to_string()
    } else {
        " ".to_string()
    };
    let after: String = if char_cursor + 1 < chars.len() {
        chars[char_cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    (before, at, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut input = TextInput::new();
        for ch in "sí".chars() {
            input.insert(ch);
        }
        assert_eq!(input.cursor, "sí".len());
        input.move_left();
        input.insert('x');
        assert_eq!(input.value, "sxí");
        input.end();
        input.backspace();
        assert_eq!(input.value, "sx");
        input.home();
        input.delete();
        assert_eq!(input.value, "x");
    }

    #[test]
    fn take_empties_the_input() {
        let mut input = TextInput::new();
        input.insert('a');
        assert_eq!(input.take(), "a");
        assert!(input.is_blank());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn split_marks_cursor_cell() {
        assert_eq!(
            split_at_cursor("año", 1),
            ("a".into(), "ñ".into(), "o".into())
        );
        assert_eq!(split_at_cursor("ab", 2), ("ab".into(), " ".into(), String::new()));
    }
}
