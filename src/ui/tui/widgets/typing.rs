use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::theme;

/// Dots lit per phase; the last phase is blank so the run restarts visibly.
const PHASES: [usize; 4] = [1, 2, 3, 0];
const DOTS: usize = 3;

/// "The assistant is typing" dots, stepped once per idle poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingIndicator {
    phase: usize,
}

impl TypingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.phase = (self.phase + 1) % PHASES.len();
    }

    fn lit(self) -> usize {
        PHASES[self.phase]
    }
}

pub struct TypingWidget<'a> {
    indicator: TypingIndicator,
    label: &'a str,
}

impl<'a> TypingWidget<'a> {
    pub fn new(indicator: TypingIndicator, label: &'a str) -> Self {
        Self { indicator, label }
    }
}

impl Widget for TypingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let lit = self.indicator.lit();
        Line::from(vec![
            Span::styled("●".repeat(lit), theme::title_style()),
            Span::styled("·".repeat(DOTS - lit), theme::dim_style()),
            Span::raw(" "),
            Span::styled(self.label, theme::dim_style()),
        ])
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(indicator: TypingIndicator) -> String {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        TypingWidget::new(indicator, "typing").render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn dots_fill_up_then_clear() {
        let mut indicator = TypingIndicator::new();
        let mut rows = Vec::new();
        for _ in 0..=PHASES.len() {
            rows.push(row(indicator));
            indicator.advance();
        }
        assert_eq!(rows[0], "●·· typing  ");
        assert_eq!(rows[2], "●●● typing  ");
        assert_eq!(rows[3], "··· typing  ");
        assert_eq!(rows[4], rows[0]);
    }
}
