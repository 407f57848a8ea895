use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};

use crate::conversation::projection::feedback_preview;
use crate::presentation::{Anchor, Panel};
use crate::process::ProcessBoard;
use crate::records::{FeedbackRecord, RecordStore};

use super::super::theme;
use super::{AnchorMap, panel_block, wrapped};

const CARD_HEIGHT: u16 = 5;

pub struct DatabasePanel<'a> {
    pub records: &'a RecordStore,
    pub board: &'a ProcessBoard,
    pub locale: &'a str,
}

impl DatabasePanel<'_> {
    pub fn render(self, area: Rect, buf: &mut Buffer, anchors: &mut AnchorMap) {
        let block = panel_block(Panel::Database, self.locale);
        let inner = block.inner(area);
        block.render(area, buf);

        let process_height = self.board.steps().len() as u16 * 2 + 2;
        let [records_area, processes_area] = Layout::vertical([
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(process_height),
        ])
        .areas(inner);
        anchors.insert(Anchor::DatabaseBlock, records_area);
        anchors.insert(Anchor::DatabaseProcesses, processes_area);

        self.render_records(records_area, buf);
        self.render_processes(processes_area, buf);
    }

    fn render_records(&self, area: Rect, buf: &mut Buffer) {
        let block = sub_block(&t!("panel.records", locale = self.locale));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            let empty = t!("panel.no_records", locale = self.locale).into_owned();
            Line::from(Span::styled(empty, theme::dim_style())).render(inner, buf);
            return;
        }

        let mut y = inner.y;
        for record in self.records.list() {
            if y + CARD_HEIGHT > inner.y + inner.height {
                break;
            }
            let card = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
            let card_block = Block::bordered().border_style(theme::border_style());
            let card_inner = card_block.inner(card);
            card_block.render(card, buf);
            wrapped(card_lines(record)).render(card_inner, buf);
            y += CARD_HEIGHT;
        }
    }

    fn render_processes(&self, area: Rect, buf: &mut Buffer) {
        let block = sub_block(&t!("panel.processes", locale = self.locale));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.board.steps().len() * 2);
        for step in self.board.steps() {
            let style = theme::status_style(step.status);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", theme::status_marker(step.status)), style),
                Span::styled(step.name.clone(), theme::heading_style()),
                Span::raw(" "),
                Span::styled(format!("[{}]", step.status.label(self.locale)), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", step.context),
                theme::dim_style(),
            )));
        }
        wrapped(lines).render(inner, buf);
    }
}

fn card_lines(record: &FeedbackRecord) -> Vec<Line<'static>> {
    let preview = feedback_preview(&record.feedback_text);
    vec![
        Line::from(vec![
            Span::styled(record.recipient_name.clone(), theme::heading_style()),
            Span::styled(format!("  {}", record.date_label()), theme::dim_style()),
        ]),
        Line::from(Span::styled(record.context.clone(), theme::title_style())),
        Line::from(vec![
            Span::styled(preview, theme::input_style()),
            Span::styled(format!("  {}", record.author_label), theme::dim_style()),
        ]),
    ]
}

fn sub_block(title: &str) -> Block<'static> {
    Block::bordered()
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::heading_style()))
}
