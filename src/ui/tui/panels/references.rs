use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::conversation::ReferenceProjection;
use crate::presentation::{Anchor, KnowledgeSource, Panel, VISIBLE_SOURCES, knowledge_sources};

use super::super::theme;
use super::{AnchorMap, panel_block, styled_lines, wrapped};

pub struct ReferencesPanel<'a> {
    pub projection: &'a ReferenceProjection,
    pub locale: &'a str,
}

impl ReferencesPanel<'_> {
    pub fn render(self, area: Rect, buf: &mut Buffer, anchors: &mut AnchorMap) {
        anchors.insert(Anchor::SectionReferences, area);
        let block = panel_block(Panel::References, self.locale);
        let inner = block.inner(area);
        block.render(area, buf);

        let sources = knowledge_sources();
        let knowledge_height = knowledge_rows(sources.len()) + 2;
        let [context_area, knowledge_area] = Layout::vertical([
            Constraint::Min(4),
            Constraint::Length(knowledge_height),
        ])
        .areas(inner);

        anchors.insert(Anchor::ReferenceContext, context_area);
        anchors.insert(Anchor::ReferenceKnowledge, knowledge_area);
        self.render_context(context_area, buf);
        render_knowledge(knowledge_area, buf, sources, self.locale);
    }

    fn render_context(&self, area: Rect, buf: &mut Buffer) {
        let block = sub_block(&t!("panel.chat_context", locale = self.locale));
        let inner = block.inner(area);
        block.render(area, buf);

        wrapped(context_lines(self.projection)).render(inner, buf);
    }
}

fn context_lines(projection: &ReferenceProjection) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        projection.title.clone(),
        theme::heading_style(),
    ))];
    if let Some(description) = &projection.description {
        lines.extend(styled_lines(description, theme::dim_style()));
    }
    lines.push(Line::default());
    for field in &projection.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), theme::title_style()),
            Span::styled(field.value.clone(), theme::input_style()),
        ]));
    }
    if let Some(note) = &projection.context_note {
        lines.push(Line::default());
        lines.extend(styled_lines(note, theme::warning_style()));
    }
    lines
}

fn render_knowledge(area: Rect, buf: &mut Buffer, sources: &[KnowledgeSource], locale: &str) {
    let block = sub_block(&t!("panel.knowledge", locale = locale));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = knowledge_lines(sources, locale)
        .into_iter()
        .map(|(text, dim)| {
            let style = if dim {
                theme::dim_style()
            } else {
                theme::input_style()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

/// Rows of the knowledge list: up to `VISIBLE_SOURCES` entries, then a
/// summary of the rest. The flag marks secondary text.
fn knowledge_lines(sources: &[KnowledgeSource], locale: &str) -> Vec<(String, bool)> {
    if sources.is_empty() {
        return vec![(t!("panel.no_sources", locale = locale).into_owned(), true)];
    }
    let mut lines: Vec<(String, bool)> = sources
        .iter()
        .take(VISIBLE_SOURCES)
        .map(|source| {
            let meta: Vec<&str> = [source.size, source.date].into_iter().flatten().collect();
            if meta.is_empty() {
                (format!("📄 {}", source.name), false)
            } else {
                (format!("📄 {} ({})", source.name, meta.join(" · ")), false)
            }
        })
        .collect();
    let hidden = sources.len().saturating_sub(VISIBLE_SOURCES);
    if hidden > 0 {
        lines.push((
            t!("panel.more_sources", locale = locale, count = hidden).into_owned(),
            true,
        ));
    }
    lines
}

fn knowledge_rows(count: usize) -> u16 {
    match count {
        0 => 1,
        n if n > VISIBLE_SOURCES => VISIBLE_SOURCES as u16 + 1,
        n => n as u16,
    }
}

fn sub_block(title: &str) -> Block<'static> {
    Block::bordered()
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::heading_style()))
}
