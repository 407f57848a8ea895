use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Widget};

use crate::presentation::{Align, Anchor, Panel, PresentationState, Side, TourStep};
use crate::process::Clock;

use super::panels::chat::ChatPanel;
use super::panels::database::DatabasePanel;
use super::panels::references::ReferencesPanel;
use super::panels::{AnchorMap, render_collapsed, styled_lines, wrapped};
use super::state::TuiState;
use super::theme;

const COLLAPSED_WIDTH: u16 = 3;
const POPOVER_WIDTH: u16 = 44;

pub(super) fn draw_ui<C: Clock>(area: Rect, buf: &mut Buffer, state: &TuiState<C>) {
    let locale = state.locale();
    let mut anchors = AnchorMap::new();

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(header, buf, state, &mut anchors);

    let panels = panel_areas(body, &state.presentation);
    for (panel, rect) in Panel::ALL.into_iter().zip(panels) {
        if state.presentation.collapsed.is_collapsed(panel) {
            render_collapsed(rect, buf, panel, locale);
            continue;
        }
        match panel {
            Panel::References => ReferencesPanel {
                projection: state.session.engine().projection(),
                locale,
            }
            .render(rect, buf, &mut anchors),
            Panel::Chat => {
                let placeholder = state.session.engine().placeholder();
                ChatPanel {
                    messages: state.session.engine().messages(),
                    pending: state.session.pending_text(),
                    input: &state.input,
                    placeholder: &placeholder,
                    input_enabled: state.input_enabled(),
                    typing: state.typing,
                    locale,
                }
                .render(rect, buf, &mut anchors);
            }
            Panel::Database => DatabasePanel {
                records: state.session.records(),
                board: state.session.board(),
                locale,
            }
            .render(rect, buf, &mut anchors),
        }
    }

    let keys = if state.tour.is_active() {
        t!("panel.tour_keys", locale = locale)
    } else {
        t!("panel.keys", locale = locale)
    };
    Line::from(Span::styled(format!("  {keys}"), theme::keybinding_style())).render(footer, buf);

    if let Some(step) = state.tour.current()
        && let Some(target) = anchors.get(&step.anchor)
    {
        let (current, total) = state.tour.progress();
        render_tour(area, buf, step, *target, (current, total), locale);
    }
}

fn render_header<C: Clock>(
    area: Rect,
    buf: &mut Buffer,
    state: &TuiState<C>,
    anchors: &mut AnchorMap,
) {
    let locale = state.locale();
    let title = Line::from(Span::styled("  Insight", theme::title_style()));
    title.render(Rect::new(area.x, area.y, area.width, 1), buf);

    let mut actions = vec![Span::styled("Ctrl+A ", theme::dim_style())];
    if state.presentation.assistance_mode {
        actions.push(Span::styled(
            t!("chat.assistance_active", locale = locale).into_owned(),
            theme::warning_style(),
        ));
    } else {
        actions.push(Span::styled("?", theme::heading_style()));
    }
    actions.push(Span::styled("  Ctrl+N ", theme::dim_style()));
    actions.push(Span::styled("+", theme::heading_style()));
    let actions = Line::from(actions);

    let width = (actions.width() as u16 + 2).min(area.width);
    let actions_area = Rect::new(area.right() - width, area.y, width, 1);
    anchors.insert(Anchor::HeaderActions, actions_area);
    actions.render(actions_area, buf);

    let sep = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        theme::dim_style(),
    ));
    if area.height > 1 {
        sep.render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

/// Split the body into the three panel columns. Collapsed panels shrink to
/// a fixed strip; expanded ones share the rest, chat taking the larger part.
fn panel_areas(body: Rect, presentation: &PresentationState) -> Vec<Rect> {
    let constraints = Panel::ALL.map(|panel| {
        if presentation.collapsed.is_collapsed(panel) {
            Constraint::Length(COLLAPSED_WIDTH)
        } else if panel == Panel::Chat {
            Constraint::Fill(4)
        } else {
            Constraint::Fill(3)
        }
    });
    Layout::horizontal(constraints).split(body).to_vec()
}

fn render_tour(
    screen: Rect,
    buf: &mut Buffer,
    step: &TourStep,
    target: Rect,
    (current, total): (usize, usize),
    locale: &str,
) {
    Block::bordered()
        .border_style(theme::highlight_border_style())
        .render(target, buf);

    let width = POPOVER_WIDTH.min(screen.width);
    let mut lines: Vec<Line> = styled_lines(&step.body(locale), theme::input_style()).collect();
    let body_rows = wrapped(lines.clone()).line_count(width.saturating_sub(2));
    let height = u16::try_from(body_rows + 4).unwrap_or(u16::MAX).min(screen.height);
    let popover = place_popover(screen, target, width, height, step.side, step.align);

    Clear.render(popover, buf);
    let block = Block::bordered()
        .border_style(theme::highlight_border_style())
        .title(Span::styled(
            format!(" {} ", step.title(locale)),
            theme::title_style(),
        ));
    let inner = block.inner(popover);
    block.render(popover, buf);

    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            t!(
                "panel.tour_progress",
                locale = locale,
                current = current,
                total = total
            )
            .into_owned(),
            theme::dim_style(),
        ))
        .right_aligned(),
    );
    wrapped(lines).render(inner, buf);
}

/// Position a `width`×`height` box on `side` of `target`, aligned along
/// that side, then clamped inside `screen`.
fn place_popover(screen: Rect, target: Rect, width: u16, height: u16, side: Side, align: Align) -> Rect {
    let along = |start: u16, len: u16, size: u16| -> u16 {
        match align {
            Align::Start => start,
            Align::Center => (start + len / 2).saturating_sub(size / 2),
            Align::End => (start + len).saturating_sub(size),
        }
    };

    let (x, y) = match side {
        Side::Bottom => (along(target.x, target.width, width), target.bottom()),
        Side::Top => (
            along(target.x, target.width, width),
            target.y.saturating_sub(height),
        ),
        Side::Right => (target.right(), along(target.y, target.height, height)),
        Side::Left => (
            target.x.saturating_sub(width),
            along(target.y, target.height, height),
        ),
    };

    let max_x = screen.right().saturating_sub(width).max(screen.x);
    let max_y = screen.bottom().saturating_sub(height).max(screen.y);
    Rect::new(
        x.clamp(screen.x, max_x),
        y.clamp(screen.y, max_y),
        width.min(screen.width),
        height.min(screen.height),
    )
}
