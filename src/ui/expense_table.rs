use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::List;
    let block = Block::default()
        .title(" Expenses ")
        .title_style(if focused { theme.title() } else { theme.border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .style(theme.list_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let records = state.expenses.records();
    if records.is_empty() {
        let hint = Line::from(Span::styled("No Item in the List", theme.empty_hint())).centered();
        frame.render_widget(Paragraph::new(hint), inner);
        return;
    }

    // Two rows per record: the entry line and its date line
    let visible = (inner.height as usize) / 2;
    if visible == 0 {
        return;
    }
    let start = if state.list_selected >= visible {
        state.list_selected + 1 - visible
    } else {
        0
    };
    let end = (start + visible).min(records.len());
    let width = inner.width.saturating_sub(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, rec) in records.iter().enumerate().take(end).skip(start) {
        let head = format!(" {}: {}", i + 1, rec.title);
        let price = format!("${} ", rec.price);
        let pad = width.saturating_sub(head.width() + price.width());
        let row = format!("{}{}{}", head, " ".repeat(pad), price);

        let style = if focused && i == state.list_selected {
            theme.item_selected()
        } else {
            theme.item_title()
        };
        lines.push(Line::from(Span::styled(row, style)));

        let date = rec.date_line(&state.config.ui.timestamp_format);
        let dpad = width.saturating_sub(date.width() + 1);
        lines.push(Line::from(Span::styled(
            format!("{}{} ", " ".repeat(dpad), date),
            theme.item_date(),
        )));
    }

    let list_area = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(1),
        inner.height,
    );
    frame.render_widget(Paragraph::new(lines), list_area);

    if records.len() > visible {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            inner.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(records.len().saturating_sub(visible)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}
