use crate::app::state::{AppState, PickerState};
use crate::expenses::record::{MONTHS, YEARS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render_month(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.month_picker.visible {
        return;
    }
    let items: Vec<String> = MONTHS.iter().map(|m| m.name().to_string()).collect();
    render_picker(frame, " Select Month ", &items, &state.month_picker, theme);
}

pub fn render_year(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.year_picker.visible {
        return;
    }
    let items: Vec<String> = YEARS.iter().map(|y| y.to_string()).collect();
    render_picker(frame, " Select Year ", &items, &state.year_picker, theme);
}

/// Centered popup list over a fixed option set.
fn render_picker(
    frame: &mut Frame,
    title: &str,
    items: &[String],
    picker: &PickerState,
    theme: &Theme,
) {
    let area = frame.area();
    let popup_w = 24u16.min(area.width.saturating_sub(4));
    let popup_h = ((items.len() + 3) as u16).min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.popup_bg());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 {
        return;
    }

    // Last inner row is the key help line
    let list_h = (inner.height as usize).saturating_sub(1);
    let start = picker.scroll_offset;
    let end = (start + list_h).min(items.len());

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in items.iter().enumerate().take(end).skip(start) {
        let text = format!(
            " {:<width$}",
            item,
            width = (inner.width as usize).saturating_sub(2)
        );
        let style = if i == picker.selected {
            theme.picker_selected()
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    let list_area = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(1),
        list_h as u16,
    );
    frame.render_widget(Paragraph::new(lines), list_area);

    if items.len() > list_h {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            list_h as u16,
        );
        let mut scrollbar_state =
            ScrollbarState::new(items.len().saturating_sub(list_h)).position(picker.scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" ↑↓", theme.title()),
        Span::styled(" Move  ", theme.placeholder()),
        Span::styled("Enter", theme.title()),
        Span::styled(" Select  ", theme.placeholder()),
        Span::styled("Esc", theme.title()),
        Span::styled(" Close", theme.placeholder()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
