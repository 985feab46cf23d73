use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        theme.status_bar(),
    ));

    // Context-sensitive key hints
    let hints: &[(&str, &str)] = if state.notice.is_some() {
        &[("Enter", "dismiss")]
    } else if state.confirm_delete.is_some() {
        &[("Enter", "delete"), ("Esc", "cancel")]
    } else if state.month_picker.visible || state.year_picker.visible {
        &[("↑↓", "move"), ("Enter", "select"), ("Esc", "close")]
    } else if state.expenses.editing().is_some() {
        &[("Enter", "update"), ("Esc", "cancel"), ("Tab", "focus")]
    } else {
        match state.focus {
            FocusPanel::List => &[
                ("↑↓", "move"),
                ("e", "edit"),
                ("d", "delete"),
                ("Tab", "focus"),
                ("q", "quit"),
            ],
            _ => &[
                ("Enter", "add"),
                ("Tab", "focus"),
                ("F2", "month"),
                ("F3", "year"),
                ("F4", "theme"),
            ],
        }
    };
    for (key, what) in hints {
        parts.push(Span::styled(format!(" {}", key), theme.status_key()));
        parts.push(Span::styled(format!(" {} ", what), theme.status_bar()));
    }

    // Focus indicator, right-aligned
    let focus_name = match state.focus {
        FocusPanel::TitleInput => "TITLE",
        FocusPanel::PriceInput => "PRICE",
        FocusPanel::List => "LIST",
    };
    let used: usize = parts.iter().map(|s| s.content.as_ref().width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        theme.status_key(),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
