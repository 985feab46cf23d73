use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Blocking notice popup for validation failures.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let Some(text) = &state.notice else {
        return;
    };

    let area = frame.area();
    let popup_w = ((text.width().max(24) + 4) as u16).min(area.width.saturating_sub(4));
    let popup_h = 5u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Notice ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.notice_text())
        .style(theme.popup_bg());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(Span::styled(text.as_str(), theme.notice_text())).centered(),
        Line::raw(""),
        Line::from(Span::styled("Press Enter to continue", theme.placeholder())).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
