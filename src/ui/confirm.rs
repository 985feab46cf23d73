use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let Some(index) = state.confirm_delete else {
        return;
    };
    let Some(record) = state.expenses.records().get(index) else {
        return;
    };

    let question = "Are you sure you want to delete this item?";
    let entry = format!("{} (${})", record.title, record.price);

    let area = frame.area();
    let popup_w = ((question.len() + 4) as u16).min(area.width.saturating_sub(4));
    let popup_h = 7u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_style(theme.confirm_delete())
        .borders(Borders::ALL)
        .border_style(theme.confirm_delete())
        .style(theme.popup_bg());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::raw(question)).centered(),
        Line::from(Span::styled(entry, theme.title())).centered(),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter] Delete", theme.confirm_delete()),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", theme.confirm_keep()),
        ])
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
