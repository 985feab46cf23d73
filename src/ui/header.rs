use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(Span::styled("Expenses Log", theme.title())).centered();
    frame.render_widget(Paragraph::new(line), area);
}
