use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let label = " Total Expenditures:";
    let total = format!("${} ", state.expenses.total());

    let pad = (area.width as usize).saturating_sub(label.len() + total.len());
    let line = Line::from(vec![
        Span::styled(label, theme.total()),
        Span::raw(" ".repeat(pad)),
        Span::styled(total, theme.total()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
