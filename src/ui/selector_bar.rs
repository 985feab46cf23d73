use crate::app::state::AppState;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState, theme: &Theme) {
    render_dropdown(
        frame,
        layout.month_selector,
        " Month (F2) ",
        state.selected_month.name(),
        state.month_picker.visible,
        theme,
    );
    render_dropdown(
        frame,
        layout.year_selector,
        " Year (F3) ",
        &state.selected_year.to_string(),
        state.year_picker.visible,
        theme,
    );

    let mode = if state.config.ui.dark_mode { "on" } else { "off" };
    let indicator = Paragraph::new(Line::from(vec![
        Span::styled("Dark mode: ", theme.placeholder()),
        Span::styled(mode, theme.selector()),
        Span::styled("  (F4)", theme.placeholder()),
    ]))
    .right_aligned();
    // Vertically center the indicator within the 3-row selector band
    let y = layout.mode_indicator.y + layout.mode_indicator.height / 2;
    let centered = Rect::new(
        layout.mode_indicator.x,
        y,
        layout.mode_indicator.width.saturating_sub(1),
        1,
    );
    frame.render_widget(indicator, centered);
}

fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    open: bool,
    theme: &Theme,
) {
    let border = if open {
        theme.border_focused()
    } else {
        theme.border()
    };
    let block = Block::default()
        .title(label)
        .title_style(theme.border())
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(value, theme.selector()),
        Span::styled(" ▾", theme.placeholder()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
