mod confirm;
mod expense_table;
mod form;
mod header;
mod layout;
mod notice;
mod picker;
mod selector_bar;
mod status_bar;
mod theme;
mod total_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.config.ui.dark_mode);
    let area = frame.area();

    // Base coat for the active color mode
    frame.render_widget(Block::default().style(theme.base()), area);

    let app_layout = layout::compute_layout(area);
    header::render(frame, app_layout.header, &theme);
    selector_bar::render(frame, &app_layout, state, &theme);
    form::render(frame, &app_layout, state, &theme);
    total_bar::render(frame, app_layout.total_line, state, &theme);
    expense_table::render(frame, app_layout.list, state, &theme);
    status_bar::render(frame, app_layout.status_bar, state, &theme);

    // Popups paint over the base screen; at most one is visible at a time
    picker::render_month(frame, state, &theme);
    picker::render_year(frame, state, &theme);
    confirm::render(frame, state, &theme);
    notice::render(frame, state, &theme);
}
