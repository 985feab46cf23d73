use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub month_selector: Rect,
    pub year_selector: Rect,
    pub mode_indicator: Rect,
    pub title_input: Rect,
    pub price_input: Rect,
    pub total_line: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split, top to bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Month/year selectors
            Constraint::Length(3), // Title/price inputs
            Constraint::Length(1), // Running total
            Constraint::Min(4),    // Expense list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let selector_row = main_chunks[1];
    let form_row = main_chunks[2];
    let total_line = main_chunks[3];
    let list = main_chunks[4];
    let status_bar = main_chunks[5];

    // Selector row: month | year | dark-mode indicator
    let selector_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(18), // Month
            Constraint::Length(12), // Year
            Constraint::Min(10),    // Mode indicator
        ])
        .split(selector_row);

    let month_selector = selector_chunks[0];
    let year_selector = selector_chunks[1];
    let mode_indicator = selector_chunks[2];

    // Form row: wide title input, narrow price input
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(24),    // Title
            Constraint::Length(13), // Price
        ])
        .split(form_row);

    let title_input = form_chunks[0];
    let price_input = form_chunks[1];

    AppLayout {
        header,
        month_selector,
        year_selector,
        mode_indicator,
        title_input,
        price_input,
        total_line,
        list,
        status_bar,
    }
}
