use crate::app::state::{AppState, FieldState, FocusPanel};
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState, theme: &Theme) {
    let title_label = if state.expenses.editing().is_some() {
        " Edit Expense "
    } else {
        " New Expense "
    };
    render_field(
        frame,
        layout.title_input,
        &state.form.title,
        title_label,
        "Title",
        state.focus == FocusPanel::TitleInput,
        theme,
    );
    render_field(
        frame,
        layout.price_input,
        &state.form.price,
        " Price ",
        "00",
        state.focus == FocusPanel::PriceInput,
        theme,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    label: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let (border_style, title_style) = if focused {
        (theme.border_focused(), theme.title())
    } else {
        (theme.border(), theme.border())
    };

    let block = Block::default()
        .title(label)
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if field.text.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder).style(theme.placeholder()),
            inner,
        );
    } else {
        frame.render_widget(
            Paragraph::new(field.text.as_str()).style(theme.input_text()),
            inner,
        );
    }

    if focused && inner.width > 0 {
        let cursor_x = inner.x + field.text[..field.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
