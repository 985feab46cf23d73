use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::expenses::record::{MONTHS, YEARS};

/// Rows visible inside a picker popup before scrolling kicks in.
const PICKER_ROWS: usize = 12;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // A blocking notice captures all input until dismissed
    if state.notice.is_some() {
        return handle_notice_key(state, key);
    }

    // Delete confirmation captures all input while pending
    if state.confirm_delete.is_some() {
        return handle_confirm_key(state, key);
    }

    // Pickers capture all input when visible
    if state.month_picker.visible {
        return handle_month_picker_key(state, key);
    }
    if state.year_picker.visible {
        return handle_year_picker_key(state, key);
    }

    match key.code {
        // F2/F3 open the month/year pickers on the current selection
        KeyCode::F(2) => {
            let current = state.month_index();
            state.month_picker.open(current);
            vec![]
        }
        KeyCode::F(3) => {
            let current = state.year_index();
            state.year_picker.open(current);
            vec![]
        }
        // F4 toggles dark mode and persists the choice
        KeyCode::F(4) => {
            state.config.ui.dark_mode = !state.config.ui.dark_mode;
            vec![Action::PersistConfig]
        }
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        _ => match state.focus {
            FocusPanel::TitleInput | FocusPanel::PriceInput => handle_field_key(state, key),
            FocusPanel::List => handle_list_key(state, key),
        },
    }
}

fn handle_notice_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        state.notice = None;
    }
    vec![]
}

fn handle_confirm_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => delete_confirmed(state),
        KeyCode::Esc | KeyCode::Char('n') => state.confirm_delete = None,
        _ => {}
    }
    vec![]
}

fn delete_confirmed(state: &mut AppState) {
    if let Some(index) = state.confirm_delete.take() {
        let was_editing = state.expenses.editing();
        if let Some(removed) = state.expenses.remove(index) {
            state.record_journal(JournalKind::Removed, &removed.title, &removed.price);
            if was_editing == Some(index) {
                // The record under edit is gone; fall back to add mode.
                state.form.clear();
            }
            state.clamp_list_selection();
        }
    }
}

fn handle_month_picker_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = MONTHS.len();
    match key.code {
        KeyCode::Esc => state.month_picker.close(),
        KeyCode::Up => {
            state.month_picker.move_up();
            state.month_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Down => {
            state.month_picker.move_down(total);
            state.month_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Home => {
            state.month_picker.selected = 0;
            state.month_picker.scroll_offset = 0;
        }
        KeyCode::End => {
            state.month_picker.selected = total - 1;
            state.month_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Enter => {
            state.selected_month = MONTHS[state.month_picker.selected];
            state.month_picker.close();
        }
        _ => {}
    }
    vec![]
}

fn handle_year_picker_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = YEARS.len();
    match key.code {
        KeyCode::Esc => state.year_picker.close(),
        KeyCode::Up => {
            state.year_picker.move_up();
            state.year_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Down => {
            state.year_picker.move_down(total);
            state.year_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Home => {
            state.year_picker.selected = 0;
            state.year_picker.scroll_offset = 0;
        }
        KeyCode::End => {
            state.year_picker.selected = total - 1;
            state.year_picker.ensure_visible(PICKER_ROWS);
        }
        KeyCode::Enter => {
            state.selected_year = YEARS[state.year_picker.selected];
            state.year_picker.close();
        }
        _ => {}
    }
    vec![]
}

fn handle_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Esc => {
            // Cancel an edit in progress; otherwise Esc does nothing here
            if state.expenses.editing().is_some() {
                state.expenses.cancel_edit();
                state.form.clear();
                state.focus = FocusPanel::TitleInput;
            }
        }
        KeyCode::Backspace => field_mut(state).delete_back(),
        KeyCode::Delete => field_mut(state).delete_forward(),
        KeyCode::Left => field_mut(state).move_left(),
        KeyCode::Right => field_mut(state).move_right(),
        KeyCode::Home => field_mut(state).move_home(),
        KeyCode::End => field_mut(state).move_end(),
        KeyCode::Char(c) => {
            // The price field only takes digits and a decimal point
            if state.focus == FocusPanel::PriceInput && !(c.is_ascii_digit() || c == '.') {
                return vec![];
            }
            field_mut(state).insert_char(c);
        }
        _ => {}
    }
    vec![]
}

fn field_mut(state: &mut AppState) -> &mut FieldState {
    match state.focus {
        FocusPanel::PriceInput => &mut state.form.price,
        _ => &mut state.form.title,
    }
}

/// Submit the form: append a new record, or replace the one under edit.
/// A validation failure becomes a blocking notice and changes nothing else.
fn submit(state: &mut AppState) {
    let title = state.form.title.text.clone();
    let price = state.form.price.text.clone();
    let editing = state.expenses.editing().is_some();

    let result = if editing {
        state
            .expenses
            .update(&title, &price, state.selected_month, state.selected_year)
    } else {
        state
            .expenses
            .add(&title, &price, state.selected_month, state.selected_year)
    };

    match result {
        Ok(()) => {
            let kind = if editing {
                JournalKind::Updated
            } else {
                JournalKind::Added
            };
            state.record_journal(kind, title.trim(), &price);
            state.form.clear();
            state.focus = FocusPanel::TitleInput;
            if !editing {
                state.list_selected = state.expenses.len() - 1;
            }
        }
        Err(err) => state.notice = Some(err.to_string()),
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.select_prev_record(),
        KeyCode::Down => state.select_next_record(),
        KeyCode::Home => state.list_selected = 0,
        KeyCode::End => {
            if !state.expenses.is_empty() {
                state.list_selected = state.expenses.len() - 1;
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => begin_edit(state),
        KeyCode::Delete | KeyCode::Char('d') => {
            if !state.expenses.is_empty() {
                state.confirm_delete = Some(state.list_selected);
            }
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

/// Load the selected record into the form and switch to edit mode.
fn begin_edit(state: &mut AppState) {
    let index = state.list_selected;
    if let Some(rec) = state.expenses.begin_edit(index) {
        let month = rec.month;
        let year = rec.year;
        state.form.load(rec);
        state.selected_month = month;
        state.selected_year = year;
        state.focus = FocusPanel::TitleInput;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::Month;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    /// Type a title and price into the form and submit with Enter.
    fn add_expense(state: &mut AppState, title: &str, price: &str) {
        state.focus = FocusPanel::TitleInput;
        state.form.clear();
        type_str(state, title);
        state.focus = FocusPanel::PriceInput;
        type_str(state, price);
        handle_key(state, key(KeyCode::Enter));
    }

    fn focus_list(state: &mut AppState) {
        while state.focus != FocusPanel::List {
            handle_key(state, key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_typing_routes_to_focused_field() {
        let mut s = state();
        type_str(&mut s, "Coffee");
        assert_eq!(s.form.title.text, "Coffee");
        handle_key(&mut s, key(KeyCode::Tab));
        type_str(&mut s, "12");
        assert_eq!(s.form.price.text, "12");
        assert_eq!(s.form.title.text, "Coffee");
    }

    #[test]
    fn test_price_field_rejects_non_numeric() {
        let mut s = state();
        s.focus = FocusPanel::PriceInput;
        type_str(&mut s, "1a2.b5");
        assert_eq!(s.form.price.text, "12.5");
    }

    #[test]
    fn test_enter_adds_record_and_clears_form() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        assert_eq!(s.expenses.len(), 1);
        assert_eq!(s.expenses.records()[0].title, "Coffee");
        assert!(s.form.title.text.is_empty());
        assert!(s.form.price.text.is_empty());
        assert_eq!(s.focus, FocusPanel::TitleInput);
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_validation_failure_raises_blocking_notice() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "05");
        assert!(s.expenses.is_empty());
        assert_eq!(s.notice.as_deref(), Some("Price cannot start with 0."));
        // The form keeps its contents so the user can retry
        assert_eq!(s.form.price.text, "05");
        // The notice swallows keystrokes until dismissed
        handle_key(&mut s, key(KeyCode::Char('x')));
        assert_eq!(s.form.title.text, "Coffee");
        handle_key(&mut s, key(KeyCode::Enter));
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_duplicate_add_leaves_list_unchanged() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        add_expense(&mut s, "Coffee", "6");
        assert_eq!(s.expenses.len(), 1);
        assert_eq!(s.notice.as_deref(), Some("Item already exists in the list."));
    }

    #[test]
    fn test_edit_flow_updates_record() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Char('e')));
        assert_eq!(s.expenses.editing(), Some(0));
        assert_eq!(s.form.title.text, "Coffee");
        assert_eq!(s.form.price.text, "5");
        assert_eq!(s.focus, FocusPanel::TitleInput);

        s.form.title.set_text("Tea");
        s.form.price.set_text("3");
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.expenses.len(), 1);
        assert_eq!(s.expenses.records()[0].title, "Tea");
        assert_eq!(s.expenses.records()[0].price, "3");
        assert_eq!(s.expenses.editing(), None);
    }

    #[test]
    fn test_edit_loads_month_and_year() {
        let mut s = state();
        s.selected_month = Month::May;
        s.selected_year = 2026;
        add_expense(&mut s, "Coffee", "5");
        s.selected_month = Month::January;
        s.selected_year = 2024;
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Char('e')));
        assert_eq!(s.selected_month, Month::May);
        assert_eq!(s.selected_year, 2026);
    }

    #[test]
    fn test_esc_cancels_edit_without_mutation() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Char('e')));
        type_str(&mut s, " Beans");
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.expenses.editing(), None);
        assert!(s.form.title.text.is_empty());
        assert_eq!(s.expenses.records()[0].title, "Coffee");
        assert_eq!(s.expenses.len(), 1);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        add_expense(&mut s, "Tea", "3");
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Home));
        handle_key(&mut s, key(KeyCode::Char('d')));
        assert_eq!(s.confirm_delete, Some(0));
        assert_eq!(s.expenses.len(), 2);

        // Esc backs out without deleting
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.confirm_delete, None);
        assert_eq!(s.expenses.len(), 2);

        // Enter confirms
        handle_key(&mut s, key(KeyCode::Char('d')));
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.expenses.len(), 1);
        assert_eq!(s.expenses.records()[0].title, "Tea");
        assert_eq!(s.confirm_delete, None);
    }

    #[test]
    fn test_deleting_edited_record_clears_form() {
        let mut s = state();
        add_expense(&mut s, "Coffee", "5");
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Char('e')));
        focus_list(&mut s);
        handle_key(&mut s, key(KeyCode::Char('d')));
        handle_key(&mut s, key(KeyCode::Char('y')));
        assert!(s.expenses.is_empty());
        assert_eq!(s.expenses.editing(), None);
        assert!(s.form.title.text.is_empty());
    }

    #[test]
    fn test_month_picker_selection() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::F(2)));
        assert!(s.month_picker.visible);
        // Keystrokes go to the picker, not the form
        handle_key(&mut s, key(KeyCode::Char('x')));
        assert!(s.form.title.text.is_empty());
        handle_key(&mut s, key(KeyCode::Down));
        handle_key(&mut s, key(KeyCode::Down));
        handle_key(&mut s, key(KeyCode::Enter));
        assert!(!s.month_picker.visible);
        assert_eq!(s.selected_month, Month::March);
    }

    #[test]
    fn test_year_picker_selection() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::F(3)));
        assert!(s.year_picker.visible);
        handle_key(&mut s, key(KeyCode::End));
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.selected_year, 2028);
    }

    #[test]
    fn test_theme_toggle_persists_config() {
        let mut s = state();
        assert!(!s.config.ui.dark_mode);
        let actions = handle_key(&mut s, key(KeyCode::F(4)));
        assert!(s.config.ui.dark_mode);
        assert_eq!(actions, vec![Action::PersistConfig]);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut s = state();
        let actions = handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }
}
