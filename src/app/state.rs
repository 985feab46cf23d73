use chrono::{Local, Month};

use crate::config::AppConfig;
use crate::expenses::list::ExpenseList;
use crate::expenses::record::{ExpenseRecord, DEFAULT_MONTH, DEFAULT_YEAR, MONTHS, YEARS};

/// Single-line text field with a byte-indexed cursor.
#[derive(Debug, Default)]
pub struct FieldState {
    pub text: String,
    pub cursor: usize,
}

impl FieldState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The two halves of the entry form.
#[derive(Debug, Default)]
pub struct FormState {
    pub title: FieldState,
    pub price: FieldState,
}

impl FormState {
    pub fn clear(&mut self) {
        self.title.clear();
        self.price.clear();
    }

    pub fn load(&mut self, record: &ExpenseRecord) {
        self.title.set_text(&record.title);
        self.price.set_text(&record.price);
    }
}

/// Popup list over a fixed option set.
#[derive(Debug, Default)]
pub struct PickerState {
    pub visible: bool,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl PickerState {
    pub fn open(&mut self, current: usize) {
        self.visible = true;
        self.selected = current;
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    TitleInput,
    PriceInput,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalKind {
    Added,
    Updated,
    Removed,
}

/// One line destined for the on-disk journal, drained by the main loop.
#[derive(Debug, Clone)]
pub struct JournalEvent {
    pub timestamp: String,
    pub kind: JournalKind,
    pub title: String,
    pub price: String,
}

pub struct AppState {
    pub config: AppConfig,
    pub expenses: ExpenseList,
    pub form: FormState,
    pub selected_month: Month,
    pub selected_year: u16,
    pub month_picker: PickerState,
    pub year_picker: PickerState,
    /// Index awaiting delete confirmation.
    pub confirm_delete: Option<usize>,
    /// Blocking notice text; captures all input until dismissed.
    pub notice: Option<String>,
    pub list_selected: usize,
    pub focus: FocusPanel,
    pub journal: Vec<JournalEvent>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            expenses: ExpenseList::new(),
            form: FormState::default(),
            selected_month: DEFAULT_MONTH,
            selected_year: DEFAULT_YEAR,
            month_picker: PickerState::default(),
            year_picker: PickerState::default(),
            confirm_delete: None,
            notice: None,
            list_selected: 0,
            focus: FocusPanel::TitleInput,
            journal: Vec::new(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::TitleInput => FocusPanel::PriceInput,
            FocusPanel::PriceInput => FocusPanel::List,
            FocusPanel::List => FocusPanel::TitleInput,
        };
        self.dirty = true;
    }

    /// Position of the selected month within the picker option set.
    pub fn month_index(&self) -> usize {
        MONTHS
            .iter()
            .position(|m| *m == self.selected_month)
            .unwrap_or(0)
    }

    /// Position of the selected year within the picker option set.
    pub fn year_index(&self) -> usize {
        YEARS
            .iter()
            .position(|y| *y == self.selected_year)
            .unwrap_or(0)
    }

    pub fn select_next_record(&mut self) {
        if self.list_selected + 1 < self.expenses.len() {
            self.list_selected += 1;
        }
    }

    pub fn select_prev_record(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    /// Keep the list selection in range after a removal.
    pub fn clamp_list_selection(&mut self) {
        if self.expenses.is_empty() {
            self.list_selected = 0;
        } else if self.list_selected >= self.expenses.len() {
            self.list_selected = self.expenses.len() - 1;
        }
    }

    pub fn record_journal(&mut self, kind: JournalKind, title: &str, price: &str) {
        self.journal.push(JournalEvent {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            title: title.to_string(),
            price: price.to_string(),
        });
    }

    pub fn status_line(&self) -> String {
        match self.expenses.editing() {
            Some(i) => format!("Editing #{}", i + 1),
            None => format!("Items: {}", self.expenses.len()),
        }
    }
}
