//! Diagnostics and the on-disk expense journal.
//!
//! The TUI owns the terminal, so tracing output goes to a file under the
//! user's data directory. The journal is separate: human-readable lines for
//! every add/update/delete, appended to daily files in the configured
//! journal directory (default: `~/.local/share/expenselog/journal/`).

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

use crate::app::state::{JournalEvent, JournalKind};
use crate::config::JournalConfig;

/// Route tracing diagnostics to `<data_dir>/expenselog/expenselog.log`.
pub fn init_tracing() -> Result<()> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("expenselog");
    fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("expenselog.log"))?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Appends expense events to daily journal files named
/// `expenses_<date>.log`.
///
/// File handles are cached for the lifetime of the journal to avoid
/// repeated opens. Falls back to `/dev/null` if a journal file cannot be
/// created.
pub struct ExpenseJournal {
    enabled: bool,
    dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl ExpenseJournal {
    pub fn new(config: &JournalConfig) -> Self {
        Self {
            enabled: config.enabled,
            dir: config.dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Write one event line. No-op if the journal is disabled.
    pub fn log_event(&mut self, event: &JournalEvent) {
        if !self.enabled {
            return;
        }

        let verb = match event.kind {
            JournalKind::Added => "added",
            JournalKind::Updated => "updated",
            JournalKind::Removed => "removed",
        };
        let line = format!(
            "[{}] {} \"{}\" (${})",
            event.timestamp, verb, event.title, event.price
        );

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("expenses_{}.log", date);

        // Expand ~ in the journal dir
        let dir = if self.dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(self.dir.trim_start_matches("~/"))
            } else {
                PathBuf::from(&self.dir)
            }
        } else {
            PathBuf::from(&self.dir)
        };

        let filepath = dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
