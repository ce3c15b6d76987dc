//! Terminal-related data types for transcript rendering.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{APP_NAME, USER_NAME};

/// The instant a command line was submitted.
///
/// Captured once per submission by the presentation layer, so command
/// handlers never read the clock themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Timestamp {
    /// Milliseconds since the Unix epoch.
    pub millis: f64,
    /// Locale-formatted representation, as printed by `date`.
    pub display: String,
}

impl Timestamp {
    pub fn new(millis: f64, display: impl Into<String>) -> Self {
        Self {
            millis,
            display: display.into(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// A single transcript record: one submitted command and its output.
///
/// Entries are immutable once created. The transcript may be dropped as a
/// whole by `clear`, but individual entries are never edited.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// Command text as submitted (empty for the banner)
    pub command: String,
    /// Output text; newlines separate display lines
    pub output: String,
    /// Working directory at the time of execution
    pub path: String,
    pub timestamp: Timestamp,
}

// Global counter for generating unique IDs
static HISTORY_ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl HistoryEntry {
    pub fn new(
        command: impl Into<String>,
        output: impl Into<String>,
        path: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: HISTORY_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            command: command.into(),
            output: output.into(),
            path: path.into(),
            timestamp,
        }
    }

    /// Whether a prompt line should be rendered for this entry.
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }

    /// Prompt as it looked when the command was submitted.
    pub fn prompt(&self) -> String {
        prompt(&self.path)
    }

    /// Output split into display lines.
    pub fn output_lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines()
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.command == other.command
            && self.output == other.output
            && self.path == other.path
            && self.timestamp == other.timestamp
    }
}

/// Prompt string for a working directory.
///
/// Format: `{user}@{host}:{path}`
pub fn prompt(path: &str) -> String {
    format!("{}@{}:{}", USER_NAME, APP_NAME, path)
}
