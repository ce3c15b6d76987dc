//! Command recall buffer for ArrowUp / ArrowDown navigation.
//!
//! The buffer is a list of accepted command lines plus a cursor. With no
//! cursor the user is typing freely (idle); with a cursor they are browsing
//! earlier lines. Navigation only moves the cursor, it never edits the list.

/// What the input field should show after a navigation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with this earlier command.
    Entry(String),
    /// Stepped past the newest entry: empty the input.
    Cleared,
    /// Nothing to do; leave the input as it is.
    Unchanged,
}

impl Recall {
    /// Apply this step to the text of an input field.
    pub fn apply(self, input: &mut String) {
        match self {
            Self::Entry(line) => *input = line,
            Self::Cleared => input.clear(),
            Self::Unchanged => {}
        }
    }
}

/// Deduplicated list of accepted command lines with a recall cursor.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing.
    ///
    /// Blank lines are ignored. A line equal to the most recent entry is
    /// not stored again; older repeats are.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.reset();
    }

    /// Stop browsing.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Step to an older entry (ArrowUp).
    pub fn previous(&mut self) -> Recall {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Entry(self.entries[index].clone())
    }

    /// Step to a newer entry (ArrowDown).
    pub fn next(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 >= self.entries.len() => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(i) => {
                self.cursor = Some(i + 1);
                Recall::Entry(self.entries[i + 1].clone())
            }
        }
    }

    /// Whether the user is currently browsing.
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
