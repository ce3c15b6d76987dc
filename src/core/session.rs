//! Session state and the line dispatcher.
//!
//! A [`Session`] owns everything the shell remembers while the page is open:
//! the working directory, the recall buffer and the transcript. Exactly one
//! exists per page; nothing is persisted. The text being typed is not part
//! of it; recall steps return a [`Recall`] for the input field to apply.

use crate::config::{ASCII_BANNER, HOME};
use crate::core::commands::{Command, Effect, execute_command};
use crate::core::history::{CommandHistory, Recall};
use crate::core::{VirtualFs, parse_input};
use crate::models::{HistoryEntry, Timestamp};
use crate::utils::log;

#[derive(Clone, Debug)]
pub struct Session {
    current_path: String,
    history: CommandHistory,
    /// Append-only; emptied only as a whole.
    transcript: Vec<HistoryEntry>,
}

impl Session {
    /// Empty session at home.
    pub fn new() -> Self {
        Self {
            current_path: HOME.to_string(),
            history: CommandHistory::new(),
            transcript: Vec::new(),
        }
    }

    /// Session whose transcript starts with the ASCII banner.
    pub fn with_banner(now: Timestamp) -> Self {
        let mut session = Self::new();
        session
            .transcript
            .push(HistoryEntry::new("", ASCII_BANNER.trim_end(), HOME, now));
        session
    }

    /// Run one submitted line.
    ///
    /// Blank input is ignored entirely and leaves every bit of state as it
    /// was. Otherwise the line is recorded in the recall buffer, the command
    /// runs, its effect is applied and a transcript entry is appended.
    /// `clear` leaves no entry behind.
    ///
    /// Returns the new transcript entry, if any.
    pub fn submit(&mut self, line: &str, fs: &VirtualFs, now: Timestamp) -> Option<&HistoryEntry> {
        let parsed = parse_input(line)?;
        let trimmed = line.trim();
        self.history.push(trimmed);

        let cmd = Command::parse(&parsed.name, &parsed.args);
        if let Command::Unknown(ref name) = cmd {
            log::debug(&format!("unknown command: {}", name));
        }

        let path_before = self.current_path.clone();
        let result = execute_command(cmd, fs, &path_before, &now);

        match result.effect {
            Some(Effect::ChangeDirectory(path)) => self.current_path = path,
            Some(Effect::ClearTranscript) => self.clear_transcript(),
            None => {}
        }

        if parsed.name.eq_ignore_ascii_case("clear") {
            self.clear_transcript();
            return None;
        }

        self.transcript
            .push(HistoryEntry::new(trimmed, result.output, path_before, now));
        self.transcript.last()
    }

    /// Drop every transcript entry. The recall buffer is untouched.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// ArrowUp: step to an older command.
    pub fn recall_previous(&mut self) -> Recall {
        self.history.previous()
    }

    /// ArrowDown: step to a newer command, or past the newest.
    pub fn recall_next(&mut self) -> Recall {
        self.history.next()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn transcript(&self) -> &[HistoryEntry] {
        &self.transcript
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
