//! Tab autocomplete for terminal commands and paths.
//!
//! Completes:
//! - Command names (e.g., "cl" → "clear")
//! - Directory names for `cd`
//! - Any listed name for `cat` and `rm`
//!
//! A single match completes immediately; several matches return their
//! common prefix so the input can cycle through them.

use crate::core::{Command, VirtualFs, path};

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches.
    Multiple {
        /// Input extended by the longest shared prefix
        common: String,
        /// Input up to the word being completed; `stem + match` is a full line
        stem: String,
        /// Display names (directories end in `/`)
        matches: Vec<String>,
    },
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands that accept directory paths as arguments.
const DIR_COMMANDS: &[&str] = &["cd"];

/// Commands that accept file or directory names as arguments.
const ENTRY_COMMANDS: &[&str] = &["cat", "rm"];

// ============================================================================
// Completion Context
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    Command,
    DirectoryPath,
    EntryPath,
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    ///
    /// Returns the mode, the command word and the word being completed.
    fn from_input(input: &str) -> (Self, &str, &str) {
        let Some((cmd, rest)) = input.split_once(' ') else {
            return (Self::Command, input, input);
        };

        // Only the last word is completed
        let partial = rest.rsplit(' ').next().unwrap_or_default();
        let cmd_lower = cmd.to_lowercase();
        let mode = if DIR_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::DirectoryPath
        } else if ENTRY_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::EntryPath
        } else {
            Self::None
        };

        (mode, cmd, partial)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Partial path split into the directory to search and the name prefix.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "~/Documents/" or "").
    dir_part: &'a str,
    /// Name being completed.
    name_part: &'a str,
    /// Canonical directory to search.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, current_path: &str, fs: &VirtualFs) -> Option<Self> {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            current_path.to_string()
        } else {
            path::resolve_file(current_path, dir_part)?
        };

        fs.is_directory(&search_dir).then_some(Self {
            dir_part,
            name_part,
            search_dir,
        })
    }

    /// Listed children matching the typed prefix, with directory flags.
    fn matches<'fs>(&self, fs: &'fs VirtualFs, dirs_only: bool) -> Vec<(&'fs str, bool)> {
        fs.children(&self.search_dir)
            .iter()
            .map(|name| {
                let is_dir = fs.is_child_directory(&self.search_dir, name);
                (name.as_str(), is_dir)
            })
            .filter(|(name, is_dir)| (!dirs_only || *is_dir) && name.starts_with(self.name_part))
            .collect()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, current_path: &str, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    match CompletionMode::from_input(input) {
        (CompletionMode::Command, cmd, _) => complete_command(cmd),
        (CompletionMode::DirectoryPath, _, partial) => {
            complete_path(input, partial, current_path, fs, true)
        }
        (CompletionMode::EntryPath, _, partial) => {
            complete_path(input, partial, current_path, fs, false)
        }
        (CompletionMode::None, _, _) => AutocompleteResult::None,
    }
}

/// Ghost text hint while typing: the suffix that would complete the input.
pub fn get_hint(input: &str, current_path: &str, fs: &VirtualFs) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match CompletionMode::from_input(input) {
        (CompletionMode::Command, cmd, _) => get_command_hint(cmd),
        (CompletionMode::DirectoryPath, _, partial) => {
            get_path_hint(partial, current_path, fs, true)
        }
        (CompletionMode::EntryPath, _, partial) => {
            get_path_hint(partial, current_path, fs, false)
        }
        (CompletionMode::None, _, _) => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple {
                common,
                stem: String::new(),
                matches,
            }
        }
    }
}

fn get_command_hint(partial: &str) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    Command::names()
        .iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && **cmd != partial_lower)
        .map(|cmd| cmd[partial_lower.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    input: &str,
    partial: &str,
    current_path: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let Some(parsed) = ParsedPath::parse(partial, current_path, fs) else {
        return AutocompleteResult::None;
    };
    let matches = parsed.matches(fs, dirs_only);

    // Everything typed before the name being completed
    let stem = format!("{}{}", &input[..input.len() - partial.len()], parsed.dir_part);

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{}{}{}", stem, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(n, _)| n.to_string()).collect();
            let common = find_common_prefix(&names);
            let display: Vec<String> = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();
            AutocompleteResult::Multiple {
                common: format!("{}{}", stem, common),
                stem,
                matches: display,
            }
        }
    }
}

fn get_path_hint(
    partial: &str,
    current_path: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> Option<String> {
    let parsed = ParsedPath::parse(partial, current_path, fs)?;
    parsed
        .matches(fs, dirs_only)
        .into_iter()
        .find(|(name, _)| *name != parsed.name_part)
        .map(|(name, is_dir)| {
            let suffix = if is_dir { "/" } else { "" };
            format!("{}{}", &name[parsed.name_part.len()..], suffix)
        })
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the longest common prefix of several strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in &strings[1..] {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================
