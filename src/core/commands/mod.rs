//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` and `Effect` for command execution results
//! - `execute_command` for running a command against the virtual filesystem
//!
//! # Architecture
//!
//! The command set is closed: a name is matched to a `Command` variant by
//! `Command::parse`, and `execute_command` dispatches on the variant.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, Effect};

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// The path is stored as typed (not validated); resolution happens during
/// execution against the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    /// Arguments already joined with single spaces
    Echo(String),
    Date,
    Pwd,
    Ls,
    /// `None` for a bare `cd`
    Cd(Option<PathArg>),
    /// `None` when the file operand is missing
    Cat(Option<PathArg>),
    /// Raw arguments; flags and targets are interpreted at execution time
    Rm(Vec<String>),
    About,
    Whoami,
    /// Name as typed
    Unknown(String),
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "about", "cat", "cd", "clear", "date", "echo", "help", "ls", "pwd", "rm", "whoami",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively; arguments are kept verbatim.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "echo" => Self::Echo(args.join(" ")),
            "date" => Self::Date,
            "pwd" => Self::Pwd,
            "ls" => Self::Ls,
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "cat" => Self::Cat(args.first().map(PathArg::new)),
            "rm" => Self::Rm(args.to_vec()),
            "about" => Self::About,
            "whoami" => Self::Whoami,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
