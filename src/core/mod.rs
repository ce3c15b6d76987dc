//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`VirtualFs`] read-only virtual filesystem tables
//! - [`path`] resolution of user-typed paths to canonical keys
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`Session`] state and the line dispatcher
//! - [`autocomplete`] and [`get_hint`] for tab completion
//!
//! Nothing here touches the browser, so it is tested on the host.

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
pub mod history;
mod parser;
pub mod path;
mod session;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandResult, Effect, PathArg, execute_command};
pub use error::{ManifestError, ShellError};
pub use filesystem::{Node, VirtualFs};
pub use history::{CommandHistory, Recall};
pub use parser::{ParsedCommand, parse_input};
pub use session::Session;
