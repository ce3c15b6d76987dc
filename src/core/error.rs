//! Custom error types for the application.
//!
//! - [`ShellError`] - command failures; the `Display` text is exactly the
//!   line shown in the terminal
//! - [`ManifestError`] - the compiled-in filesystem manifest failed to load

use thiserror::Error;

/// Errors produced by command handlers.
///
/// There is no separate error channel in the terminal: the dispatcher turns
/// every error into ordinary output text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    CommandNotFound(String),

    #[error("{0}: missing operand")]
    MissingOperand(&'static str),

    #[error("{0}: missing file operand")]
    MissingFileOperand(&'static str),

    #[error("{cmd}: {name}: No such file or directory")]
    NoSuchFile { cmd: &'static str, name: String },

    #[error("{cmd}: {name}: Is a directory")]
    IsADirectory { cmd: &'static str, name: String },

    /// `rm` on a directory without `-r` and `-f`.
    #[error("rm: {0}: is a directory")]
    RmIsADirectory(String),

    #[error("rm: cannot remove '{0}': No such file or directory")]
    CannotRemove(String),

    /// Destructive `rm` against the root, home or a wildcard.
    #[error("rm: Permission denied. You don't have the power to destroy everything here! 🛡️")]
    PermissionDenied,

    #[error("Directory is empty")]
    DirectoryEmpty,
}

/// Failure to build the virtual filesystem from its manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid filesystem manifest: {0}")]
    Parse(#[from] toml::de::Error),
}
