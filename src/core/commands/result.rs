//! Command execution result type.

/// State change requested by a command.
///
/// Handlers never touch the session themselves; the dispatcher applies the
/// effect after the handler returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Set the working directory (canonical path).
    ChangeDirectory(String),
    /// Drop every transcript entry.
    ClearTranscript,
}

/// Result of executing a command.
///
/// Commands produce output text and optionally request a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output text; may be empty and may span several lines
    pub output: String,
    /// Optional state change (e.g., for `cd` command)
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no effect.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            output: text.into(),
            effect: None,
        }
    }

    /// Create a result with an effect and no output.
    pub fn effect(effect: Effect) -> Self {
        Self {
            output: String::new(),
            effect: Some(effect),
        }
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self::output(String::new())
    }
}
