//! Command line splitting.
//!
//! The grammar is deliberately minimal: the line is split on whitespace, the
//! first word names the command and the rest are passed through verbatim.
//! There is no quoting, escaping, globbing, variable expansion or piping, so
//! an argument can never contain a space.

/// A command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split an input line into a command.
///
/// Returns `None` for empty or whitespace-only input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_string();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
