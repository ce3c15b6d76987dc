//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{ABOUT_TEXT, EASTER_EGG, HELP_TEXT, LS_COLUMN_GAP, USER_NAME};
use crate::core::error::ShellError;
use crate::core::{VirtualFs, path};
use crate::models::Timestamp;

use super::{Command, CommandResult, Effect, PathArg};

/// Execute a parsed command and return its result.
///
/// Handlers are total: failures come back as output text. State changes are
/// returned as an [`Effect`], never applied here.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem
/// * `current_path` - Working directory (canonical path)
/// * `now` - Time of submission, printed by `date`
pub fn execute_command(
    cmd: Command,
    fs: &VirtualFs,
    current_path: &str,
    now: &Timestamp,
) -> CommandResult {
    let result = match cmd {
        Command::Help => Ok(CommandResult::output(HELP_TEXT.trim_end())),
        Command::Clear => Ok(CommandResult::effect(Effect::ClearTranscript)),
        Command::Echo(text) => Ok(CommandResult::output(text)),
        Command::Date => Ok(CommandResult::output(now.to_string())),
        Command::Pwd => Ok(CommandResult::output(current_path)),
        Command::Ls => execute_ls(fs, current_path),
        Command::Cd(target) => execute_cd(target, fs, current_path),
        Command::Cat(file) => execute_cat(file, fs, current_path),
        Command::Rm(args) => execute_rm(&args, fs, current_path),
        Command::About => Ok(CommandResult::output(ABOUT_TEXT.trim_end())),
        Command::Whoami => Ok(CommandResult::output(USER_NAME)),
        Command::Unknown(name) => Err(ShellError::CommandNotFound(name)),
    };

    result.unwrap_or_else(|e| CommandResult::output(e.to_string()))
}

/// Execute `ls` command.
///
/// Directory children get a trailing `/`.
fn execute_ls(fs: &VirtualFs, current_path: &str) -> Result<CommandResult, ShellError> {
    let children = fs.children(current_path);
    if children.is_empty() {
        return Err(ShellError::DirectoryEmpty);
    }

    let names: Vec<String> = children
        .iter()
        .map(|name| {
            if fs.is_child_directory(current_path, name) {
                format!("{}/", name)
            } else {
                name.clone()
            }
        })
        .collect();

    Ok(CommandResult::output(names.join(LS_COLUMN_GAP)))
}

/// Execute `cd` command.
fn execute_cd(
    target: Option<PathArg>,
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    let token = target.as_ref().map(PathArg::as_str).unwrap_or_default();

    match path::resolve(current_path, token) {
        Some(new_path) if fs.is_directory(&new_path) => {
            Ok(CommandResult::effect(Effect::ChangeDirectory(new_path)))
        }
        _ => Err(ShellError::NoSuchFile {
            cmd: "cd",
            name: token.to_string(),
        }),
    }
}

/// Execute `cat` command.
fn execute_cat(
    file: Option<PathArg>,
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    let file = file.ok_or(ShellError::MissingFileOperand("cat"))?;
    let name = file.as_str();
    let not_found = || ShellError::NoSuchFile {
        cmd: "cat",
        name: name.to_string(),
    };

    let resolved = path::resolve_file(current_path, name).ok_or_else(not_found)?;

    if fs.is_directory(&resolved) {
        return Err(ShellError::IsADirectory {
            cmd: "cat",
            name: name.to_string(),
        });
    }
    if let Some(content) = fs.file_content(&resolved) {
        return Ok(CommandResult::output(content));
    }
    if !fs.has_child(current_path, name) {
        return Err(not_found());
    }

    // Listed, but no content defined
    Ok(CommandResult::output(format!(
        "cat: {}: File is empty or binary",
        name
    )))
}

/// Execute `rm` command.
///
/// Nothing is ever removed; the filesystem is read-only.
fn execute_rm(
    args: &[String],
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    let target = args.last().ok_or(ShellError::MissingOperand("rm"))?;
    let has = |flag: &str| args.iter().any(|a| a == flag);
    let destructive = has("-rf") || has("-fr");

    if destructive && has(".") {
        return Ok(CommandResult::output(EASTER_EGG.trim_end()));
    }
    if destructive && (has("/") || has("*") || has("~")) {
        return Err(ShellError::PermissionDenied);
    }

    if !fs.has_child(current_path, target) {
        return Err(ShellError::CannotRemove(target.clone()));
    }

    if fs.is_child_directory(current_path, target) {
        if destructive || (has("-r") && has("-f")) {
            Ok(CommandResult::output(format!(
                "rm: '{}' and its contents have been removed",
                target
            )))
        } else {
            Err(ShellError::RmIsADirectory(target.clone()))
        }
    } else {
        Ok(CommandResult::output(format!(
            "rm: '{}' has been removed",
            target
        )))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FS_MANIFEST;

    fn fs() -> VirtualFs {
        VirtualFs::from_toml(FS_MANIFEST).unwrap()
    }

    fn now() -> Timestamp {
        Timestamp::new(1_700_000_000_000.0, "Tue Nov 14 2023 22:13:20 GMT+0000")
    }

    fn run(line: &str, cwd: &str) -> CommandResult {
        let parsed = crate::core::parse_input(line).expect("non-empty line");
        execute_command(Command::parse(&parsed.name, &parsed.args), &fs(), cwd, &now())
    }

    fn out(line: &str, cwd: &str) -> String {
        run(line, cwd).output
    }

    #[test]
    fn test_static_commands() {
        assert!(out("help", "~").starts_with("Available commands:"));
        assert!(out("help", "~").contains("whoami   - Show current user"));
        assert!(out("about", "~").starts_with("Terminal Website"));
        assert_eq!(out("whoami", "~"), "visitor");
        assert_eq!(out("echo hello   world", "~"), "hello world");
        assert_eq!(out("echo", "~"), "");
        assert_eq!(out("date", "~"), "Tue Nov 14 2023 22:13:20 GMT+0000");
        assert_eq!(out("pwd", "~/Music"), "~/Music");
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            out("sudo rm", "~"),
            "Command not found: sudo. Type 'help' for available commands."
        );
        assert_eq!(run("sudo", "~").effect, None);
    }

    #[test]
    fn test_clear_requests_transcript_clear() {
        assert_eq!(
            run("clear", "~"),
            CommandResult::effect(Effect::ClearTranscript)
        );
    }

    #[test]
    fn test_ls_home() {
        assert_eq!(
            out("ls", "~"),
            "Documents/    Downloads/    Pictures/    Projects/    Music/    Videos/    \
             Desktop/    .bashrc    .profile    .gitconfig    README.md    CV.md"
        );
    }

    #[test]
    fn test_ls_every_directory() {
        let fs = fs();
        let dirs: Vec<String> = fs.directory_paths().map(str::to_string).collect();
        for dir in dirs {
            let expected: Vec<String> = fs
                .children(&dir)
                .iter()
                .map(|c| {
                    if fs.is_directory(&path::child_path(&dir, c)) {
                        format!("{}/", c)
                    } else {
                        c.clone()
                    }
                })
                .collect();
            let result = execute_command(Command::Ls, &fs, &dir, &now());
            assert_eq!(result.output, expected.join(LS_COLUMN_GAP), "ls in {}", dir);
        }
    }

    #[test]
    fn test_ls_empty_directory() {
        let fs = VirtualFs::empty();
        let result = execute_command(Command::Ls, &fs, "~", &now());
        assert_eq!(result.output, "Directory is empty");
    }

    #[test]
    fn test_ls_leaf_dirs_without_entries_are_files() {
        // `album` is listed under ~/Music but has no directory record
        assert_eq!(
            out("ls", "~/Music"),
            "song1.mp3    album    playlist.m3u"
        );
    }

    #[test]
    fn test_cd() {
        assert_eq!(
            run("cd Documents", "~"),
            CommandResult::effect(Effect::ChangeDirectory("~/Documents".into()))
        );
        assert_eq!(
            run("cd", "~/Documents"),
            CommandResult::effect(Effect::ChangeDirectory("~".into()))
        );
        assert_eq!(
            run("cd ..", "~/Documents"),
            CommandResult::effect(Effect::ChangeDirectory("~".into()))
        );
        assert_eq!(
            run("cd ..", "~"),
            CommandResult::effect(Effect::ChangeDirectory("~".into()))
        );
        assert_eq!(
            run("cd ~/Music", "~/Documents"),
            CommandResult::effect(Effect::ChangeDirectory("~/Music".into()))
        );
    }

    #[test]
    fn test_cd_errors() {
        assert_eq!(
            out("cd nowhere", "~"),
            "cd: nowhere: No such file or directory"
        );
        assert_eq!(out("cd /", "~"), "cd: /: No such file or directory");
        assert_eq!(
            out("cd README.md", "~"),
            "cd: README.md: No such file or directory"
        );
        assert_eq!(run("cd nowhere", "~").effect, None);
    }

    #[test]
    fn test_cat() {
        let fs = fs();
        assert_eq!(
            out("cat notes.md", "~/Documents"),
            fs.file_content("~/Documents/notes.md").unwrap()
        );
        assert_eq!(
            out("cat ./notes.md", "~/Documents"),
            fs.file_content("~/Documents/notes.md").unwrap()
        );
        assert_eq!(
            out("cat ~/.bashrc", "~/Music"),
            fs.file_content("~/.bashrc").unwrap()
        );
    }

    #[test]
    fn test_cat_errors() {
        assert_eq!(out("cat", "~"), "cat: missing file operand");
        assert_eq!(out("cat Documents", "~"), "cat: Documents: Is a directory");
        assert_eq!(out("cat ~/Videos", "~/Music"), "cat: ~/Videos: Is a directory");
        assert_eq!(
            out("cat nosuchfile.txt", "~"),
            "cat: nosuchfile.txt: No such file or directory"
        );
        assert_eq!(
            out("cat /etc/passwd", "~"),
            "cat: /etc/passwd: No such file or directory"
        );
        assert_eq!(
            out("cat image.jpg", "~/Downloads"),
            "cat: image.jpg: File is empty or binary"
        );
    }

    #[test]
    fn test_rm_easter_egg() {
        assert_eq!(out("rm -rf .", "~"), EASTER_EGG.trim_end());
        assert_eq!(out("rm . -rf", "~/Documents"), EASTER_EGG.trim_end());
    }

    #[test]
    fn test_rm_protected_targets() {
        for target in ["/", "*", "~"] {
            assert_eq!(
                out(&format!("rm -rf {}", target), "~"),
                ShellError::PermissionDenied.to_string()
            );
        }
    }

    #[test]
    fn test_rm_simulated() {
        assert_eq!(out("rm", "~"), "rm: missing operand");
        assert_eq!(out("rm README.md", "~"), "rm: 'README.md' has been removed");
        assert_eq!(out("rm Music", "~"), "rm: Music: is a directory");
        assert_eq!(
            out("rm -rf Music", "~"),
            "rm: 'Music' and its contents have been removed"
        );
        assert_eq!(
            out("rm -r -f Music", "~"),
            "rm: 'Music' and its contents have been removed"
        );
        assert_eq!(
            out("rm ghost.txt", "~"),
            "rm: cannot remove 'ghost.txt': No such file or directory"
        );
        // Never actually removed
        assert_eq!(out("rm README.md", "~"), "rm: 'README.md' has been removed");
        assert!(out("ls", "~").contains("README.md"));
    }

    #[test]
    fn test_handlers_are_total() {
        let inputs = [
            "", "..", ".", "~", "/", "*", "-rf", "-r", "-f", "~/", "./", "a/../b", "Documents/",
            "ünïcødé", "~/Documents/notes.md",
        ];
        let fs = fs();
        for name in Command::names().iter().chain(["bogus"].iter()) {
            for arg in inputs {
                for cwd in ["~", "~/Documents", "~/nonexistent"] {
                    let args: Vec<String> = if arg.is_empty() {
                        vec![]
                    } else {
                        vec![arg.to_string(), arg.to_string()]
                    };
                    let _ = execute_command(Command::parse(name, &args), &fs, cwd, &now());
                }
            }
        }
    }
}
