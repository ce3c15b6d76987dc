//! Path resolution for the virtual filesystem.
//!
//! Every canonical path is rooted at the home marker `~` and uses `/` as the
//! separator, e.g. `~`, `~/Documents`, `~/Documents/notes.md`. There is no
//! other root: tokens starting with `/` never resolve.
//!
//! Resolution is purely syntactic. Whether the result names anything is
//! decided by [`crate::core::VirtualFs`].

use crate::config::{HOME, SEPARATOR};

/// Resolve a `cd`-style path token against the current directory.
///
/// Rules, in order:
/// 1. empty token → home
/// 2. `..` → parent of `current` (stays at home when already there)
/// 3. `.` → `current`
/// 4. `~` or `~/...` → used as-is, minus any trailing `/`
/// 5. `/...` → `None`
/// 6. anything else → joined onto `current`
///
/// Only a lone `..` is understood; `a/../b` is joined verbatim and simply
/// fails the later lookup.
pub fn resolve(current: &str, token: &str) -> Option<String> {
    if token.is_empty() {
        return Some(HOME.to_string());
    }
    if token == ".." {
        return Some(parent(current));
    }
    if token == "." {
        return Some(current.to_string());
    }

    let token = trim_trailing_separator(token);
    if token == HOME || is_home_rooted(token) {
        return Some(token.to_string());
    }
    if token.starts_with(SEPARATOR) {
        return None;
    }

    Some(child_path(current, token))
}

/// Resolve a file operand, additionally accepting the `./name` form.
pub fn resolve_file(current: &str, token: &str) -> Option<String> {
    match token.strip_prefix("./") {
        Some(rest) => Some(child_path(current, rest)),
        None => resolve(current, token),
    }
}

/// Join a directory path and a child name.
pub fn child_path(dir: &str, name: &str) -> String {
    format!("{}{}{}", dir, SEPARATOR, name)
}

/// Drop the last segment of a path. Home is its own parent.
pub fn parent(path: &str) -> String {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, _)) if !parent.is_empty() => parent.to_string(),
        _ => HOME.to_string(),
    }
}

fn is_home_rooted(token: &str) -> bool {
    token
        .strip_prefix(HOME)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

fn trim_trailing_separator(token: &str) -> &str {
    match token.strip_suffix(SEPARATOR) {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_home() {
        assert_eq!(resolve("~/Documents", ""), Some("~".to_string()));
    }

    #[test]
    fn test_parent() {
        assert_eq!(resolve("~/Documents", ".."), Some("~".to_string()));
        assert_eq!(resolve("~/a/b", ".."), Some("~/a".to_string()));
        // Popping below home is a no-op
        assert_eq!(resolve("~", ".."), Some("~".to_string()));
    }

    #[test]
    fn test_home_rooted() {
        assert_eq!(resolve("~/Music", "~/Videos"), Some("~/Videos".to_string()));
        assert_eq!(resolve("~/Music", "~"), Some("~".to_string()));
        assert_eq!(resolve("~", "~/Videos/"), Some("~/Videos".to_string()));
    }

    #[test]
    fn test_absolute_fails() {
        assert_eq!(resolve("~", "/"), None);
        assert_eq!(resolve("~", "/etc"), None);
        assert_eq!(resolve_file("~", "/etc/passwd"), None);
    }

    #[test]
    fn test_relative() {
        assert_eq!(resolve("~", "Documents"), Some("~/Documents".to_string()));
        assert_eq!(resolve("~", "Documents/"), Some("~/Documents".to_string()));
        assert_eq!(resolve("~/Music", "album"), Some("~/Music/album".to_string()));
        assert_eq!(resolve("~", "."), Some("~".to_string()));
    }

    #[test]
    fn test_no_multi_segment_folding() {
        assert_eq!(
            resolve("~", "Documents/../Music"),
            Some("~/Documents/../Music".to_string())
        );
    }

    #[test]
    fn test_resolve_file_dot_slash() {
        assert_eq!(
            resolve_file("~", "./README.md"),
            Some("~/README.md".to_string())
        );
        assert_eq!(
            resolve_file("~/Documents", "./notes.md"),
            Some("~/Documents/notes.md".to_string())
        );
        assert_eq!(
            resolve_file("~/Documents", "notes.md"),
            Some("~/Documents/notes.md".to_string())
        );
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("~", "a"), "~/a");
        assert_eq!(child_path("~/a", "b"), "~/a/b");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent("~"), "~");
        assert_eq!(parent("~/a"), "~");
        assert_eq!(parent("~/a/b"), "~/a");
    }
}
