//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets and the demo filesystem are loaded at compile time using
//! `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner shown once when the session starts.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Output of `rm -rf .`.
pub const EASTER_EGG: &str = include_str!("../assets/text/easter_egg.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Description for `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Demo filesystem manifest (TOML).
pub const FS_MANIFEST: &str = include_str!("../assets/fs.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Host label displayed in the prompt.
pub const APP_NAME: &str = "terminal-website";

/// Fixed user name reported by `whoami` and shown in the prompt.
pub const USER_NAME: &str = "visitor";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// The single root of the virtual filesystem.
pub const HOME: &str = "~";

/// Path segment separator.
pub const SEPARATOR: char = '/';

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Separator placed between names in `ls` output.
pub const LS_COLUMN_GAP: &str = "    ";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
