//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Manifest`], [`DirectoryEntry`], [`FileEntry`] - Filesystem manifest
//! - [`HistoryEntry`], [`Timestamp`] - Transcript records
//! - [`ViewMode`] - Terminal / website view switching

mod filesystem;
mod terminal;
mod view;

pub use filesystem::{DirectoryEntry, FileEntry, Manifest};
pub use terminal::{HistoryEntry, Timestamp, prompt};
pub use view::ViewMode;
