//! Manifest types describing the demo filesystem.
//!
//! The manifest is a TOML document compiled into the binary. It is only a
//! transport format: [`crate::core::VirtualFs`] turns it into lookup tables.

use serde::Deserialize;

/// Full filesystem manifest.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Manifest {
    /// Directory listings, in any order.
    #[serde(default, rename = "directory")]
    pub directories: Vec<DirectoryEntry>,
    /// Files with literal content.
    #[serde(default, rename = "file")]
    pub files: Vec<FileEntry>,
}

/// A directory and its children in display order.
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryEntry {
    /// Canonical path (e.g., `~/Documents`)
    pub path: String,
    /// Child names, not paths
    #[serde(default)]
    pub children: Vec<String>,
}

/// A file and its literal text content.
#[derive(Clone, Debug, Deserialize)]
pub struct FileEntry {
    /// Canonical path (e.g., `~/Documents/notes.md`)
    pub path: String,
    pub content: String,
}
