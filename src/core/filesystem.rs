use std::collections::HashMap;

use crate::config::{FS_MANIFEST, HOME};
use crate::core::error::ManifestError;
use crate::core::path;
use crate::models::Manifest;
use crate::utils::log;

/// Result of looking up a canonical path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    /// A known directory with its children in display order.
    Directory(&'a [String]),
    /// A known file with literal content.
    File(&'a str),
    Unknown,
}

/// Read-only virtual filesystem.
///
/// Two flat tables keyed by canonical path (see [`crate::core::path`]):
/// one for directory listings, one for file contents. A key present in the
/// directory table is a directory, whatever the file table says.
///
/// There are no mutation operations. `rm` only pretends.
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    directories: HashMap<String, Vec<String>>,
    files: HashMap<String, String>,
}

impl VirtualFs {
    /// Create filesystem from manifest.
    ///
    /// Later records win when a path appears twice.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let directories = manifest
            .directories
            .iter()
            .map(|d| (d.path.clone(), d.children.clone()))
            .collect();
        let files = manifest
            .files
            .iter()
            .map(|f| (f.path.clone(), f.content.clone()))
            .collect();

        Self { directories, files }
    }

    /// Parse a TOML manifest.
    pub fn from_toml(source: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(source)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// The compiled-in demo filesystem.
    ///
    /// Falls back to an empty home directory if the manifest is broken.
    pub fn builtin() -> Self {
        match Self::from_toml(FS_MANIFEST) {
            Ok(fs) => {
                log::info(&format!(
                    "Mounted {} directories, {} files",
                    fs.directories.len(),
                    fs.files.len()
                ));
                fs
            }
            Err(e) => {
                log::warn(&format!("Mount failed: {}", e));
                Self::empty()
            }
        }
    }

    /// Filesystem with nothing but an empty home directory.
    pub fn empty() -> Self {
        let mut directories = HashMap::new();
        directories.insert(HOME.to_string(), Vec::new());
        Self {
            directories,
            files: HashMap::new(),
        }
    }

    /// Look up a canonical path.
    pub fn lookup(&self, path: &str) -> Node<'_> {
        if let Some(children) = self.directories.get(path) {
            Node::Directory(children)
        } else if let Some(content) = self.files.get(path) {
            Node::File(content)
        } else {
            Node::Unknown
        }
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.directories.contains_key(path)
    }

    /// Children of a directory, or an empty slice for anything else.
    pub fn children(&self, path: &str) -> &[String] {
        self.directories
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `name` is listed among the children of `dir`.
    pub fn has_child(&self, dir: &str, name: &str) -> bool {
        self.children(dir).iter().any(|c| c == name)
    }

    /// Whether the child `name` of `dir` is itself a directory.
    pub fn is_child_directory(&self, dir: &str, name: &str) -> bool {
        self.is_directory(&path::child_path(dir, name))
    }

    /// Literal content of a file, if defined.
    pub fn file_content(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// All directory paths (unordered).
    pub fn directory_paths(&self) -> impl Iterator<Item = &str> {
        self.directories.keys().map(String::as_str)
    }
}
