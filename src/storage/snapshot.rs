// src/storage/snapshot.rs
// =============================================================================
// Reads the storage layout into memory.
//
// This is the only part of the auditor that touches the disk. The snapshot
// covers the base directory and, if it exists, the github.com directory with
// the children of every owner directory in it.
//
// Entries are sorted by name so the same directory always produces the same
// plan.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const GITHUB_DIR: &str = "github.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// A name inside an owner directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    /// False for a dangling symlink: the name is listed but nothing is there
    pub exists: bool,
}

// An entry of github.com/ plus the names inside it (empty for files)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerEntry {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<ChildEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSnapshot {
    pub root: PathBuf,
    pub entries: Vec<Entry>,
    // None when <root>/github.com does not exist
    pub github: Option<Vec<OwnerEntry>>,
}

impl StorageSnapshot {
    pub fn capture(root: &Path) -> Result<Self> {
        let entries = list_dir(root)
            .with_context(|| format!("Failed to list storage directory {}", root.display()))?;

        let github_path = root.join(GITHUB_DIR);
        let github = if github_path.is_dir() {
            let mut owners = Vec::new();
            for entry in list_dir(&github_path)
                .with_context(|| format!("Failed to list {}", github_path.display()))?
            {
                let children = match entry.kind {
                    EntryKind::Dir => {
                        let owner_path = github_path.join(&entry.name);
                        list_dir(&owner_path)
                            .with_context(|| format!("Failed to list {}", owner_path.display()))?
                            .into_iter()
                            .map(|child| ChildEntry {
                                // Path::exists follows symlinks
                                exists: owner_path.join(&child.name).exists(),
                                name: child.name,
                            })
                            .collect()
                    }
                    EntryKind::File => Vec::new(),
                };
                owners.push(OwnerEntry {
                    name: entry.name,
                    kind: entry.kind,
                    children,
                });
            }
            Some(owners)
        } else {
            None
        };

        debug!(
            root = %root.display(),
            entries = entries.len(),
            owners = github.as_ref().map_or(0, Vec::len),
            "captured storage snapshot"
        );

        Ok(Self {
            root: root.to_path_buf(),
            entries,
            github,
        })
    }
}

// Symlinks to directories count as directories, everything else as a file
fn list_dir(path: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dir_entry in std::fs::read_dir(path)? {
        let dir_entry = dir_entry?;
        let kind = if dir_entry.path().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        entries.push(Entry {
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
