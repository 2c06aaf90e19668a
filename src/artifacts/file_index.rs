use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// A discovered source file: the filename stem used as sort key, plus the
/// full path it was found at.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileEntry {
    key: String,
    path: PathBuf,
}

impl FileEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Insertion-ordered key-to-path mapping built during discovery.
///
/// Re-inserting an existing key overwrites its path in place, so the entry
/// keeps its original position. Duplicate stems across subdirectories
/// therefore collapse to whichever path the traversal reached last.
#[derive(Debug, Default)]
pub struct FileIndex {
    entries: Vec<FileEntry>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, path: PathBuf) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.path = path,
            None => self.entries.push(FileEntry::new(key, path)),
        }
    }

    /// Folds another index into this one under the same last-write-wins
    /// rule: keys already present keep their position and take the other
    /// index's path, new keys append in the other's order.
    pub fn merge(&mut self, other: FileIndex) {
        for entry in other.entries {
            self.insert(entry.key, entry.path);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the index into entries sorted ascending by the integer value
    /// of their keys. Keys that differ as strings but agree numerically
    /// ("007" vs "7") keep their insertion order, since the sort is stable.
    /// A key that does not parse as an integer is an error, never a silent
    /// coercion or skip.
    pub fn into_sorted(self) -> anyhow::Result<Vec<FileEntry>> {
        let mut keyed = self
            .entries
            .into_iter()
            .map(|entry| {
                let value = entry
                    .key
                    .parse::<i64>()
                    .with_context(|| format!("file name `{}` is not a numeric key", entry.key))?;

                Ok((value, entry))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        keyed.sort_by_key(|(value, _)| *value);

        Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
    }
}
