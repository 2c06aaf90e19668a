use crate::artifacts::file_index::FileIndex;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only view over the source tree handed to discovery.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recursively lists the source tree and records every file whose
    /// extension matches `extension` (case-sensitive, given without the
    /// leading dot) as `{stem: full path}`. Each subdirectory is discovered
    /// into its own index and merged into the accumulator, so when two files
    /// share a stem the one reached later in the traversal wins. Everything
    /// else is skipped silently; an unreadable or missing directory is fatal.
    pub fn discover(
        &self,
        extension: &str,
        verbose: bool,
        writer: &mut dyn Write,
    ) -> anyhow::Result<FileIndex> {
        self.discover_dir(&self.path, extension, verbose, writer)
    }

    fn discover_dir(
        &self,
        dir: &Path,
        extension: &str,
        verbose: bool,
        writer: &mut dyn Write,
    ) -> anyhow::Result<FileIndex> {
        if verbose {
            writeln!(writer, "Scanning `{}`...", dir.display())?;
        }

        let mut index = FileIndex::new();

        // one directory level per call; subdirectories recurse below
        for entry in WalkDir::new(dir).max_depth(1) {
            let entry =
                entry.with_context(|| format!("failed to scan source directory {:?}", dir))?;

            if entry.depth() == 0 {
                continue;
            }

            if entry.file_type().is_dir() {
                index.merge(self.discover_dir(entry.path(), extension, verbose, writer)?);
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            if entry.path().extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }

            let Some(stem) = entry.path().file_stem() else {
                continue;
            };

            index.insert(
                stem.to_string_lossy().into_owned(),
                PathBuf::from(entry.path()),
            );
        }

        Ok(index)
    }
}
