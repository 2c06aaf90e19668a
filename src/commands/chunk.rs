use crate::areas::chunker::Chunker;
use crate::artifacts::chunk::{ChunkAssignment, chunk_count};
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::io::Write;

const SEPARATOR: &str = "--------------------------------------------------------";

impl Chunker {
    /// Discovers matching files, sorts them ascending by the integer value of
    /// their stems and copies them into fixed-size batches under the output
    /// root, one numbered folder per batch. Folders are created on first use;
    /// copies keep the source basename and overwrite any previous copy. The
    /// first filesystem failure aborts the run, already-copied files stay.
    pub fn chunk(&self) -> anyhow::Result<()> {
        let config = self.config();

        let index = {
            let mut writer = self.writer();
            self.workspace()
                .discover(&config.extension, config.verbose, writer.as_mut())?
        };

        let entries = index.into_sorted()?;
        let file_count = entries.len();
        let total_chunks = chunk_count(file_count, config.chunk_size);

        {
            let mut writer = self.writer();
            writeln!(writer, "{SEPARATOR}")?;
            writeln!(
                writer,
                "> Total {} files found in directory",
                file_count.to_string().bold()
            )?;
            writeln!(
                writer,
                "> Total {} chunk creatable with {} chunk size",
                total_chunks.to_string().bold(),
                config.chunk_size
            )?;
        }

        for (position, entry) in entries.iter().enumerate() {
            let assignment = ChunkAssignment::new(position, config.chunk_size);
            let chunk_directory = config.output.join(assignment.folder_name());

            if !chunk_directory.exists() {
                // bare create_dir: a missing output root is a fatal error,
                // not something to paper over with create_dir_all
                fs::create_dir(&chunk_directory).with_context(|| {
                    format!("failed to create chunk directory {:?}", chunk_directory)
                })?;

                writeln!(
                    self.writer(),
                    "Chunk folder created `{}`",
                    assignment.folder_name().green()
                )?;
            }

            let file_name = entry
                .path()
                .file_name()
                .with_context(|| format!("source path {:?} has no file name", entry.path()))?;

            fs::copy(entry.path(), chunk_directory.join(file_name)).with_context(|| {
                format!(
                    "failed to copy {:?} into chunk directory {:?}",
                    entry.path(),
                    chunk_directory
                )
            })?;
        }

        Ok(())
    }
}
