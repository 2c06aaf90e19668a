/// A file's batch assignment, derived from its 0-based rank in the sorted
/// sequence. Never stored, recomputed per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAssignment {
    ordinal: usize,
    chunk_size: usize,
}

impl ChunkAssignment {
    pub fn new(position: usize, chunk_size: usize) -> Self {
        ChunkAssignment {
            ordinal: position / chunk_size + 1,
            chunk_size,
        }
    }

    /// 1-based sequence number of the chunk this file belongs to.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Output subdirectory name: the chunk's upper bound (`ordinal * size`),
    /// so "100", "200", ... for a chunk size of 100 rather than "1", "2".
    pub fn folder_name(&self) -> String {
        (self.ordinal * self.chunk_size).to_string()
    }
}

/// Number of chunks reported for a file count: floor division plus one, so
/// at least 1 even for an empty set. An exact multiple of the chunk size
/// reports one chunk more than ever gets populated.
pub fn chunk_count(file_count: usize, chunk_size: usize) -> usize {
    file_count / chunk_size + 1
}
