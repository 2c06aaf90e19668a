//! Value types produced and consumed while chunking
//!
//! - `file_index`: the ordered key-to-path mapping built by discovery
//! - `chunk`: chunk-index arithmetic (batch ordinals, folder names, counts)

pub mod chunk;
pub mod file_index;
