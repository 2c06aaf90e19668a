//! Command implementations
//!
//! Each command is an `impl Chunker` block; the single user-facing command is
//! `chunk`, which runs discovery and the copy loop end to end.

pub mod chunk;
