//! Stateful collaborators of a chunking run
//!
//! - `workspace`: read-only view over the source tree, owns file discovery
//! - `chunker`: orchestrator tying the configuration, the workspace and the
//!   output writer together

pub mod chunker;
pub mod workspace;
